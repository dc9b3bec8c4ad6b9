mod renderer;
mod ui;

pub use renderer::Renderer;
