mod layout;

pub use layout::{UiElement, UiElementId, UiLayout};
