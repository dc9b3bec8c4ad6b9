use macroquad::prelude::{Rect, Vec2};

/// Identifier for a clickable UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElementId {
    /// Entry in the inventory shelf, by display index
    InventoryEntry(usize),
    /// Crafting bench slot, 1-based
    CraftSlot(usize),
}

/// A single interactive UI element with its bounds
pub struct UiElement {
    pub id: UiElementId,
    pub bounds: Rect,
}

/// Layout of all interactive elements drawn this frame
#[derive(Default)]
pub struct UiLayout {
    elements: Vec<UiElement>,
}

impl UiLayout {
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(16),
        }
    }

    pub fn add(&mut self, id: UiElementId, bounds: Rect) {
        self.elements.push(UiElement { id, bounds });
    }

    /// Topmost element at a point (later additions win)
    pub fn hit_test(&self, x: f32, y: f32) -> Option<UiElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.bounds.contains(Vec2::new(x, y)))
            .map(|e| e.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut layout = UiLayout::new();
        layout.add(UiElementId::InventoryEntry(0), Rect::new(0.0, 0.0, 100.0, 100.0));
        layout.add(UiElementId::CraftSlot(1), Rect::new(50.0, 50.0, 100.0, 100.0));

        assert_eq!(layout.hit_test(10.0, 10.0), Some(UiElementId::InventoryEntry(0)));
        assert_eq!(layout.hit_test(75.0, 75.0), Some(UiElementId::CraftSlot(1)));
        assert_eq!(layout.hit_test(500.0, 500.0), None);
    }
}
