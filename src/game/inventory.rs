//! Player inventory and the one-time discovery registry

use std::collections::HashSet;

/// Items the player currently holds, in pickup order
pub struct Inventory {
    items: Vec<String>,
    /// Bumped whenever held or displayed state may have changed; the UI
    /// layer compares against the last revision it drew.
    revision: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i == item_id)
    }

    pub fn add_item(&mut self, item_id: &str) {
        if self.has_item(item_id) {
            return;
        }
        self.items.push(item_id.to_string());
        self.revision += 1;
        log::debug!("Inventory: added {}", item_id);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Ask the display layer to re-check held state
    pub fn request_refresh(&mut self) {
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// One-time flags marking items the player has seen or crafted
pub struct Discoveries {
    discovered: HashSet<String>,
}

impl Discoveries {
    pub fn new() -> Self {
        Self {
            discovered: HashSet::new(),
        }
    }

    pub fn has_discovered(&self, item_id: &str) -> bool {
        self.discovered.contains(item_id)
    }

    /// Mark an item discovered. Idempotent; logs only the first time.
    pub fn discover(&mut self, item_id: &str) {
        if self.discovered.insert(item_id.to_string()) {
            log::info!("Discovered: {}", item_id);
        }
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }
}

impl Default for Discoveries {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_membership() {
        let mut inventory = Inventory::new();
        assert!(!inventory.has_item("flask"));

        inventory.add_item("flask");
        assert!(inventory.has_item("flask"));

        // Adding again does not duplicate
        inventory.add_item("flask");
        assert_eq!(inventory.items().len(), 1);
    }

    #[test]
    fn test_refresh_bumps_revision() {
        let mut inventory = Inventory::new();
        let before = inventory.revision();
        inventory.request_refresh();
        assert!(inventory.revision() > before);
    }

    #[test]
    fn test_discover_is_idempotent() {
        let mut discoveries = Discoveries::new();
        assert!(!discoveries.has_discovered("aerozine"));

        discoveries.discover("aerozine");
        discoveries.discover("aerozine");

        assert!(discoveries.has_discovered("aerozine"));
        assert_eq!(discoveries.len(), 1);
    }
}
