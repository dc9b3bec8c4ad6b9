//! Crafting bench
//!
//! Three input slots the player fills from the inventory. Every slot change
//! recomputes the displayed results: craftable results (recipe satisfied,
//! result not yet held) and ghost results (recipe satisfied, result already
//! held, shown as a preview only).

use super::inventory::{Discoveries, Inventory};
use super::recipes::{RecipeBook, RecipeDefinition};

pub const SLOT_COUNT: usize = 3;

/// A result entry to draw in the bench output area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultVisual {
    pub item_id: String,
    pub ghost: bool,
}

/// Fired when a recipe tagged with `on_craft` produces its result for the
/// first time. Routing is up to the caller; the crafter knows nothing about
/// tutorials or audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftEvent {
    pub name: String,
    pub result: String,
}

pub struct Crafter {
    slots: [Option<String>; SLOT_COUNT],
    results: Vec<ResultVisual>,
}

impl Crafter {
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            results: Vec::new(),
        }
    }

    /// Slot contents, 1-based to match the bench labels
    pub fn slot(&self, slot: usize) -> Option<&str> {
        match slot {
            1..=SLOT_COUNT => self.slots[slot - 1].as_deref(),
            _ => None,
        }
    }

    pub fn results(&self) -> &[ResultVisual] {
        &self.results
    }

    /// Place an item into a slot (1-based) and recompute results
    pub fn add_item(
        &mut self,
        item_id: &str,
        slot: usize,
        recipes: &RecipeBook,
        inventory: &mut Inventory,
        discoveries: &mut Discoveries,
    ) -> Vec<CraftEvent> {
        match slot {
            1..=SLOT_COUNT => self.slots[slot - 1] = Some(item_id.to_string()),
            _ => {
                log::warn!("Crafter: slot {} out of range, ignoring add", slot);
                return Vec::new();
            }
        }
        self.update_result(recipes, inventory, discoveries)
    }

    /// Clear a slot (1-based) and recompute results
    pub fn remove_item(
        &mut self,
        slot: usize,
        recipes: &RecipeBook,
        inventory: &mut Inventory,
        discoveries: &mut Discoveries,
    ) -> Vec<CraftEvent> {
        match slot {
            1..=SLOT_COUNT => self.slots[slot - 1] = None,
            _ => {
                log::warn!("Crafter: slot {} out of range, ignoring remove", slot);
                return Vec::new();
            }
        }
        self.update_result(recipes, inventory, discoveries)
    }

    /// Recompute the displayed results from the current slots.
    ///
    /// Craftable results that have not been seen before are marked
    /// discovered, and recipes tagged with an `on_craft` event fire it on
    /// that first discovery.
    pub fn update_result(
        &mut self,
        recipes: &RecipeBook,
        inventory: &mut Inventory,
        discoveries: &mut Discoveries,
    ) -> Vec<CraftEvent> {
        self.results.clear();
        let mut events = Vec::new();

        for recipe in recipes.all() {
            if !self.matches(recipe) {
                continue;
            }

            if inventory.has_item(&recipe.result) {
                self.results.push(ResultVisual {
                    item_id: recipe.result.clone(),
                    ghost: true,
                });
            } else {
                self.results.push(ResultVisual {
                    item_id: recipe.result.clone(),
                    ghost: false,
                });

                if !discoveries.has_discovered(&recipe.result) {
                    discoveries.discover(&recipe.result);
                    if let Some(event) = &recipe.on_craft {
                        events.push(CraftEvent {
                            name: event.clone(),
                            result: recipe.result.clone(),
                        });
                    }
                }
            }
        }

        inventory.request_refresh();
        events
    }

    /// Whether the current slots satisfy a recipe.
    ///
    /// With slot 3 empty, the pair (slot1, slot2) must equal the recipe's
    /// primary inputs in either order, or the alternate inputs in the two
    /// recognized reversed combinations. With slot 3 occupied, the rule
    /// degrades to "input3 equals any slot".
    // TODO: the three-slot rule never consults input1/input2; waiting on
    // product to confirm whether that gating is intended before changing it.
    fn matches(&self, recipe: &RecipeDefinition) -> bool {
        let (Some(s1), Some(s2)) = (&self.slots[0], &self.slots[1]) else {
            return false;
        };

        match &self.slots[2] {
            None => {
                (&recipe.input1 == s1 && &recipe.input2 == s2)
                    || (&recipe.input1 == s2 && &recipe.input2 == s1)
                    || (recipe.alt_input1.as_ref() == Some(s2)
                        && recipe.alt_input2.as_ref() == Some(s1))
                    || (recipe.alt_input2.as_ref() == Some(s2)
                        && recipe.alt_input1.as_ref() == Some(s1))
            }
            Some(s3) => match &recipe.input3 {
                Some(i3) => i3 == s3 || i3 == s2 || i3 == s1,
                None => false,
            },
        }
    }
}

impl Default for Crafter {
    fn default() -> Self {
        Self::new()
    }
}
