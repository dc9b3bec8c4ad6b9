//! Item definitions and registry
//!
//! Items are reference data authored in `assets/data/items.toml` and loaded
//! once at startup. Everything else refers to items by string id.

use std::collections::HashMap;
use std::path::Path;

use macroquad::prelude::*;
use serde::Deserialize;

/// Raw item entry as authored in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawItemDefinition {
    pub name: Option<String>,
    pub sprite: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Whether the player holds this item from the start
    #[serde(default)]
    pub starting: bool,
}

/// A fully resolved item definition
#[derive(Debug, Clone)]
pub struct ItemDefinition {
    pub id: String,
    pub display_name: String,
    pub sprite: String,
    pub description: String,
    pub starting: bool,
}

impl ItemDefinition {
    pub fn from_raw(id: &str, raw: &RawItemDefinition) -> Self {
        Self {
            id: id.to_string(),
            display_name: raw.name.clone().unwrap_or_else(|| id.replace('_', " ")),
            sprite: raw.sprite.clone().unwrap_or_else(|| id.to_string()),
            description: raw.description.clone(),
            starting: raw.starting,
        }
    }

    /// Placeholder tint when the sprite is not available.
    /// Hash of the id so each item keeps its color between runs.
    pub fn fallback_color(&self) -> Color {
        let hash = self
            .id
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        let hue = (hash % 360) as f32 / 360.0;
        Color::new(
            0.45 + 0.45 * (hue * std::f32::consts::TAU).sin().abs(),
            0.45 + 0.45 * ((hue + 0.33) * std::f32::consts::TAU).sin().abs(),
            0.45 + 0.45 * ((hue + 0.66) * std::f32::consts::TAU).sin().abs(),
            1.0,
        )
    }
}

/// Registry of all known item definitions
pub struct ItemRegistry {
    items: HashMap<String, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Load item definitions from a TOML file mapping id -> definition
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        self.load_from_str(&content)
            .map_err(|e| format!("Failed to parse {:?}: {}", path, e))
    }

    pub fn load_from_str(&mut self, content: &str) -> Result<(), String> {
        let table: HashMap<String, RawItemDefinition> =
            toml::from_str(content).map_err(|e| e.to_string())?;

        for (id, raw) in &table {
            if self.items.contains_key(id) {
                log::warn!("Duplicate item id '{}', overwriting", id);
            }
            self.items
                .insert(id.clone(), ItemDefinition::from_raw(id, raw));
        }

        log::info!("Loaded {} item definitions", self.items.len());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Display name for an item id, falling back to the id itself
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.items
            .get(id)
            .map(|def| def.display_name.as_str())
            .unwrap_or(id)
    }

    /// Ids of items held from the start, in sorted order
    pub fn starting_ids(&self) -> Vec<&String> {
        let mut ids: Vec<&String> = self
            .items
            .values()
            .filter(|d| d.starting)
            .map(|d| &d.id)
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_items() {
        let toml_str = r#"
            [hydrazine]
            name = "Hydrazine"
            sprite = "flask_purple"
            description = "A volatile propellant base."
            starting = true

            [udmh]
            name = "UDMH"
        "#;

        let mut registry = ItemRegistry::new();
        registry.load_from_str(toml_str).unwrap();

        assert_eq!(registry.len(), 2);
        let item = registry.get("hydrazine").unwrap();
        assert_eq!(item.display_name, "Hydrazine");
        assert_eq!(item.sprite, "flask_purple");
        assert!(item.starting);
        assert!(registry.contains("udmh"));
        assert_eq!(registry.starting_ids(), vec!["hydrazine"]);
    }

    #[test]
    fn test_item_defaults() {
        let toml_str = r#"
            [copper_wire]
        "#;

        let mut registry = ItemRegistry::new();
        registry.load_from_str(toml_str).unwrap();

        let item = registry.get("copper_wire").unwrap();
        assert_eq!(item.display_name, "copper wire");
        assert_eq!(item.sprite, "copper_wire");
        assert_eq!(item.description, "");
        assert!(!item.starting);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let registry = ItemRegistry::new();
        assert_eq!(registry.display_name("mystery_goo"), "mystery_goo");
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("items.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[solvent]\nname = \"Solvent\"\n").unwrap();

        let mut registry = ItemRegistry::new();
        registry.load_from_file(&path).unwrap();
        assert_eq!(registry.display_name("solvent"), "Solvent");
    }

    #[test]
    fn test_malformed_file_reports_path() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("items.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not valid toml [").unwrap();

        let mut registry = ItemRegistry::new();
        let err = registry.load_from_file(&path).unwrap_err();
        assert!(err.contains("items.toml"));
    }
}
