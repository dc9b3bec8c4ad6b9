//! Recipe definitions
//!
//! Recipes are authored in `assets/data/recipes.toml` as a table of recipe id
//! -> definition and loaded once at startup. A recipe maps up to three input
//! item ids to one result item id. Two-input recipes may also carry an
//! alternate input pair that is accepted in reversed order.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Raw recipe entry as authored in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipeDefinition {
    pub input1: String,
    pub input2: String,
    pub input3: Option<String>,
    pub alt_input1: Option<String>,
    pub alt_input2: Option<String>,
    pub result: String,
    /// Event name fired when this recipe's result first becomes craftable
    pub on_craft: Option<String>,
}

/// A fully resolved recipe definition
#[derive(Debug, Clone)]
pub struct RecipeDefinition {
    pub id: String,
    pub input1: String,
    pub input2: String,
    pub input3: Option<String>,
    pub alt_input1: Option<String>,
    pub alt_input2: Option<String>,
    pub result: String,
    pub on_craft: Option<String>,
}

impl RecipeDefinition {
    pub fn from_raw(id: &str, raw: &RawRecipeDefinition) -> Self {
        Self {
            id: id.to_string(),
            input1: raw.input1.clone(),
            input2: raw.input2.clone(),
            input3: raw.input3.clone(),
            alt_input1: raw.alt_input1.clone(),
            alt_input2: raw.alt_input2.clone(),
            result: raw.result.clone(),
            on_craft: raw.on_craft.clone(),
        }
    }
}

/// All loaded recipes, iterated in authored order on every slot change
pub struct RecipeBook {
    recipes: Vec<RecipeDefinition>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Load recipe definitions from a TOML file mapping id -> definition
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        self.load_from_str(&content)
            .map_err(|e| format!("Failed to parse {:?}: {}", path, e))
    }

    pub fn load_from_str(&mut self, content: &str) -> Result<(), String> {
        let table: HashMap<String, RawRecipeDefinition> =
            toml::from_str(content).map_err(|e| e.to_string())?;

        // Sort by id so iteration order is stable regardless of map order
        let mut ids: Vec<&String> = table.keys().collect();
        ids.sort();

        for id in ids {
            if self.recipes.iter().any(|r| &r.id == id) {
                log::warn!("Duplicate recipe id '{}', overwriting", id);
                self.recipes.retain(|r| &r.id != id);
            }
            let recipe = RecipeDefinition::from_raw(id, &table[id]);
            log::info!(
                "Loaded recipe: {} ({} + {}{}) -> {}",
                recipe.id,
                recipe.input1,
                recipe.input2,
                recipe
                    .input3
                    .as_deref()
                    .map(|i| format!(" + {}", i))
                    .unwrap_or_default(),
                recipe.result
            );
            self.recipes.push(recipe);
        }

        log::info!("Loaded {} recipe definitions", self.recipes.len());
        Ok(())
    }

    pub fn all(&self) -> &[RecipeDefinition] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&RecipeDefinition> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipe() {
        let toml_str = r#"
            [aerozine]
            input1 = "hydrazine"
            input2 = "udmh"
            alt_input1 = "udmh"
            alt_input2 = "hydrazine"
            result = "aerozine"
            on_craft = "advance_tutorial"
        "#;

        let mut book = RecipeBook::new();
        book.load_from_str(toml_str).unwrap();

        assert_eq!(book.len(), 1);
        let recipe = book.get("aerozine").unwrap();
        assert_eq!(recipe.input1, "hydrazine");
        assert_eq!(recipe.input2, "udmh");
        assert_eq!(recipe.result, "aerozine");
        assert_eq!(recipe.on_craft.as_deref(), Some("advance_tutorial"));
        assert!(recipe.input3.is_none());
    }

    #[test]
    fn test_recipe_defaults() {
        let toml_str = r#"
            [glue]
            input1 = "resin"
            input2 = "solvent"
            result = "glue"
        "#;

        let mut book = RecipeBook::new();
        book.load_from_str(toml_str).unwrap();

        let recipe = book.get("glue").unwrap();
        assert!(recipe.alt_input1.is_none());
        assert!(recipe.alt_input2.is_none());
        assert!(recipe.on_craft.is_none());
    }

    #[test]
    fn test_authored_order_is_stable() {
        let toml_str = r#"
            [zeta]
            input1 = "a"
            input2 = "b"
            result = "z"

            [alpha]
            input1 = "c"
            input2 = "d"
            result = "e"
        "#;

        let mut book = RecipeBook::new();
        book.load_from_str(toml_str).unwrap();

        let ids: Vec<&str> = book.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("recipes.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[paste]\ninput1 = \"dust\"\ninput2 = \"water\"\nresult = \"paste\"\n")
            .unwrap();

        let mut book = RecipeBook::new();
        book.load_from_file(&path).unwrap();
        assert!(book.get("paste").is_some());
    }
}
