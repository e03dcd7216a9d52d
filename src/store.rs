use crate::error::BrowserError;
use crate::model::Recipe;
use log::debug;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_RECIPES: &str = include_str!("../data/recipes.json");

/// Immutable, ordered collection of recipes fixed at startup
#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store, validating id uniqueness and positive ids and times
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, BrowserError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if recipe.id == 0 {
                return Err(BrowserError::InvalidData(format!(
                    "recipe '{}' has id 0, ids must be positive",
                    recipe.title
                )));
            }
            if recipe.time == 0 {
                return Err(BrowserError::InvalidData(format!(
                    "recipe {} has a preparation time of 0 minutes",
                    recipe.id
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(BrowserError::DuplicateId(recipe.id));
            }
        }

        Ok(Self { recipes })
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> Result<Self, BrowserError> {
        Self::from_json(BUILTIN_RECIPES)
    }

    pub fn from_json(json: &str) -> Result<Self, BrowserError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        debug!("Parsed {} recipes", recipes.len());
        Self::new(recipes)
    }

    pub fn from_path(path: &Path) -> Result<Self, BrowserError> {
        debug!("Loading recipes from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
