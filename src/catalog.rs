use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::{
    error::{AppError, AppResult},
    models::{Cuisine, Recipe},
};

/// Immutable in-memory recipe table
///
/// Built once at startup and shared read-only between requests. Row order is
/// the order of the source artifact and is what residual ranking ties fall back on.
#[derive(Debug)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    has_ingredients: bool,
    loaded_at: DateTime<Utc>,
}

/// Distinct cuisines and allergen tags present in the catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogOptions {
    pub cuisines: Vec<Cuisine>,
    pub allergens: Vec<String>,
}

impl Catalog {
    /// Validates the rows and builds the catalog
    pub fn from_recipes(recipes: Vec<Recipe>) -> AppResult<Self> {
        let mut seen_ids = HashSet::with_capacity(recipes.len());
        let mut with_ingredients = 0usize;

        for recipe in &recipes {
            if !seen_ids.insert(recipe.recipe_id) {
                return Err(AppError::Catalog(format!(
                    "duplicate recipe_id {}",
                    recipe.recipe_id
                )));
            }
            if !recipe.calories.is_finite() || recipe.calories < 0.0 {
                return Err(AppError::Catalog(format!(
                    "recipe {} has invalid calories {}",
                    recipe.recipe_id, recipe.calories
                )));
            }
            if !recipe.avg_rating.is_finite() {
                return Err(AppError::Catalog(format!(
                    "recipe {} has non-finite avg_rating",
                    recipe.recipe_id
                )));
            }
            if recipe.log_n_reviews.is_some_and(|v| !v.is_finite()) {
                return Err(AppError::Catalog(format!(
                    "recipe {} has non-finite log_n_reviews",
                    recipe.recipe_id
                )));
            }
            if recipe.ingredients.is_some() {
                with_ingredients += 1;
            }
        }

        // A column is either there for every row or not at all
        if with_ingredients != 0 && with_ingredients != recipes.len() {
            return Err(AppError::Catalog(format!(
                "'ingredients' present on {} of {} recipes",
                with_ingredients,
                recipes.len()
            )));
        }

        Ok(Self {
            has_ingredients: with_ingredients == recipes.len(),
            recipes,
            loaded_at: Utc::now(),
        })
    }

    /// Parses a JSON array of recipe records
    pub fn from_json_slice(bytes: &[u8]) -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_slice(bytes)
            .map_err(|e| AppError::Catalog(format!("failed to parse catalog: {}", e)))?;
        Self::from_recipes(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Whether the catalog carries an ingredient column
    pub fn has_ingredients(&self) -> bool {
        self.has_ingredients
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn options(&self) -> CatalogOptions {
        let cuisines: BTreeSet<&Cuisine> = self.recipes.iter().map(|r| &r.cuisine).collect();
        let allergens: BTreeSet<&String> =
            self.recipes.iter().flat_map(|r| r.allergens.iter()).collect();

        CatalogOptions {
            cuisines: cuisines.into_iter().cloned().collect(),
            allergens: allergens.into_iter().cloned().collect(),
        }
    }
}
