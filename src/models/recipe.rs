use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Cuisine;

/// One row of the recipe catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub recipe_id: i64,
    pub name: String,
    pub cuisine: Cuisine,
    /// Total preparation time in minutes
    pub minutes: u32,
    /// Required column; an allergen-free recipe carries an empty list
    pub allergens: BTreeSet<String>,
    /// `None` when the catalog was built without an ingredient column
    #[serde(default)]
    pub ingredients: Option<BTreeSet<String>>,
    pub n_ingredients: u32,
    pub n_steps: u32,
    pub calories: f64,
    pub n_reviews: u64,
    /// Mean historical rating, returned to clients but never fed to the model
    pub avg_rating: f64,
    /// Precomputed ln(1 + n_reviews), if the catalog ships it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_n_reviews: Option<f64>,
}

impl Recipe {
    /// Returns the stored `log_n_reviews`, or derives it from `n_reviews`
    pub fn log_n_reviews(&self) -> f64 {
        self.log_n_reviews
            .unwrap_or_else(|| (self.n_reviews as f64).ln_1p())
    }

    /// True if the recipe contains any of the given allergens
    pub fn has_forbidden_allergen(&self, forbidden: &BTreeSet<String>) -> bool {
        forbidden.iter().any(|a| self.allergens.contains(a))
    }

    /// Number of available ingredients that appear in this recipe
    ///
    /// Returns `None` when the recipe carries no ingredient list.
    pub fn ingredient_overlap(&self, available: &BTreeSet<String>) -> Option<u32> {
        self.ingredients
            .as_ref()
            .map(|ingredients| ingredients.intersection(available).count() as u32)
    }
}
