use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Cuisine;

/// Pantry constraints for a single recommendation call
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RecommendRequest {
    #[serde(default)]
    pub allergens_to_avoid: BTreeSet<String>,
    #[serde(default)]
    pub ingredients_available: BTreeSet<String>,
    /// Upper bound on preparation time, in minutes
    #[serde(default = "default_max_time")]
    pub max_time: i64,
    /// Empty means every cuisine is acceptable
    #[serde(default)]
    pub cuisines: BTreeSet<Cuisine>,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_max_time() -> i64 {
    60
}

fn default_top_k() -> usize {
    5
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            allergens_to_avoid: BTreeSet::new(),
            ingredients_available: BTreeSet::new(),
            max_time: default_max_time(),
            cuisines: BTreeSet::new(),
            top_k: default_top_k(),
        }
    }
}

/// A ranked recipe as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedRecipe {
    pub recipe_id: i64,
    pub name: String,
    pub cuisine: Cuisine,
    pub minutes: u32,
    pub avg_rating: f64,
    pub predicted_rating: f64,
    pub n_reviews: u64,
    pub ingredient_overlap: u32,
}

/// Ordered top-K list, best first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendResponse {
    pub recipes: Vec<RecommendedRecipe>,
}

impl RecommendResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_empty_body() {
        let request: RecommendRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, RecommendRequest::default());
        assert_eq!(request.max_time, 60);
        assert_eq!(request.top_k, 5);
        assert!(request.allergens_to_avoid.is_empty());
        assert!(request.ingredients_available.is_empty());
        assert!(request.cuisines.is_empty());
    }

    #[test]
    fn test_request_lists_become_sets() {
        let request: RecommendRequest = serde_json::from_str(
            r#"{
                "allergens_to_avoid": ["milk", "milk"],
                "ingredients_available": ["tomato", "pasta", "garlic"],
                "max_time": 40,
                "cuisines": ["italian", "greek"],
                "top_k": 3
            }"#,
        )
        .unwrap();

        assert_eq!(request.allergens_to_avoid.len(), 1);
        assert_eq!(request.ingredients_available.len(), 3);
        assert!(request.cuisines.contains(&Cuisine::from("greek")));
        assert_eq!(request.max_time, 40);
        assert_eq!(request.top_k, 3);
    }

    #[test]
    fn test_empty_response_shape() {
        let json = serde_json::to_value(RecommendResponse::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "recipes": [] }));
    }
}
