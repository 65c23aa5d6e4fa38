use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod recipe;
pub mod recommendation;

pub use recipe::Recipe;
pub use recommendation::{RecommendRequest, RecommendResponse, RecommendedRecipe};

/// Cuisine label of a recipe (e.g. "italian", "middle_eastern")
///
/// Treated as an opaque categorical value: the pipeline only compares labels
/// for equality and the rating model owns any encoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cuisine(String);

impl Cuisine {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Cuisine {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuisine_display() {
        let cuisine = Cuisine::new("middle_eastern");
        assert_eq!(format!("{}", cuisine), "middle_eastern");
    }

    #[test]
    fn test_cuisine_serde_is_plain_string() {
        let cuisine = Cuisine::from("italian");
        let json = serde_json::to_string(&cuisine).unwrap();
        assert_eq!(json, r#""italian""#);

        let deserialized: Cuisine = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, cuisine);
    }
}
