use serde::Serialize;

use crate::models::Cuisine;

/// Column schema the rating model was fitted on, in order
pub const FEATURE_COLUMNS: [&str; 6] = [
    "minutes",
    "n_ingredients",
    "n_steps",
    "calories",
    "log_n_reviews",
    "cuisine",
];

/// Number of leading numeric columns in [`FEATURE_COLUMNS`]
pub const NUMERIC_FEATURES: usize = 5;

/// Model inputs for one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub minutes: f64,
    pub n_ingredients: f64,
    pub n_steps: f64,
    pub calories: f64,
    pub log_n_reviews: f64,
    /// Passed through untouched; encoding belongs to the model
    pub cuisine: Cuisine,
}

impl FeatureRow {
    /// The numeric columns in schema order
    pub fn numeric(&self) -> [f64; NUMERIC_FEATURES] {
        [
            self.minutes,
            self.n_ingredients,
            self.n_steps,
            self.calories,
            self.log_n_reviews,
        ]
    }
}

/// Row-aligned feature table handed to the rating oracle
///
/// Row `i` always describes candidate `i` of the working set it was built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureMatrix {
    rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &FEATURE_COLUMNS
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<FeatureRow> for FeatureMatrix {
    fn from_iter<T: IntoIterator<Item = FeatureRow>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
