//! Linear rating model loaded from a JSON artifact
//!
//! Numeric columns are standardized with the fitted mean/scale and weighted,
//! the cuisine contributes a one-hot offset (cuisines unseen at fit time
//! contribute nothing), and the sum is optionally clipped to the rating range.

use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    services::{
        features::{FeatureMatrix, FEATURE_COLUMNS, NUMERIC_FEATURES},
        oracle::RatingOracle,
    },
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LinearRatingModel {
    /// Columns the model was fitted on; must match the feature schema
    feature_columns: Vec<String>,
    intercept: f64,
    mean: Vec<f64>,
    scale: Vec<f64>,
    coefficients: Vec<f64>,
    #[serde(default)]
    cuisine_coefficients: HashMap<String, f64>,
    #[serde(default)]
    rating_bounds: Option<(f64, f64)>,
}

impl LinearRatingModel {
    /// Parses and validates a serialized model
    pub fn from_json_slice(bytes: &[u8]) -> AppResult<Self> {
        let model: Self = serde_json::from_slice(bytes)
            .map_err(|e| AppError::Model(format!("failed to parse model: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> AppResult<()> {
        if self.feature_columns.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(AppError::Model(format!(
                "model expects columns {:?}, pipeline provides {:?}",
                self.feature_columns, FEATURE_COLUMNS
            )));
        }

        for (field, values) in [
            ("mean", &self.mean),
            ("scale", &self.scale),
            ("coefficients", &self.coefficients),
        ] {
            if values.len() != NUMERIC_FEATURES {
                return Err(AppError::Model(format!(
                    "'{}' has {} entries, expected {}",
                    field,
                    values.len(),
                    NUMERIC_FEATURES
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(AppError::Model(format!("'{}' contains non-finite values", field)));
            }
        }

        if !self.intercept.is_finite() || self.cuisine_coefficients.values().any(|v| !v.is_finite()) {
            return Err(AppError::Model("non-finite intercept or cuisine weight".to_string()));
        }

        if let Some((lo, hi)) = self.rating_bounds {
            if lo.is_nan() || hi.is_nan() || lo > hi {
                return Err(AppError::Model(format!("invalid rating bounds [{}, {}]", lo, hi)));
            }
        }

        Ok(())
    }

    fn score(&self, numeric: [f64; NUMERIC_FEATURES], cuisine: &str) -> f64 {
        let mut score = self.intercept;
        for (i, x) in numeric.iter().enumerate() {
            // zero variance columns were left unscaled at fit time
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            score += self.coefficients[i] * (x - self.mean[i]) / scale;
        }
        score += self.cuisine_coefficients.get(cuisine).copied().unwrap_or(0.0);

        match self.rating_bounds {
            Some((lo, hi)) => score.clamp(lo, hi),
            None => score,
        }
    }
}

impl RatingOracle for LinearRatingModel {
    fn predict(&self, features: &FeatureMatrix) -> AppResult<Vec<f64>> {
        Ok(features
            .rows()
            .iter()
            .map(|row| self.score(row.numeric(), row.cuisine.as_str()))
            .collect())
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Cuisine, services::features::FeatureRow};

    const MODEL_JSON: &str = r#"{
        "feature_columns": ["minutes", "n_ingredients", "n_steps", "calories", "log_n_reviews", "cuisine"],
        "intercept": 4.0,
        "mean": [30.0, 8.0, 6.0, 400.0, 1.0],
        "scale": [10.0, 2.0, 0.0, 100.0, 1.0],
        "coefficients": [-0.1, 0.0, 0.05, 0.0, 0.2],
        "cuisine_coefficients": { "italian": 0.3, "asian": -0.2 },
        "rating_bounds": [0.0, 5.0]
    }"#;

    fn row(minutes: f64, log_n_reviews: f64, cuisine: &str) -> FeatureRow {
        FeatureRow {
            minutes,
            n_ingredients: 8.0,
            n_steps: 6.0,
            calories: 400.0,
            log_n_reviews,
            cuisine: Cuisine::from(cuisine),
        }
    }

    #[test]
    fn test_predict_one_value_per_row_in_order() {
        let model = LinearRatingModel::from_json_slice(MODEL_JSON.as_bytes()).unwrap();
        let features = FeatureMatrix::new(vec![
            row(30.0, 1.0, "italian"),
            row(40.0, 1.0, "asian"),
            row(30.0, 2.0, "nordic"),
        ]);

        let predictions = model.predict(&features).unwrap();
        assert_eq!(predictions.len(), 3);
        // 4.0 + 0.3
        assert!((predictions[0] - 4.3).abs() < 1e-9);
        // 4.0 - 0.1 * 1.0 - 0.2
        assert!((predictions[1] - 3.7).abs() < 1e-9);
        // unseen cuisine: 4.0 + 0.2 * 1.0
        assert!((predictions[2] - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_predictions_clipped_to_bounds() {
        let model = LinearRatingModel::from_json_slice(MODEL_JSON.as_bytes()).unwrap();
        let features = FeatureMatrix::new(vec![row(30.0, 20.0, "italian"), row(500.0, 1.0, "asian")]);

        let predictions = model.predict(&features).unwrap();
        assert_eq!(predictions, vec![5.0, 0.0]);
    }

    #[test]
    fn test_empty_matrix_predicts_nothing() {
        let model = LinearRatingModel::from_json_slice(MODEL_JSON.as_bytes()).unwrap();
        assert!(model.predict(&FeatureMatrix::default()).unwrap().is_empty());
    }

    #[test]
    fn test_column_mismatch_rejected() {
        let json = MODEL_JSON.replace(r#""calories", "log_n_reviews""#, r#""log_n_reviews", "calories""#);
        let err = LinearRatingModel::from_json_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Model(_)));
    }

    #[test]
    fn test_wrong_coefficient_count_rejected() {
        let json = MODEL_JSON.replace("[-0.1, 0.0, 0.05, 0.0, 0.2]", "[-0.1, 0.0]");
        let err = LinearRatingModel::from_json_slice(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'coefficients' has 2 entries"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let json = MODEL_JSON.replace("[0.0, 5.0]", "[5.0, 0.0]");
        assert!(LinearRatingModel::from_json_slice(json.as_bytes()).is_err());
    }

    #[test]
    fn test_garbage_is_model_error() {
        let err = LinearRatingModel::from_json_slice(b"not a model").unwrap_err();
        assert!(matches!(err, AppError::Model(_)));
    }
}
