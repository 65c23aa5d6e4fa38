use std::sync::Arc;
use std::time::Instant;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{RecommendRequest, RecommendResponse},
    services::{
        features::{FeatureMatrix, FeatureRow},
        filters::apply_filters,
        oracle::RatingOracle,
        ranking::{rank_and_select, Candidate},
    },
};

/// Generates recipe recommendations from pantry constraints
///
/// Holds the read-only catalog and rating oracle loaded at startup. Every call
/// works on its own candidate set borrowed from the catalog, so one instance
/// can serve any number of concurrent requests.
pub struct Recommender {
    catalog: Arc<Catalog>,
    oracle: Arc<dyn RatingOracle>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, oracle: Arc<dyn RatingOracle>) -> Self {
        Self { catalog, oracle }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn oracle_name(&self) -> &'static str {
        self.oracle.name()
    }

    /// Runs the full pipeline for one request
    ///
    /// The pipeline:
    /// 1. Filters by time budget, cuisine and allergens (in that order)
    /// 2. Counts available ingredients per surviving recipe
    /// 3. Builds the model feature matrix and asks the oracle for ratings
    /// 4. Sorts by rating, overlap and review count, keeping the top K
    ///
    /// An empty candidate set short-circuits to an empty list without calling
    /// the oracle. Any failure fails the whole request.
    pub fn recommend(&self, request: &RecommendRequest) -> AppResult<RecommendResponse> {
        let start = Instant::now();

        if request.top_k == 0 {
            return Err(AppError::InvalidInput(
                "top_k must be a positive integer".to_string(),
            ));
        }

        let score_overlap = !request.ingredients_available.is_empty();
        if score_overlap && !self.catalog.has_ingredients() {
            return Err(AppError::Configuration(
                "catalog has no 'ingredients' column, cannot score ingredient overlap".to_string(),
            ));
        }

        let filtered = apply_filters(self.catalog.recipes(), request);

        tracing::info!(
            catalog_size = self.catalog.len(),
            candidates = filtered.len(),
            max_time = request.max_time,
            cuisines = request.cuisines.len(),
            allergens_to_avoid = request.allergens_to_avoid.len(),
            "Filtered recipe candidates"
        );

        if filtered.is_empty() {
            return Ok(RecommendResponse::empty());
        }

        let mut candidates = filtered
            .into_iter()
            .map(|recipe| {
                let overlap = if score_overlap {
                    recipe
                        .ingredient_overlap(&request.ingredients_available)
                        .ok_or_else(|| {
                            AppError::Configuration(format!(
                                "recipe {} has no ingredient list",
                                recipe.recipe_id
                            ))
                        })?
                } else {
                    0
                };
                Ok(Candidate::new(recipe, overlap))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let features = build_features(&candidates);
        let predictions = self.predict(&features)?;

        for (candidate, rating) in candidates.iter_mut().zip(predictions) {
            candidate.predicted_rating = rating;
        }

        let recipes = rank_and_select(candidates, request.top_k);

        tracing::info!(
            returned = recipes.len(),
            top_k = request.top_k,
            processing_time_ms = start.elapsed().as_millis(),
            "Recommendation completed"
        );

        Ok(RecommendResponse { recipes })
    }

    /// Calls the oracle and checks its output against the feature rows
    fn predict(&self, features: &FeatureMatrix) -> AppResult<Vec<f64>> {
        let predictions = self.oracle.predict(features)?;

        if predictions.len() != features.len() {
            return Err(AppError::Prediction(format!(
                "model '{}' returned {} ratings for {} rows",
                self.oracle.name(),
                predictions.len(),
                features.len()
            )));
        }

        if let Some(row) = predictions.iter().position(|p| !p.is_finite()) {
            return Err(AppError::Prediction(format!(
                "model '{}' returned a non-finite rating for row {}",
                self.oracle.name(),
                row
            )));
        }

        Ok(predictions)
    }
}

/// Builds one feature row per candidate, in candidate order
pub fn build_features(candidates: &[Candidate<'_>]) -> FeatureMatrix {
    candidates
        .iter()
        .map(|candidate| FeatureRow {
            minutes: f64::from(candidate.recipe.minutes),
            n_ingredients: f64::from(candidate.recipe.n_ingredients),
            n_steps: f64::from(candidate.recipe.n_steps),
            calories: candidate.recipe.calories,
            log_n_reviews: candidate.log_n_reviews,
            cuisine: candidate.recipe.cuisine.clone(),
        })
        .collect()
}
