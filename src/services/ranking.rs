use std::cmp::Ordering;

use crate::models::{Recipe, RecommendedRecipe};

/// A recipe that survived filtering, with its per-request annotations
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub recipe: &'a Recipe,
    pub ingredient_overlap: u32,
    /// ln(1 + n_reviews), resolved once for this request
    pub log_n_reviews: f64,
    pub predicted_rating: f64,
}

impl<'a> Candidate<'a> {
    pub fn new(recipe: &'a Recipe, ingredient_overlap: u32) -> Self {
        Self {
            recipe,
            ingredient_overlap,
            log_n_reviews: recipe.log_n_reviews(),
            predicted_rating: 0.0,
        }
    }

    fn to_recommended(&self) -> RecommendedRecipe {
        RecommendedRecipe {
            recipe_id: self.recipe.recipe_id,
            name: self.recipe.name.clone(),
            cuisine: self.recipe.cuisine.clone(),
            minutes: self.recipe.minutes,
            avg_rating: self.recipe.avg_rating,
            predicted_rating: self.predicted_rating,
            n_reviews: self.recipe.n_reviews,
            ingredient_overlap: self.ingredient_overlap,
        }
    }
}

/// Best-first ordering: predicted rating, then ingredient overlap, then review count
///
/// All three keys descend. Candidates equal on every key compare `Equal`.
pub fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.predicted_rating
        .total_cmp(&a.predicted_rating)
        .then_with(|| b.ingredient_overlap.cmp(&a.ingredient_overlap))
        .then_with(|| b.recipe.n_reviews.cmp(&a.recipe.n_reviews))
}

/// Sorts candidates best-first and keeps at most `top_k`
///
/// The sort is stable, so full ties keep their catalog order.
pub fn rank_and_select(mut candidates: Vec<Candidate<'_>>, top_k: usize) -> Vec<RecommendedRecipe> {
    candidates.sort_by(compare_candidates);
    candidates
        .iter()
        .take(top_k)
        .map(Candidate::to_recommended)
        .collect()
}
