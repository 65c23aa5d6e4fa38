use std::collections::BTreeSet;

use crate::models::{Cuisine, Recipe, RecommendRequest};

/// A single constraint applied to the candidate set
///
/// Filters are pure predicates over a recipe; the pipeline applies them in
/// the order returned by [`constraint_filters`].
#[derive(Debug, Clone, Copy)]
pub enum ConstraintFilter<'r> {
    /// Keep recipes that fit in the time budget
    MaxTime(i64),
    /// Keep recipes from one of the listed cuisines; empty means no restriction
    Cuisines(&'r BTreeSet<Cuisine>),
    /// Drop recipes containing any of the listed allergens
    AvoidAllergens(&'r BTreeSet<String>),
}

impl ConstraintFilter<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintFilter::MaxTime(_) => "max_time",
            ConstraintFilter::Cuisines(_) => "cuisines",
            ConstraintFilter::AvoidAllergens(_) => "allergens_to_avoid",
        }
    }

    /// Inactive filters pass every recipe and are skipped
    pub fn is_active(&self) -> bool {
        match self {
            ConstraintFilter::MaxTime(_) => true,
            ConstraintFilter::Cuisines(cuisines) => !cuisines.is_empty(),
            ConstraintFilter::AvoidAllergens(allergens) => !allergens.is_empty(),
        }
    }

    pub fn keep(&self, recipe: &Recipe) -> bool {
        match self {
            ConstraintFilter::MaxTime(max_time) => i64::from(recipe.minutes) <= *max_time,
            ConstraintFilter::Cuisines(cuisines) => {
                cuisines.is_empty() || cuisines.contains(&recipe.cuisine)
            }
            ConstraintFilter::AvoidAllergens(allergens) => !recipe.has_forbidden_allergen(allergens),
        }
    }
}

/// The request's constraints in application order: time, cuisine, allergens
pub fn constraint_filters(request: &RecommendRequest) -> [ConstraintFilter<'_>; 3] {
    [
        ConstraintFilter::MaxTime(request.max_time),
        ConstraintFilter::Cuisines(&request.cuisines),
        ConstraintFilter::AvoidAllergens(&request.allergens_to_avoid),
    ]
}

/// Narrows `recipes` to those satisfying every active constraint
///
/// Relative order of the survivors is preserved. Stops early once nothing is left.
pub fn apply_filters<'a>(recipes: &'a [Recipe], request: &RecommendRequest) -> Vec<&'a Recipe> {
    let mut candidates: Vec<&Recipe> = recipes.iter().collect();

    for filter in constraint_filters(request) {
        if candidates.is_empty() {
            break;
        }
        if !filter.is_active() {
            continue;
        }

        candidates.retain(|recipe| filter.keep(recipe));

        tracing::debug!(
            filter = filter.name(),
            remaining = candidates.len(),
            "Applied constraint filter"
        );
    }

    candidates
}
