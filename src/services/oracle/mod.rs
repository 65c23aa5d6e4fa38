//! Rating oracle abstraction
//!
//! The recommendation pipeline only knows that something turns a feature
//! matrix into one predicted rating per row. The concrete model is loaded from
//! an artifact at startup and shared read-only by every request.

use crate::{error::AppResult, services::features::FeatureMatrix};

pub mod linear;

pub use linear::LinearRatingModel;

/// Trait for predictive rating models
///
/// Implementations must return exactly one rating per input row, in input row
/// order, and must not require mutable access: a single instance serves
/// concurrent requests.
#[cfg_attr(test, mockall::automock)]
pub trait RatingOracle: Send + Sync {
    /// Predict a rating for every row of `features`
    fn predict(&self, features: &FeatureMatrix) -> AppResult<Vec<f64>>;

    /// Model name for logging and health reporting
    fn name(&self) -> &'static str;
}
