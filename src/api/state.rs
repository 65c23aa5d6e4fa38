use std::sync::Arc;

use crate::{catalog::Catalog, services::oracle::RatingOracle, services::Recommender};

/// Shared application state
///
/// Everything in here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Creates the state from an already loaded catalog and rating model
    pub fn new(catalog: Catalog, oracle: Arc<dyn RatingOracle>) -> Self {
        Self {
            recommender: Arc::new(Recommender::new(Arc::new(catalog), oracle)),
        }
    }
}
