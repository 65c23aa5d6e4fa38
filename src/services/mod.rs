pub mod features;
pub mod filters;
pub mod oracle;
pub mod ranking;
pub mod recommendations;

pub use recommendations::Recommender;
