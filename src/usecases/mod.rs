//! Application use cases. Orchestrate domain logic via ports.

pub mod estimator;

pub use estimator::BedtimeEstimator;
