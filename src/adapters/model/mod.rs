//! Sleep model adapters. Implement SleepModelPort.
//!
//! Bundled linear regression, a file-backed variant that reloads per call,
//! and a fixed stub for tests and demos.

pub mod file_model;
pub mod fixed_model;
pub mod linear_model;

pub use file_model::FileSleepModel;
pub use fixed_model::FixedSleepModel;
pub use linear_model::{LinearSleepModel, SleepCoefficients};

use crate::domain::{DomainError, PredictionResult};
use chrono::Duration;

/// Converts a raw regression output (seconds) into a prediction, rounding to whole seconds.
pub(crate) fn prediction_from_secs(secs: f64) -> Result<PredictionResult, DomainError> {
    if !secs.is_finite() {
        return Err(DomainError::Prediction(format!(
            "model produced a non-finite duration ({secs})"
        )));
    }
    let rounded = secs.round();
    if rounded.abs() >= i64::MAX as f64 {
        return Err(DomainError::Prediction(format!(
            "model produced an out-of-range duration ({secs})"
        )));
    }
    Duration::try_seconds(rounded as i64)
        .map(PredictionResult::new)
        .ok_or_else(|| DomainError::Prediction(format!("model produced an out-of-range duration ({secs})")))
}
