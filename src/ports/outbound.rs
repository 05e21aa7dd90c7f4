//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, PredictionResult};

/// Pre-trained sleep regression model, treated as a black box.
#[async_trait::async_trait]
pub trait SleepModelPort: Send + Sync {
    /// Predict how much sleep is actually needed.
    ///
    /// - `wake_seconds`: wake time as seconds since midnight
    /// - `estimated_sleep`: desired sleep in hours
    /// - `coffee`: cups of coffee per day
    ///
    /// # Errors
    /// Any load or inference failure is returned as `DomainError::Prediction`.
    async fn predict(
        &self,
        wake_seconds: i64,
        estimated_sleep: f64,
        coffee: i64,
    ) -> Result<PredictionResult, DomainError>;
}
