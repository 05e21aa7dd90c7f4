//! Bundled sleep regression. Implements SleepModelPort.
//!
//! `actual_sleep_secs = intercept + wake*wake_seconds + estimated_sleep*hours + coffee*cups`

use super::prediction_from_secs;
use crate::domain::{DomainError, PredictionResult};
use crate::ports::SleepModelPort;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Regression coefficients. All terms are in seconds of predicted sleep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepCoefficients {
    pub intercept: f64,
    /// Per second since midnight of the wake time.
    pub wake: f64,
    /// Per hour of desired sleep.
    pub estimated_sleep: f64,
    /// Per cup of coffee.
    pub coffee: f64,
}

impl Default for SleepCoefficients {
    fn default() -> Self {
        Self {
            intercept: -1800.0,
            wake: 0.0025,
            estimated_sleep: 3600.0,
            coffee: 1200.0,
        }
    }
}

impl SleepCoefficients {
    /// Read coefficients from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            DomainError::Prediction(format!("read model {}: {}", path.display(), e))
        })?;
        let coefficients: Self = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Prediction(format!("parse model {}: {}", path.display(), e))
        })?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    fn validate(&self) -> Result<(), DomainError> {
        let all_finite = [self.intercept, self.wake, self.estimated_sleep, self.coffee]
            .iter()
            .all(|c| c.is_finite());
        if all_finite {
            Ok(())
        } else {
            Err(DomainError::Prediction(
                "model coefficients must be finite numbers".into(),
            ))
        }
    }

    /// Raw regression output in seconds.
    pub fn evaluate(&self, wake_seconds: i64, estimated_sleep: f64, coffee: i64) -> f64 {
        self.intercept
            + self.wake * wake_seconds as f64
            + self.estimated_sleep * estimated_sleep
            + self.coffee * coffee as f64
    }
}

/// In-memory linear model.
#[derive(Debug, Clone, Default)]
pub struct LinearSleepModel {
    coefficients: SleepCoefficients,
}

impl LinearSleepModel {
    pub fn new(coefficients: SleepCoefficients) -> Self {
        Self { coefficients }
    }

    /// Load once from a JSON coefficient file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        SleepCoefficients::load(path).await.map(Self::new)
    }

    pub fn coefficients(&self) -> &SleepCoefficients {
        &self.coefficients
    }
}

#[async_trait::async_trait]
impl SleepModelPort for LinearSleepModel {
    async fn predict(
        &self,
        wake_seconds: i64,
        estimated_sleep: f64,
        coffee: i64,
    ) -> Result<PredictionResult, DomainError> {
        let secs = self
            .coefficients
            .evaluate(wake_seconds, estimated_sleep, coffee);
        debug!(wake_seconds, estimated_sleep, coffee, secs, "linear model prediction");
        prediction_from_secs(secs)
    }
}
