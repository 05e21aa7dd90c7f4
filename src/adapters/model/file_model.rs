//! File-backed sleep model. Implements SleepModelPort.
//!
//! Coefficients are re-read on every prediction, so each calculation
//! instantiates the model afresh and a broken file fails that calculation only.

use super::linear_model::SleepCoefficients;
use super::prediction_from_secs;
use crate::domain::{DomainError, PredictionResult};
use crate::ports::SleepModelPort;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileSleepModel {
    path: PathBuf,
}

impl FileSleepModel {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SleepModelPort for FileSleepModel {
    async fn predict(
        &self,
        wake_seconds: i64,
        estimated_sleep: f64,
        coffee: i64,
    ) -> Result<PredictionResult, DomainError> {
        let coefficients = SleepCoefficients::load(&self.path).await?;
        let secs = coefficients.evaluate(wake_seconds, estimated_sleep, coffee);
        debug!(path = %self.path.display(), secs, "file model prediction");
        prediction_from_secs(secs)
    }
}
