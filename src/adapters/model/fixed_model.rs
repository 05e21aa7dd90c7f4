//! Fixed sleep model for tests and demos.
//!
//! Returns a predetermined duration (or a predetermined failure) without
//! looking at its inputs.

use crate::domain::{DomainError, PredictionResult};
use crate::ports::SleepModelPort;
use chrono::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

pub struct FixedSleepModel {
    outcome: Result<Duration, String>,
    calls: AtomicUsize,
}

impl FixedSleepModel {
    /// Always predicts `actual_sleep`.
    pub fn new(actual_sleep: Duration) -> Self {
        Self {
            outcome: Ok(actual_sleep),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with `DomainError::Prediction(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of predictions served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SleepModelPort for FixedSleepModel {
    async fn predict(
        &self,
        wake_seconds: i64,
        estimated_sleep: f64,
        coffee: i64,
    ) -> Result<PredictionResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(wake_seconds, estimated_sleep, coffee, "[FIXED] serving stub prediction");
        match &self.outcome {
            Ok(d) => Ok(PredictionResult::new(*d)),
            Err(reason) => Err(DomainError::Prediction(reason.clone())),
        }
    }
}
