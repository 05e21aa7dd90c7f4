//! Bedtime estimation: form inputs -> model -> wake time minus predicted sleep.
//!
//! - Reads the current inputs by reference, never mutates them
//! - Re-invokes the model on every call (no caching)
//! - Collapses every failure into the fixed error notice

use crate::domain::{
    BedtimeAnswer, ClockFormat, DomainError, EstimatorInputs, Notice, bedtime_for,
};
use crate::ports::SleepModelPort;
use chrono::Duration;
use std::sync::Arc;
use tracing::{info, warn};

/// Estimator service. Owns the model port and the display clock format.
pub struct BedtimeEstimator {
    model: Arc<dyn SleepModelPort>,
    clock: ClockFormat,
}

impl BedtimeEstimator {
    pub fn new(model: Arc<dyn SleepModelPort>, clock: ClockFormat) -> Self {
        Self { model, clock }
    }

    pub fn clock(&self) -> ClockFormat {
        self.clock
    }

    /// Ask the model for the needed sleep and subtract it from the wake time.
    ///
    /// A negative prediction is rejected as a prediction failure.
    pub async fn estimate(&self, inputs: &EstimatorInputs) -> Result<BedtimeAnswer, DomainError> {
        let wake_seconds = inputs.wake_time.seconds_since_midnight();
        let estimated_sleep = inputs.sleep_amount.hours();
        let coffee = i64::from(inputs.coffee_intake.cups());

        let prediction = self
            .model
            .predict(wake_seconds, estimated_sleep, coffee)
            .await?;
        if prediction.actual_sleep < Duration::zero() {
            return Err(DomainError::Prediction(format!(
                "model predicted negative sleep ({}s)",
                prediction.actual_sleep.num_seconds()
            )));
        }

        Ok(bedtime_for(inputs.wake_time, prediction.actual_sleep))
    }

    /// Run an estimate and turn it into the notice to display.
    ///
    /// The returned notice is always visible. On failure the title and message
    /// are fixed strings regardless of the cause.
    pub async fn calculate(&self, inputs: &EstimatorInputs) -> Notice {
        match self.estimate(inputs).await {
            Ok(answer) => {
                let formatted = self.clock.format(answer.time);
                info!(
                    wake = %inputs.wake_time,
                    sleep_hours = inputs.sleep_amount.hours(),
                    coffee = inputs.coffee_intake.cups(),
                    bedtime = %formatted,
                    days_before = answer.days_before,
                    "bedtime calculated"
                );
                Notice::bedtime(formatted)
            }
            Err(e) => {
                warn!(
                    wake = %inputs.wake_time,
                    sleep_hours = inputs.sleep_amount.hours(),
                    coffee = inputs.coffee_intake.cups(),
                    error = %e,
                    "bedtime calculation failed"
                );
                Notice::failure()
            }
        }
    }
}
