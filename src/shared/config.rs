//! Application configuration. Model selection, clock format, initial form values.

use crate::domain::{ClockFormat, EstimatorInputs, WakeTime};
use chrono::Duration;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Predicted sleep served by the `fixed` model when no duration is configured.
pub const DEFAULT_FIXED_SLEEP_SECS: i64 = 8 * 3600;

/// Which SleepModelPort implementation to wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelChoice {
    /// Bundled coefficients.
    Linear,
    /// Coefficients re-read from this JSON file on every calculation.
    File(PathBuf),
    /// Stub returning a constant duration.
    Fixed(Duration),
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// "linear" (default) or "fixed". Read from BETTER_REST_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// JSON coefficient file for the linear model. Read from BETTER_REST_MODEL_PATH.
    #[serde(default)]
    pub model_path: Option<String>,

    /// Seconds predicted by the fixed model. Read from BETTER_REST_FIXED_SLEEP_SECS.
    /// Kept as text so a malformed value only affects this key.
    #[serde(default)]
    pub fixed_sleep_secs: Option<String>,

    /// "12h" (default) or "24h". Read from BETTER_REST_CLOCK.
    #[serde(default)]
    pub clock: Option<String>,

    /// Initial wake time, e.g. "07:00". Read from BETTER_REST_WAKE_TIME.
    #[serde(default)]
    pub wake_time: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("BETTER_REST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // env wins over the file
        c = c.add_source(config::Environment::with_prefix("BETTER_REST"));
        c.build()?.try_deserialize()
    }

    /// Resolves the model to use. Unknown names fall back to the linear model.
    pub fn model_choice(&self) -> ModelChoice {
        let name = self
            .model
            .as_deref()
            .map(|m| m.trim().to_lowercase())
            .unwrap_or_else(|| "linear".to_string());
        match name.as_str() {
            "fixed" => ModelChoice::Fixed(self.fixed_sleep_or_default()),
            "linear" => self.linear_choice(),
            other => {
                warn!(model = other, "unknown model, using linear");
                self.linear_choice()
            }
        }
    }

    /// Returns the fixed model's duration. Defaults to DEFAULT_FIXED_SLEEP_SECS if unset,
    /// not an integer, or outside the representable range.
    pub fn fixed_sleep_or_default(&self) -> Duration {
        let fallback = Duration::seconds(DEFAULT_FIXED_SLEEP_SECS);
        let Some(raw) = self.fixed_sleep_secs.as_deref() else {
            return fallback;
        };
        match raw.trim().parse::<i64>().ok().and_then(Duration::try_seconds) {
            Some(d) => d,
            None => {
                warn!(value = raw, "invalid fixed_sleep_secs, using {}", DEFAULT_FIXED_SLEEP_SECS);
                fallback
            }
        }
    }

    fn linear_choice(&self) -> ModelChoice {
        match self.model_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => ModelChoice::File(PathBuf::from(path)),
            _ => ModelChoice::Linear,
        }
    }

    /// Returns the clock format. Defaults to 12h if unset or invalid.
    pub fn clock_or_default(&self) -> ClockFormat {
        match self.clock.as_deref() {
            None => ClockFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "invalid clock setting, using 12h");
                ClockFormat::default()
            }),
        }
    }

    /// Returns the wake time the form starts with. Defaults to 07:00 if unset or invalid.
    pub fn wake_time_or_default(&self) -> WakeTime {
        match self.wake_time.as_deref() {
            None => WakeTime::default(),
            Some(raw) => WakeTime::parse(raw).unwrap_or_else(|e| {
                warn!(error = %e, "invalid wake_time setting, using 07:00");
                WakeTime::default()
            }),
        }
    }

    /// Form values at screen start.
    pub fn initial_inputs(&self) -> EstimatorInputs {
        EstimatorInputs {
            wake_time: self.wake_time_or_default(),
            ..EstimatorInputs::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.model_choice(), ModelChoice::Linear);
        assert_eq!(cfg.clock_or_default(), ClockFormat::TwelveHour);
        assert_eq!(cfg.initial_inputs(), EstimatorInputs::default());
    }

    #[test]
    fn test_model_choice() {
        let file = AppConfig {
            model_path: Some("model.json".into()),
            ..AppConfig::default()
        };
        assert_eq!(file.model_choice(), ModelChoice::File(PathBuf::from("model.json")));

        let fixed = AppConfig {
            model: Some("Fixed".into()),
            fixed_sleep_secs: Some("29700".into()),
            ..AppConfig::default()
        };
        assert_eq!(fixed.model_choice(), ModelChoice::Fixed(Duration::seconds(29_700)));

        let fixed_default = AppConfig {
            model: Some("fixed".into()),
            ..AppConfig::default()
        };
        assert_eq!(
            fixed_default.model_choice(),
            ModelChoice::Fixed(Duration::seconds(DEFAULT_FIXED_SLEEP_SECS))
        );

        let unknown = AppConfig {
            model: Some("coreml".into()),
            model_path: Some("  ".into()),
            ..AppConfig::default()
        };
        assert_eq!(unknown.model_choice(), ModelChoice::Linear);
    }

    #[test]
    fn test_clock_and_wake_time() {
        let cfg = AppConfig {
            clock: Some("24h".into()),
            wake_time: Some("6:30 am".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.clock_or_default(), ClockFormat::TwentyFourHour);
        assert_eq!(cfg.wake_time_or_default(), WakeTime::from_hm(6, 30).unwrap());

        let bad = AppConfig {
            clock: Some("sundial".into()),
            wake_time: Some("soon".into()),
            ..AppConfig::default()
        };
        assert_eq!(bad.clock_or_default(), ClockFormat::TwelveHour);
        assert_eq!(bad.initial_inputs().wake_time, WakeTime::default());
    }

    #[test]
    fn test_bad_fixed_sleep_keeps_other_keys() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("model", "fixed")
            .unwrap()
            .set_override("clock", "24h")
            .unwrap()
            .set_override("fixed_sleep_secs", "abc")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.clock_or_default(), ClockFormat::TwentyFourHour);
        assert_eq!(
            cfg.model_choice(),
            ModelChoice::Fixed(Duration::seconds(DEFAULT_FIXED_SLEEP_SECS))
        );
    }

    #[test]
    fn test_out_of_range_fixed_sleep_falls_back() {
        let cfg = AppConfig {
            model: Some("fixed".into()),
            fixed_sleep_secs: Some(i64::MAX.to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            cfg.fixed_sleep_or_default(),
            Duration::seconds(DEFAULT_FIXED_SLEEP_SECS)
        );
        let spaced = AppConfig {
            fixed_sleep_secs: Some(" 3600 ".into()),
            ..AppConfig::default()
        };
        assert_eq!(spaced.fixed_sleep_or_default(), Duration::hours(1));
    }
}
