//! Domain entities. Pure data structures for the form state and its result.
//!
//! No model/UI types here; adapters only ever see these.

use super::errors::DomainError;
use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time of day the user wants to wake up. Minute precision, no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    /// Accepted text forms, tried in order.
    const INPUT_FORMATS: [&'static str; 3] = ["%H:%M", "%I:%M %p", "%I:%M%p"];

    /// Builds a wake time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::Input(format!("{hour:02}:{minute:02} is not a time of day")))
    }

    /// Parses `HH:MM` (24h) or `h:MM AM/PM` (12h).
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().to_uppercase();
        Self::INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
            .map(Self::from)
            .ok_or_else(|| {
                DomainError::Input(format!("'{}' is not a time (try 07:00 or 7:00 AM)", input.trim()))
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Model input: `hour*3600 + minute*60`.
    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hour()) * 3600 + i64::from(self.minute()) * 60
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl From<NaiveTime> for WakeTime {
    /// Drops seconds and sub-second precision.
    fn from(time: NaiveTime) -> Self {
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Desired hours of sleep. Always within [4.0, 12.0] on a 0.25 grid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;
    pub const DEFAULT: f64 = 8.0;

    /// Clamps into range and snaps to the nearest step. NaN becomes the default.
    pub fn new(hours: f64) -> Self {
        if hours.is_nan() {
            return Self(Self::DEFAULT);
        }
        let snapped = (hours / Self::STEP).round() * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0 - Self::STEP)
    }

    pub fn is_min(&self) -> bool {
        self.0 <= Self::MIN
    }

    pub fn is_max(&self) -> bool {
        self.0 >= Self::MAX
    }

    /// e.g. "8 hours", "8.25 hours".
    pub fn label(&self) -> String {
        format!("{} hours", self.0)
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Cups of coffee per day. Always within [1, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoffeeIntake(u32);

impl CoffeeIntake {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 20;

    pub fn new(cups: i64) -> Self {
        // clamp keeps the value inside u32 range before the cast
        Self(cups.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    pub fn cups(&self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(i64::from(self.0) + 1)
    }

    pub fn decrement(self) -> Self {
        Self::new(i64::from(self.0) - 1)
    }

    pub fn is_min(&self) -> bool {
        self.0 <= Self::MIN
    }

    pub fn is_max(&self) -> bool {
        self.0 >= Self::MAX
    }

    /// e.g. "2 cup(s)".
    pub fn label(&self) -> String {
        format!("{} cup(s)", self.0)
    }
}

impl Default for CoffeeIntake {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Current form values. Owned by the presentation layer, read by the estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimatorInputs {
    pub wake_time: WakeTime,
    pub sleep_amount: SleepAmount,
    pub coffee_intake: CoffeeIntake,
}

/// Model output: how much sleep is actually needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionResult {
    pub actual_sleep: Duration,
}

impl PredictionResult {
    pub fn new(actual_sleep: Duration) -> Self {
        Self { actual_sleep }
    }
}

/// Recommended bedtime on the 24h clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BedtimeAnswer {
    pub time: NaiveTime,
    /// Midnights crossed going back from the wake time (1 = previous day).
    pub days_before: i64,
}

/// How clock times are rendered. Dates are never shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    /// "10:45 PM" or "22:45".
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            Self::TwelveHour => time.format("%-I:%M %p").to_string(),
            Self::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

impl FromStr for ClockFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" => Ok(Self::TwelveHour),
            "24h" | "24" => Ok(Self::TwentyFourHour),
            other => Err(DomainError::Config(format!(
                "unknown clock format '{other}' (expected 12h or 24h)"
            ))),
        }
    }
}

/// The single feedback surface for both outcomes of a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub visible: bool,
}

impl Notice {
    pub const SUCCESS_TITLE: &'static str = "Your ideal sleep time is ...";
    pub const ERROR_TITLE: &'static str = "Error";
    pub const ERROR_MESSAGE: &'static str = "Sorry there was a problem calculating your bedtime";

    pub fn bedtime(formatted: String) -> Self {
        Self {
            title: Self::SUCCESS_TITLE.to_string(),
            message: formatted,
            visible: true,
        }
    }

    pub fn failure() -> Self {
        Self {
            title: Self::ERROR_TITLE.to_string(),
            message: Self::ERROR_MESSAGE.to_string(),
            visible: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == Self::ERROR_TITLE
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_time_parse_forms() {
        assert_eq!(WakeTime::parse("07:00").unwrap(), WakeTime::default());
        assert_eq!(WakeTime::parse(" 22:45 ").unwrap(), WakeTime::from_hm(22, 45).unwrap());
        assert_eq!(WakeTime::parse("07:30 pm").unwrap(), WakeTime::from_hm(19, 30).unwrap());
        assert_eq!(WakeTime::parse("12:15 AM").unwrap(), WakeTime::from_hm(0, 15).unwrap());
        assert!(matches!(WakeTime::parse("tomorrow"), Err(DomainError::Input(_))));
        assert!(WakeTime::parse("25:00").is_err());
        assert!(WakeTime::from_hm(7, 60).is_err());
    }

    #[test]
    fn test_wake_time_seconds_since_midnight() {
        assert_eq!(WakeTime::default().seconds_since_midnight(), 25_200);
        assert_eq!(WakeTime::from_hm(23, 59).unwrap().seconds_since_midnight(), 86_340);
        let with_seconds = NaiveTime::from_hms_opt(6, 30, 42).unwrap();
        assert_eq!(WakeTime::from(with_seconds).seconds_since_midnight(), 23_400);
    }

    #[test]
    fn test_sleep_amount_clamps_and_snaps() {
        assert_eq!(SleepAmount::new(2.0).hours(), 4.0);
        assert_eq!(SleepAmount::new(15.0).hours(), 12.0);
        assert_eq!(SleepAmount::new(8.1).hours(), 8.0);
        assert_eq!(SleepAmount::new(8.2).hours(), 8.25);
        assert_eq!(SleepAmount::new(f64::NAN).hours(), 8.0);
        assert_eq!(SleepAmount::new(12.0).increment().hours(), 12.0);
        assert_eq!(SleepAmount::new(4.0).decrement().hours(), 4.0);
        assert_eq!(SleepAmount::default().increment().hours(), 8.25);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SleepAmount::default().label(), "8 hours");
        assert_eq!(SleepAmount::new(8.25).label(), "8.25 hours");
        assert_eq!(SleepAmount::new(10.5).label(), "10.5 hours");
        assert_eq!(CoffeeIntake::new(2).label(), "2 cup(s)");
    }

    #[test]
    fn test_coffee_intake_bounds() {
        assert_eq!(CoffeeIntake::new(0).cups(), 1);
        assert_eq!(CoffeeIntake::new(-5).cups(), 1);
        assert_eq!(CoffeeIntake::new(99).cups(), 20);
        assert_eq!(CoffeeIntake::new(20).increment().cups(), 20);
        assert_eq!(CoffeeIntake::default().decrement().cups(), 1);
        assert!(CoffeeIntake::default().is_min());
        assert!(CoffeeIntake::new(20).is_max());
    }

    #[test]
    fn test_clock_format() {
        let t = NaiveTime::from_hms_opt(22, 45, 0).unwrap();
        assert_eq!(ClockFormat::TwelveHour.format(t), "10:45 PM");
        assert_eq!(ClockFormat::TwentyFourHour.format(t), "22:45");
        let morning = NaiveTime::from_hms_opt(0, 5, 0).unwrap();
        assert_eq!(ClockFormat::TwelveHour.format(morning), "12:05 AM");
        assert_eq!("24h".parse::<ClockFormat>().unwrap(), ClockFormat::TwentyFourHour);
        assert!("iso".parse::<ClockFormat>().is_err());
    }

    #[test]
    fn test_notice_texts() {
        let ok = Notice::bedtime("10:45 PM".into());
        assert_eq!(ok.title, "Your ideal sleep time is ...");
        assert!(ok.visible && !ok.is_error());

        let mut err = Notice::failure();
        assert_eq!(err.title, "Error");
        assert_eq!(err.message, "Sorry there was a problem calculating your bedtime");
        err.dismiss();
        assert!(!err.visible);
    }
}
