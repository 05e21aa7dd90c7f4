//! Bedtime arithmetic on the 24h clock.

use super::entities::{BedtimeAnswer, WakeTime};
use chrono::Duration;

const SECS_PER_DAY: i64 = 86_400;

/// `wake - sleep`, wrapping past midnight as many times as needed.
pub fn bedtime_for(wake: WakeTime, sleep: Duration) -> BedtimeAnswer {
    // offset is positive when the subtraction wrapped back past midnight
    let (time, offset_secs) = wake.as_naive().overflowing_sub_signed(sleep);
    BedtimeAnswer {
        time,
        days_before: offset_secs / SECS_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_previous_day() {
        let answer = bedtime_for(WakeTime::default(), Duration::minutes(8 * 60 + 15));
        assert_eq!(answer.time, hm(22, 45));
        assert_eq!(answer.days_before, 1);
    }

    #[test]
    fn test_same_day() {
        let wake = WakeTime::from_hm(14, 0).unwrap();
        let answer = bedtime_for(wake, Duration::hours(6));
        assert_eq!(answer.time, hm(8, 0));
        assert_eq!(answer.days_before, 0);
    }

    #[test]
    fn test_zero_and_multi_day() {
        let wake = WakeTime::from_hm(6, 30).unwrap();
        assert_eq!(bedtime_for(wake, Duration::zero()).time, hm(6, 30));
        assert_eq!(bedtime_for(wake, Duration::zero()).days_before, 0);

        let long = bedtime_for(wake, Duration::hours(30));
        assert_eq!(long.time, hm(0, 30));
        assert_eq!(long.days_before, 1);

        let longer = bedtime_for(wake, Duration::hours(31));
        assert_eq!(longer.time, hm(23, 30));
        assert_eq!(longer.days_before, 2);
    }

    #[test]
    fn test_exact_midnight() {
        let answer = bedtime_for(WakeTime::default(), Duration::hours(7));
        assert_eq!(answer.time, hm(0, 0));
        assert_eq!(answer.days_before, 0);
    }

    #[test]
    fn test_seconds_are_kept() {
        let answer = bedtime_for(WakeTime::default(), Duration::seconds(8 * 3600 + 30));
        assert_eq!(answer.time, NaiveTime::from_hms_opt(22, 59, 30).unwrap());
    }
}
