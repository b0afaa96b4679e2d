//! Relative time phrases.
//!
//! Reports the approximate distance between two instants as a fixed Japanese
//! phrase ("3分", "約1時間", "2日"). The bucket bounds are fixed constants
//! mirroring calendar rounding conventions; a year counts as 365.25 days,
//! so 525960 minutes.

use chrono::NaiveDateTime;

const MINUTES_PER_DAY: i64 = 1_440;
const MINUTES_PER_MONTH: i64 = 43_200;
const MINUTES_PER_YEAR: i64 = 525_960;

/// Phrase for the distance between two instants.
///
/// Symmetric in its arguments: the absolute difference is bucketed. Pass
/// `include_seconds` for a finer report of distances under a minute and a
/// half.
pub fn distance_of_time_in_words(
    from: NaiveDateTime,
    to: NaiveDateTime,
    include_seconds: bool,
) -> String {
    let delta = to.signed_duration_since(from);
    let seconds = delta.num_milliseconds().abs() as f64 / 1000.0;
    distance_words(seconds, include_seconds)
}

/// Phrase for an absolute distance given in seconds.
pub fn distance_words(seconds: f64, include_seconds: bool) -> String {
    let seconds_abs = seconds.abs();
    let minutes = (seconds_abs / 60.0).round() as i64;
    let seconds = seconds_abs.round() as i64;

    match minutes {
        0..=1 => {
            if !include_seconds {
                return if minutes == 0 { "1分以内" } else { "1分" }.to_string();
            }
            match seconds {
                0..=4 => "5秒以内",
                5..=9 => "10秒以内",
                10..=19 => "20秒以内",
                20..=39 => "30秒前後",
                40..=59 => "1分以内",
                _ => "1分",
            }
            .to_string()
        }
        2..=44 => format!("{}分", minutes),
        45..=89 => "約1時間".to_string(),
        90..=1439 => format!("約{}時間", (minutes as f64 / 60.0).round() as i64),
        1440..=2879 => "1日".to_string(),
        2880..=43199 => format!("{}日", minutes / MINUTES_PER_DAY),
        43200..=86399 => "約1ヶ月".to_string(),
        86400..=525959 => format!("{}ヶ月", minutes / MINUTES_PER_MONTH),
        525960..=1051919 => "約1年".to_string(),
        _ => format!("{}年以上", minutes / MINUTES_PER_YEAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_minute_without_seconds() {
        // 29 seconds rounds down to 0 minutes.
        assert_eq!(distance_words(29.0, false), "1分以内");
        // 30 seconds rounds up to 1 minute.
        assert_eq!(distance_words(30.0, false), "1分");
        assert_eq!(distance_words(89.0, false), "1分");
    }

    #[test]
    fn test_sub_minute_with_seconds() {
        assert_eq!(distance_words(4.0, true), "5秒以内");
        assert_eq!(distance_words(5.0, true), "10秒以内");
        assert_eq!(distance_words(9.0, true), "10秒以内");
        assert_eq!(distance_words(10.0, true), "20秒以内");
        assert_eq!(distance_words(19.0, true), "20秒以内");
        assert_eq!(distance_words(20.0, true), "30秒前後");
        assert_eq!(distance_words(39.0, true), "30秒前後");
        assert_eq!(distance_words(40.0, true), "1分以内");
        assert_eq!(distance_words(59.0, true), "1分以内");
        assert_eq!(distance_words(60.0, true), "1分");
        assert_eq!(distance_words(89.0, true), "1分");
    }

    #[test]
    fn test_minute_buckets() {
        assert_eq!(distance_words(2.0 * 60.0, false), "2分");
        assert_eq!(distance_words(44.0 * 60.0, false), "44分");
        assert_eq!(distance_words(45.0 * 60.0, false), "約1時間");
        assert_eq!(distance_words(89.0 * 60.0, false), "約1時間");
    }

    #[test]
    fn test_hour_buckets() {
        // 90 minutes is an hour and a half, which rounds to 2.
        assert_eq!(distance_words(90.0 * 60.0, false), "約2時間");
        assert_eq!(distance_words(23.0 * 3600.0, false), "約23時間");
        assert_eq!(distance_words(1439.0 * 60.0, false), "約24時間");
    }

    #[test]
    fn test_day_buckets() {
        assert_eq!(distance_words(1440.0 * 60.0, false), "1日");
        assert_eq!(distance_words(2879.0 * 60.0, false), "1日");
        assert_eq!(distance_words(2880.0 * 60.0, false), "2日");
        assert_eq!(distance_words(43199.0 * 60.0, false), "29日");
    }

    #[test]
    fn test_month_and_year_buckets() {
        assert_eq!(distance_words(43200.0 * 60.0, false), "約1ヶ月");
        assert_eq!(distance_words(86400.0 * 60.0, false), "2ヶ月");
        assert_eq!(distance_words(525959.0 * 60.0, false), "12ヶ月");
        assert_eq!(distance_words(525960.0 * 60.0, false), "約1年");
        assert_eq!(distance_words(1051920.0 * 60.0, false), "2年以上");
    }
}
