//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Epoch seconds of the given time, as sent in second-resolution auth blocks.
pub fn timestamp_secs(t: DateTime) -> i64 {
    t.timestamp()
}

/// Epoch milliseconds of the given time, as sent in millisecond-resolution
/// auth blocks.
pub fn timestamp_millis(t: DateTime) -> i64 {
    t.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamps() {
        let t = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        assert_eq!(timestamp_secs(t), 1_700_000_000);
        assert_eq!(timestamp_millis(t), 1_700_000_000_000);
    }
}
