//! DateTime display utilities.
//!
//! Timestamps are stored in UTC and shown in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Full local date and time: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Local calendar date only, as shown in the decision list.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_prefix_of_datetime() {
        let ts: Timestamp = "2024-03-09T12:30:00Z".parse().unwrap();
        let date = LocalDate(&ts).to_string();
        let full = LocalDateTime(&ts).to_string();

        assert_eq!(date.len(), 10);
        assert!(full.starts_with(&date));
    }
}
