use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        ValidationError::InvalidDate {
            value: input.to_owned(),
        }
    })
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| String::from("<unformattable>"))
}

/// One trading day of OHLC prices, as delivered by the quote provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl DailyPoint {
    pub const fn new(date: Date, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// Real-valued number of days from this point to `later`.
    pub fn days_until(&self, later: Date) -> f64 {
        (later - self.date).as_seconds_f64() / SECONDS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn parses_iso_dates() {
        let date = parse_iso_date("2024-02-29").expect("leap day");
        assert_eq!(date, Date::from_calendar_date(2024, Month::February, 29).expect("date"));
        assert_eq!(format_iso_date(date), "2024-02-29");
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = parse_iso_date("02/29/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn serializes_date_as_iso_string() {
        let date = parse_iso_date("2025-01-02").expect("date");
        let point = DailyPoint::new(date, 1.0, 2.0, 0.5, 1.5);
        let json = serde_json::to_value(point).expect("serialize");
        assert_eq!(json["date"], "2025-01-02");
    }

    #[test]
    fn day_distance_is_signed_and_real_valued() {
        let earlier = parse_iso_date("2025-01-01").expect("date");
        let later = parse_iso_date("2025-01-31").expect("date");
        let point = DailyPoint::new(earlier, 1.0, 1.0, 1.0, 1.0);
        assert_eq!(point.days_until(later), 30.0);
        assert_eq!(point.days_until(earlier), 0.0);
    }
}
