use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DailyPoint, ValidationError};

/// Lookback window used to compute a ticker's change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RangeSelection {
    #[default]
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
    All,
}

impl RangeSelection {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "1y" => Ok(Self::OneYear),
            "all" => Ok(Self::All),
            _ => Err(ValidationError::InvalidRange {
                value: input.to_owned(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::OneYear => "1y",
            Self::All => "all",
        }
    }

    /// Day-count threshold, `None` for an unbounded window.
    pub const fn days(self) -> Option<f64> {
        match self {
            Self::OneDay => Some(1.0),
            Self::OneWeek => Some(7.0),
            Self::OneMonth => Some(30.0),
            Self::OneYear => Some(365.0),
            Self::All => None,
        }
    }
}

impl Display for RangeSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RangeSelection {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RangeSelection> for String {
    fn from(value: RangeSelection) -> Self {
        value.as_str().to_owned()
    }
}

/// Points of `points` (ascending by date) that fall inside `range`, measured
/// back from the latest point. When fewer than two points qualify, the last
/// two points of the whole series are returned instead so a change can always
/// be computed.
pub fn pick_range_points(points: &[DailyPoint], range: RangeSelection) -> Vec<DailyPoint> {
    let Some(latest) = points.last().map(|point| point.date) else {
        return Vec::new();
    };

    let Some(days) = range.days() else {
        return points.to_vec();
    };

    let filtered: Vec<DailyPoint> = points
        .iter()
        .filter(|point| point.days_until(latest) <= days)
        .copied()
        .collect();

    if filtered.len() >= 2 {
        return filtered;
    }

    points[points.len().saturating_sub(2)..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_iso_date;
    use time::Duration;

    fn series(start: &str, count: i64, step_days: i64) -> Vec<DailyPoint> {
        let start = parse_iso_date(start).expect("date");
        (0..count)
            .map(|i| {
                let close = 100.0 + i as f64;
                DailyPoint::new(start + Duration::days(i * step_days), close, close, close, close)
            })
            .collect()
    }

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!(RangeSelection::parse("1W").expect("range"), RangeSelection::OneWeek);
        assert_eq!(RangeSelection::parse(" all ").expect("range"), RangeSelection::All);
        assert!(matches!(
            RangeSelection::parse("2d"),
            Err(ValidationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn empty_series_yields_empty_selection() {
        assert!(pick_range_points(&[], RangeSelection::OneYear).is_empty());
    }

    #[test]
    fn all_returns_full_series() {
        let points = series("2024-01-01", 10, 1);
        assert_eq!(pick_range_points(&points, RangeSelection::All), points);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let points = series("2024-01-01", 10, 1);
        let picked = pick_range_points(&points, RangeSelection::OneWeek);
        assert_eq!(picked.len(), 8);
        assert_eq!(picked.first().map(|p| p.date), Some(points[2].date));
    }

    #[test]
    fn sparse_series_falls_back_to_last_two_points() {
        let points = series("2024-01-01", 3, 30);
        let picked = pick_range_points(&points, RangeSelection::OneDay);
        assert_eq!(picked, points[1..].to_vec());
    }

    #[test]
    fn single_point_series_is_returned_as_is() {
        let points = series("2024-01-01", 1, 1);
        assert_eq!(pick_range_points(&points, RangeSelection::OneDay), points);
    }
}
