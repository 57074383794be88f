use serde::{Deserialize, Serialize};

use crate::DailyPoint;

/// Direction of a ticker's change over the active range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// Last price and change metrics for one ticker over the active range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_price: f64,
    pub delta: f64,
    pub percent_delta: f64,
    pub trend: Trend,
}

/// Compute the change between the first and last point of `points`.
///
/// Returns `None` only for an empty slice. A single point compares against
/// itself and yields a flat snapshot.
pub fn get_ticker_snapshot(points: &[DailyPoint]) -> Option<Snapshot> {
    let first = points.first()?;
    let last = points.last()?;

    let delta = last.close - first.close;
    let percent_delta = if first.close == 0.0 {
        0.0
    } else {
        delta / first.close * 100.0
    };

    Some(Snapshot {
        last_price: last.close,
        delta,
        percent_delta,
        trend: Trend::from_delta(delta),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_iso_date;

    fn point(date: &str, close: f64) -> DailyPoint {
        DailyPoint::new(parse_iso_date(date).expect("date"), close, close, close, close)
    }

    #[test]
    fn computes_gain() {
        let points = [point("2024-01-01", 100.0), point("2024-01-02", 110.0)];
        let snapshot = get_ticker_snapshot(&points).expect("snapshot");
        assert_eq!(snapshot.last_price, 110.0);
        assert_eq!(snapshot.delta, 10.0);
        assert_eq!(snapshot.percent_delta, 10.0);
        assert_eq!(snapshot.trend, Trend::Up);
    }

    #[test]
    fn zero_base_price_yields_zero_percent() {
        let snapshot = get_ticker_snapshot(&[point("2024-01-01", 0.0), point("2024-01-02", 5.0)])
            .expect("snapshot");
        assert_eq!(snapshot.percent_delta, 0.0);
        assert_eq!(snapshot.trend, Trend::Up);
    }

    #[test]
    fn single_point_is_flat() {
        let snapshot = get_ticker_snapshot(&[point("2024-01-01", 42.0)]).expect("snapshot");
        assert_eq!(snapshot.delta, 0.0);
        assert_eq!(snapshot.trend, Trend::Flat);
    }

    #[test]
    fn empty_slice_has_no_snapshot() {
        assert!(get_ticker_snapshot(&[]).is_none());
    }
}
