//! Mathematical correctness of range selection and change snapshots.

use time::Duration;

use tickerdash_core::domain::parse_iso_date;
use tickerdash_core::{
    get_ticker_snapshot, parse_tickers, pick_range_points, DailyPoint, RangeSelection, Trend,
};

fn daily_series(start: &str, count: i64) -> Vec<DailyPoint> {
    let start = parse_iso_date(start).expect("date");
    (0..count)
        .map(|i| {
            let close = 50.0 + (i as f64) * 0.25;
            DailyPoint::new(start + Duration::days(i), close, close + 1.0, close - 1.0, close)
        })
        .collect()
}

#[test]
fn parser_dedupes_uppercases_and_caps_at_five() {
    let tickers: Vec<String> = parse_tickers("aapl, aapl, MSFT,, goog,tsla,meta,nvda")
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(tickers, ["AAPL", "MSFT", "GOOG", "TSLA", "META"]);
    assert!(parse_tickers("").is_empty());
}

#[test]
fn one_week_over_long_history_keeps_only_the_last_seven_days() {
    // Given: 400 consecutive daily points (more than a year)
    let points = daily_series("2023-01-01", 400);
    let latest = points.last().map(|p| p.date).expect("latest");

    // When: The 1w window is selected
    let picked = pick_range_points(&points, RangeSelection::OneWeek);

    // Then: Every point is within 7 days of the latest, inclusive
    assert!(picked.len() >= 2);
    assert_eq!(picked.len(), 8);
    assert!(picked.iter().all(|p| p.days_until(latest) <= 7.0));
    assert_eq!(picked.last(), points.last());
}

#[test]
fn each_bounded_range_selects_its_window() {
    let points = daily_series("2023-01-01", 400);
    let expected = [
        (RangeSelection::OneDay, 2),
        (RangeSelection::OneWeek, 8),
        (RangeSelection::OneMonth, 31),
        (RangeSelection::OneYear, 366),
        (RangeSelection::All, 400),
    ];
    for (range, len) in expected {
        assert_eq!(pick_range_points(&points, range).len(), len, "range {range}");
    }
}

#[test]
fn narrow_window_on_sparse_history_falls_back_to_last_two_points() {
    // Given: Two points thirty days apart
    let first = DailyPoint::new(parse_iso_date("2024-01-01").expect("date"), 1.0, 1.0, 1.0, 100.0);
    let second = DailyPoint::new(parse_iso_date("2024-01-31").expect("date"), 1.0, 1.0, 1.0, 90.0);

    // When: The 1d window is selected
    let picked = pick_range_points(&[first, second], RangeSelection::OneDay);

    // Then: Both points are still returned
    assert_eq!(picked, vec![first, second]);
}

#[test]
fn snapshot_over_selected_range() {
    let points = daily_series("2023-01-01", 400);
    let picked = pick_range_points(&points, RangeSelection::OneWeek);
    let snapshot = get_ticker_snapshot(&picked).expect("snapshot");

    let first = picked[0].close;
    let last = picked[picked.len() - 1].close;
    assert_eq!(snapshot.last_price, last);
    assert!((snapshot.delta - (last - first)).abs() < 1e-9);
    assert!((snapshot.percent_delta - (last - first) / first * 100.0).abs() < 1e-9);
    assert_eq!(snapshot.trend, Trend::Up);
}

#[test]
fn snapshot_gain_loss_and_zero_base() {
    let day = |d: &str, close: f64| {
        DailyPoint::new(parse_iso_date(d).expect("date"), close, close, close, close)
    };
    let pair = |first: f64, last: f64| [day("2024-01-01", first), day("2024-01-02", last)];

    let gain = get_ticker_snapshot(&pair(100.0, 110.0)).expect("gain");
    assert_eq!((gain.delta, gain.percent_delta, gain.trend), (10.0, 10.0, Trend::Up));

    let loss = get_ticker_snapshot(&pair(200.0, 150.0)).expect("loss");
    assert_eq!((loss.delta, loss.percent_delta, loss.trend), (-50.0, -25.0, Trend::Down));

    let zero = get_ticker_snapshot(&pair(0.0, 3.0)).expect("zero");
    assert_eq!(zero.percent_delta, 0.0);
    assert!(zero.percent_delta.is_finite());
}
