//! # Domain Models
//!
//! Value types shared by the fetcher, the dashboard state and the renderer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Normalized ticker symbol |
//! | [`DailyPoint`] | One day of OHLC prices |
//! | [`RangeSelection`] | Lookback window (1d, 1w, 1m, 1y, all) |
//! | [`Snapshot`] | Last price and change over a range |
//! | [`EarningsEvent`] | Scheduled earnings announcement |
//! | [`ThemePreference`] | Light or dark theme |
//! | [`Tab`] | Visible dashboard panel |

mod earnings;
mod point;
mod range;
mod snapshot;
mod ticker;
mod ui;

pub use earnings::{EarningsCalendar, EarningsEvent};
pub use point::{format_iso_date, parse_iso_date, DailyPoint};
pub use range::{pick_range_points, RangeSelection};
pub use snapshot::{get_ticker_snapshot, Snapshot, Trend};
pub use ticker::{parse_tickers, Ticker, MAX_TICKERS};
pub use ui::{Tab, ThemePreference};
