//! # Tickerdash Core
//!
//! Ticker tracking pipeline for the tickerdash dashboard.
//!
//! ## Overview
//!
//! - **Ticker parsing**: free-form comma-separated input to at most five
//!   unique, uppercased tickers
//! - **Quote fetching**: full daily history per ticker from Stooq, optionally
//!   through a CORS relay
//! - **Range snapshots**: last price and change over 1d, 1w, 1m, 1y or all
//! - **Dashboard state**: one container for tickers, results, range, tab and
//!   theme, with concurrent all-settle submissions
//! - **Rendering**: markup fragments, plain-text rows or JSON
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Quote provider adapters (Stooq) |
//! | [`batch`] | Concurrent per-ticker fetching |
//! | [`config`] | Runtime configuration |
//! | [`dashboard`] | Application state container |
//! | [`data_source`] | Daily-series source trait and fetch errors |
//! | [`domain`] | Tickers, points, ranges, snapshots, earnings |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`preferences`] | Persistent theme preference |
//! | [`render`] | Presentation of dashboard state |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerdash_core::{render, Dashboard, DashboardConfig, EarningsCalendar, StooqAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::from_env()?;
//!     let source = Arc::new(StooqAdapter::from_config(&config));
//!
//!     let mut dashboard = Dashboard::default();
//!     dashboard.submit("aapl, msft", source).await?;
//!
//!     let today = time::OffsetDateTime::now_utc().date();
//!     let view = render::render(&dashboard, &EarningsCalendar::bundled()?, today);
//!     print!("{}", view.to_text());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod batch;
pub mod config;
pub mod dashboard;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod preferences;
pub mod render;

pub use adapters::{parse_daily_csv, StooqAdapter};

pub use batch::{fetch_all, BatchOutcome, SeriesResult};

pub use config::DashboardConfig;

pub use dashboard::{Dashboard, Submission, SubmissionId, SubmissionReport};

pub use data_source::{DailySeriesSource, FetchError, FetchErrorKind, SeriesFuture};

pub use domain::{
    get_ticker_snapshot, parse_tickers, pick_range_points, DailyPoint, EarningsCalendar,
    EarningsEvent, RangeSelection, Snapshot, Tab, ThemePreference, Ticker, Trend, MAX_TICKERS,
};

pub use error::{CoreError, StoreError, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};

pub use preferences::{detect_system_theme, PreferenceStore};

pub use render::{CardView, DashboardView, NewsItem};
