//! Quote provider adapters.

mod stooq;

pub use stooq::{parse_daily_csv, StooqAdapter};
