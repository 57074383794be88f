use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Maximum number of tickers tracked by a single submission.
pub const MAX_TICKERS: usize = 5;

/// Market suffix appended to tickers that do not name an exchange themselves.
const DEFAULT_MARKET_SUFFIX: &str = ".us";

/// Normalized (trimmed, uppercased, non-empty) ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize a single ticker. Fails only when nothing is left after trimming.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol in the quote provider's notation: lowercase, market-suffixed
    /// unless the ticker already carries a suffix.
    pub fn provider_symbol(&self) -> String {
        let lower = self.0.to_lowercase();
        if lower.contains('.') {
            lower
        } else {
            format!("{lower}{DEFAULT_MARKET_SUFFIX}")
        }
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}

/// Split free-form input on commas into at most [`MAX_TICKERS`] unique tickers,
/// keeping first-seen order. Empty pieces are skipped; an empty result is not
/// an error.
pub fn parse_tickers(raw: &str) -> Vec<Ticker> {
    let mut unique: Vec<Ticker> = Vec::with_capacity(MAX_TICKERS);
    for ticker in raw.split(',').filter_map(|piece| Ticker::parse(piece).ok()) {
        if unique.len() == MAX_TICKERS {
            break;
        }
        if !unique.contains(&ticker) {
            unique.push(ticker);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tickers: &[Ticker]) -> Vec<&str> {
        tickers.iter().map(Ticker::as_str).collect()
    }

    #[test]
    fn dedupes_uppercases_and_caps_input() {
        let parsed = parse_tickers("aapl, aapl, MSFT,, goog,tsla,meta,nvda");
        assert_eq!(strings(&parsed), ["AAPL", "MSFT", "GOOG", "TSLA", "META"]);
    }

    #[test]
    fn empty_input_yields_no_tickers() {
        assert!(parse_tickers("").is_empty());
        assert!(parse_tickers(" , ,, ").is_empty());
    }

    #[test]
    fn duplicates_beyond_the_cap_do_not_count() {
        let parsed = parse_tickers("a,a,a,a,a,a,b,c,d,e,f");
        assert_eq!(strings(&parsed), ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn provider_symbol_appends_market_suffix() {
        let plain = Ticker::parse("AAPL").expect("ticker");
        assert_eq!(plain.provider_symbol(), "aapl.us");

        let suffixed = Ticker::parse("vod.uk").expect("ticker");
        assert_eq!(suffixed.as_str(), "VOD.UK");
        assert_eq!(suffixed.provider_symbol(), "vod.uk");
    }
}
