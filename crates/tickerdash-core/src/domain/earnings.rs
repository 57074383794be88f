use std::path::Path;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::point::iso_date;
use crate::{CoreError, ValidationError};

const BUNDLED_CALENDAR: &str = include_str!("../../data/earnings.json");

/// Scheduled earnings announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsEvent {
    pub ticker: String,
    pub company: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Announcement time label, e.g. "Before open" or "After close".
    pub time: String,
}

impl EarningsEvent {
    pub fn new(
        ticker: impl Into<String>,
        company: impl Into<String>,
        date: Date,
        time: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let ticker = ticker.into().trim().to_uppercase();
        let company = company.into();
        if ticker.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        if company.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName { ticker });
        }
        Ok(Self {
            ticker,
            company,
            date,
            time: time.into(),
        })
    }
}

/// Earnings reference data handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EarningsCalendar {
    events: Vec<EarningsEvent>,
}

impl EarningsCalendar {
    pub fn new(events: Vec<EarningsEvent>) -> Self {
        Self { events }
    }

    /// Calendar shipped with the binary.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json(BUNDLED_CALENDAR)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let events: Vec<EarningsEvent> = serde_json::from_str(json)?;
        let events = events
            .into_iter()
            .map(|event| EarningsEvent::new(event.ticker, event.company, event.date, event.time))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events))
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::EarningsIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn events(&self) -> &[EarningsEvent] {
        &self.events
    }

    /// Events on or after `today`, ascending by date. When nothing is
    /// upcoming the whole calendar is returned, still sorted.
    pub fn upcoming(&self, today: Date) -> Vec<&EarningsEvent> {
        let mut sorted: Vec<&EarningsEvent> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.date);

        let upcoming: Vec<&EarningsEvent> = sorted
            .iter()
            .copied()
            .filter(|event| event.date >= today)
            .collect();

        if upcoming.is_empty() {
            sorted
        } else {
            upcoming
        }
    }
}
