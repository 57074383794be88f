//! Application state container.
//!
//! [`Dashboard`] owns everything the renderer reads: the active tickers,
//! their stored results, the selected range, the visible tab and the theme.
//! Submissions are identified so that results of a superseded submission are
//! discarded instead of overwriting newer state.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::{fetch_all, BatchOutcome, SeriesResult};
use crate::data_source::DailySeriesSource;
use crate::preferences::PreferenceStore;
use crate::{
    parse_tickers, RangeSelection, StoreError, Tab, ThemePreference, Ticker, ValidationError,
};

/// Identifier of one submission batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SubmissionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A started submission: the tickers to fetch and the id to complete it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub tickers: Vec<Ticker>,
}

/// Summary of a finished submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub id: SubmissionId,
    pub tickers: usize,
    pub failures: usize,
    pub latency_ms: u64,
    /// False when a newer submission superseded this one before it settled.
    pub applied: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    tickers: Vec<Ticker>,
    results: HashMap<Ticker, SeriesResult>,
    range: RangeSelection,
    tab: Tab,
    theme: ThemePreference,
    pending: Option<SubmissionId>,
    notice: Option<String>,
}

impl Dashboard {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn result(&self, ticker: &Ticker) -> Option<&SeriesResult> {
        self.results.get(ticker)
    }

    pub const fn range(&self) -> RangeSelection {
        self.range
    }

    pub const fn tab(&self) -> Tab {
        self.tab
    }

    pub const fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit and range controls are disabled while a batch is in flight.
    pub const fn controls_disabled(&self) -> bool {
        self.is_loading()
    }

    /// Status message overriding the default status line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Parse `raw` and make its tickers the active list, clearing stored
    /// results. An input without tickers leaves the current state untouched
    /// apart from the notice.
    pub fn begin_submission(&mut self, raw: &str) -> Result<Submission, ValidationError> {
        let tickers = parse_tickers(raw);
        if tickers.is_empty() {
            self.notice = Some(String::from("Please enter at least one ticker."));
            return Err(ValidationError::EmptySubmission);
        }

        if let Some(previous) = self.pending {
            warn!(%previous, "submission superseded while in flight");
        }

        let id = SubmissionId::new_v4();
        self.tickers = tickers.clone();
        self.results.clear();
        self.pending = Some(id);
        self.notice = None;
        info!(submission = %id, tickers = tickers.len(), "submission started");

        Ok(Submission { id, tickers })
    }

    /// Store the settled results of submission `id`. Returns false and
    /// discards the results when `id` is no longer the active submission.
    pub fn complete_submission(&mut self, id: SubmissionId, outcome: BatchOutcome) -> bool {
        if self.pending != Some(id) {
            warn!(submission = %id, "discarding results of superseded submission");
            return false;
        }

        for (ticker, result) in outcome.results {
            if self.tickers.contains(&ticker) {
                self.results.insert(ticker, result);
            }
        }
        self.pending = None;
        true
    }

    /// Begin a submission, fetch every ticker concurrently through `source`
    /// and store the settled results.
    pub async fn submit(
        &mut self,
        raw: &str,
        source: Arc<dyn DailySeriesSource>,
    ) -> Result<SubmissionReport, ValidationError> {
        let submission = self.begin_submission(raw)?;
        let outcome = fetch_all(source, &submission.tickers).await;
        let failures = outcome.failure_count();
        let latency_ms = outcome.latency_ms;
        let applied = self.complete_submission(submission.id, outcome);
        info!(submission = %submission.id, failures, latency_ms, "submission settled");

        Ok(SubmissionReport {
            id: submission.id,
            tickers: submission.tickers.len(),
            failures,
            latency_ms,
            applied,
        })
    }

    pub fn set_range(&mut self, range: RangeSelection) {
        self.range = range;
        if !self.tickers.is_empty() {
            self.notice = None;
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Apply `theme` and persist it.
    pub fn set_theme(
        &mut self,
        theme: ThemePreference,
        store: &mut PreferenceStore,
    ) -> Result<(), StoreError> {
        self.theme = theme;
        store.save_theme(theme)
    }

    /// Switch to the other theme and persist it.
    pub fn toggle_theme(
        &mut self,
        store: &mut PreferenceStore,
    ) -> Result<ThemePreference, StoreError> {
        let next = self.theme.toggled();
        self.set_theme(next, store)?;
        Ok(next)
    }
}
