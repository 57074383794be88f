mod news;
mod shell;
mod theme;
mod track;

use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tickerdash_core::preferences::detect_system_theme;
use tickerdash_core::{
    DailySeriesSource, Dashboard, DashboardConfig, DashboardView, EarningsCalendar,
    PreferenceStore, StooqAdapter,
};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Everything a command needs, built once from configuration and flags.
pub struct AppContext {
    pub source: Arc<dyn DailySeriesSource>,
    pub calendar: EarningsCalendar,
    pub store: PreferenceStore,
    pub today: Date,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let config = resolve_config(cli)?;
        debug!(?config, "resolved configuration");

        let calendar = match &config.earnings_path {
            Some(path) => EarningsCalendar::load(path)?,
            None => EarningsCalendar::bundled()?,
        };

        Ok(Self {
            source: Arc::new(StooqAdapter::from_config(&config)),
            calendar,
            store: PreferenceStore::open(&config.preferences_path)?,
            today: OffsetDateTime::now_utc().date(),
        })
    }

    /// Fresh dashboard using the saved theme, or the system one when unset.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.store.theme_or(detect_system_theme()))
    }

    pub fn render(&self, dashboard: &Dashboard) -> DashboardView {
        tickerdash_core::render::render(dashboard, &self.calendar, self.today)
    }
}

/// Exit code of a run that rendered but had at least one failed ticker.
pub const FAILED_TICKERS_EXIT_CODE: u8 = 3;

/// Result of a one-shot command.
pub struct CommandOutcome {
    pub view: DashboardView,
    /// Line printed above the table rendering.
    pub headline: Option<String>,
    /// Tickers whose fetch failed.
    pub failures: usize,
}

impl CommandOutcome {
    pub fn ok(view: DashboardView) -> Self {
        Self {
            view,
            headline: None,
            failures: 0,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_failures(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }

    pub const fn exit_code(&self) -> u8 {
        if self.failures > 0 {
            FAILED_TICKERS_EXIT_CODE
        } else {
            0
        }
    }
}

/// Run a one-shot command. Returns `None` for the interactive shell, which
/// renders as it goes.
pub async fn run(cli: &Cli) -> Result<Option<CommandOutcome>, CliError> {
    let mut context = AppContext::from_cli(cli)?;

    match &cli.command {
        Command::Track(args) => track::run(args, &context).await.map(Some),
        Command::News => Ok(Some(news::run(&context))),
        Command::Theme(args) => theme::run(args, &mut context).map(Some),
        Command::Shell => {
            shell::run(&mut context, cli.format, cli.pretty).await?;
            Ok(None)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<DashboardConfig, CliError> {
    let mut config = DashboardConfig::from_env()?;

    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if cli.no_relay {
        config.relay_url = None;
    } else if let Some(relay_url) = &cli.relay_url {
        config.relay_url = Some(relay_url.clone());
    }
    if let Some(path) = &cli.earnings {
        config.earnings_path = Some(path.clone());
    }
    if let Some(path) = &cli.preferences {
        config.preferences_path = path.clone();
    }

    Ok(config)
}
