//! CLI argument definitions for tickerdash.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `track` | Fetch tickers and show their change over a range |
//! | `news` | Show the earnings calendar |
//! | `theme` | Show or change the persisted theme |
//! | `shell` | Interactive dashboard session |
//!
//! # Examples
//!
//! ```bash
//! tickerdash track aapl,msft --range 1m
//! tickerdash track aapl msft nvda --format html
//! tickerdash news --format json --pretty
//! tickerdash theme toggle
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tickerdash - daily price change tracker for up to five tickers.
#[derive(Debug, Parser)]
#[command(
    name = "tickerdash",
    author,
    version,
    about = "Daily price change tracker for up to five tickers",
    long_about = "Tickerdash fetches full daily price history for up to five tickers from \
Stooq (through a CORS relay by default), and reports last price and change over \
1d, 1w, 1m, 1y or all available history. It also lists upcoming earnings."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds (overrides TICKERDASH_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Relay endpoint wrapping provider URLs (overrides TICKERDASH_RELAY_URL).
    #[arg(long, global = true, conflicts_with = "no_relay")]
    pub relay_url: Option<String>,

    /// Call the provider directly instead of through the relay.
    #[arg(long, global = true, default_value_t = false)]
    pub no_relay: bool,

    /// Earnings calendar JSON file (overrides TICKERDASH_EARNINGS).
    #[arg(long, global = true)]
    pub earnings: Option<PathBuf>,

    /// Preferences file (overrides TICKERDASH_PREFERENCES).
    #[arg(long, global = true)]
    pub preferences: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text rows for terminal display.
    Table,
    /// Markup fragment of the whole dashboard.
    Html,
    /// JSON view model.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch tickers and show their price change over a range.
    ///
    ///   tickerdash track aapl,msft
    ///   tickerdash track aapl msft --range 1y
    Track(TrackArgs),

    /// Show upcoming earnings announcements.
    News,

    /// Show or change the persisted colour theme.
    Theme(ThemeArgs),

    /// Interactive session over a single dashboard.
    ///
    /// Commands: submit <tickers>, range <1d|1w|1m|1y|all>, tab <tracker|news>,
    /// theme [toggle|light|dark], show, help, quit.
    Shell,
}

/// Arguments for the `track` command.
#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Tickers, comma- or space-separated (at most five are used).
    #[arg(required = true, num_args = 1..)]
    pub tickers: Vec<String>,

    /// Lookback range: 1d, 1w, 1m, 1y or all.
    #[arg(long, default_value = "1d")]
    pub range: String,
}

impl TrackArgs {
    /// Arguments joined back into the free-form input the parser expects.
    pub fn raw_input(&self) -> String {
        self.tickers.join(",")
    }
}

/// Arguments for the `theme` command.
#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[arg(value_enum, default_value_t = ThemeAction::Show)]
    pub action: ThemeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Light,
    Dark,
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_joins_positional_tickers() {
        let cli = Cli::try_parse_from(["tickerdash", "track", "aapl,msft", "nvda", "--range", "1w"])
            .expect("parse");
        match cli.command {
            Command::Track(args) => {
                assert_eq!(args.raw_input(), "aapl,msft,nvda");
                assert_eq!(args.range, "1w");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn relay_flags_conflict() {
        let result = Cli::try_parse_from([
            "tickerdash",
            "--no-relay",
            "--relay-url",
            "https://relay.test/raw",
            "news",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn theme_defaults_to_show() {
        let cli = Cli::try_parse_from(["tickerdash", "theme"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Theme(ThemeArgs {
                action: ThemeAction::Show
            })
        ));
    }
}
