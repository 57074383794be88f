//! Interactive dashboard session.
//!
//! One [`Dashboard`] lives for the whole session, so range and tab changes
//! re-render the stored results without fetching again.

use std::io::{self, Write};
use std::sync::Arc;

use tickerdash_core::render::status_line;
use tickerdash_core::{fetch_all, Dashboard, RangeSelection, Tab, ThemePreference};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::write_view;

use super::theme::theme_headline;
use super::AppContext;

const HELP: &str = "\
commands:
  submit <tickers>               fetch up to five comma-separated tickers
  range <1d|1w|1m|1y|all>        change the lookback range
  tab <tracker|news>             switch the visible panel
  theme [toggle|light|dark]      change and save the theme
  show                           render the dashboard again
  help                           this text
  quit                           leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Submit(String),
    Range(RangeSelection),
    Tab(Tab),
    /// `None` toggles.
    Theme(Option<ThemePreference>),
    Show,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<ShellCommand>, CliError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb.to_ascii_lowercase().as_str() {
        "submit" | "track" => ShellCommand::Submit(rest.to_owned()),
        "range" => ShellCommand::Range(RangeSelection::parse(rest)?),
        "tab" => ShellCommand::Tab(Tab::parse(rest)?),
        "theme" => match rest {
            "" | "toggle" => ShellCommand::Theme(None),
            other => ShellCommand::Theme(Some(ThemePreference::parse(other)?)),
        },
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(CliError::Command(format!("unknown command '{other}' (try 'help')"))),
    };

    Ok(Some(command))
}

pub async fn run(
    context: &mut AppContext,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let mut dashboard = context.dashboard();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(error) = apply(command, &mut dashboard, context, format, pretty).await {
                    eprintln!("error: {error}");
                }
            }
            Err(error) => eprintln!("error: {error}"),
        }
        prompt()?;
    }

    Ok(())
}

async fn apply(
    command: ShellCommand,
    dashboard: &mut Dashboard,
    context: &mut AppContext,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match command {
        ShellCommand::Submit(raw) => {
            let submission = match dashboard.begin_submission(&raw) {
                Ok(submission) => submission,
                Err(_) => {
                    println!("{}", status_line(dashboard));
                    return Ok(());
                }
            };
            eprintln!("{}", status_line(dashboard));
            let outcome = fetch_all(Arc::clone(&context.source), &submission.tickers).await;
            dashboard.complete_submission(submission.id, outcome);
            dashboard.set_tab(Tab::Tracker);
        }
        ShellCommand::Range(range) => dashboard.set_range(range),
        ShellCommand::Tab(tab) => dashboard.set_tab(tab),
        ShellCommand::Theme(Some(theme)) => {
            dashboard.set_theme(theme, &mut context.store)?;
            println!("{}", theme_headline(dashboard.theme()));
            return Ok(());
        }
        ShellCommand::Theme(None) => {
            dashboard.toggle_theme(&mut context.store)?;
            println!("{}", theme_headline(dashboard.theme()));
            return Ok(());
        }
        ShellCommand::Show => {}
        ShellCommand::Help => {
            println!("{HELP}");
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    }

    let view = context.render(dashboard);
    let stdout = io::stdout();
    write_view(&mut stdout.lock(), &view, format, pretty)
}

fn prompt() -> Result<(), CliError> {
    let mut stdout = io::stdout();
    write!(stdout, "tickerdash> ")?;
    stdout.flush()?;
    Ok(())
}
