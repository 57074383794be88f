use std::sync::Arc;

use tickerdash_core::{RangeSelection, Tab};

use crate::cli::TrackArgs;
use crate::error::CliError;

use super::{AppContext, CommandOutcome};

pub async fn run(args: &TrackArgs, context: &AppContext) -> Result<CommandOutcome, CliError> {
    let range = RangeSelection::parse(&args.range)?;

    let mut dashboard = context.dashboard();
    dashboard.set_tab(Tab::Tracker);
    dashboard.set_range(range);
    let report = dashboard
        .submit(&args.raw_input(), Arc::clone(&context.source))
        .await?;

    Ok(CommandOutcome::ok(context.render(&dashboard)).with_failures(report.failures))
}
