use tickerdash_core::ThemePreference;
use tracing::info;

use crate::cli::{ThemeAction, ThemeArgs};
use crate::error::CliError;

use super::{AppContext, CommandOutcome};

pub fn run(args: &ThemeArgs, context: &mut AppContext) -> Result<CommandOutcome, CliError> {
    let mut dashboard = context.dashboard();

    match args.action {
        ThemeAction::Show => {}
        ThemeAction::Light => dashboard.set_theme(ThemePreference::Light, &mut context.store)?,
        ThemeAction::Dark => dashboard.set_theme(ThemePreference::Dark, &mut context.store)?,
        ThemeAction::Toggle => {
            dashboard.toggle_theme(&mut context.store)?;
        }
    }

    if args.action != ThemeAction::Show {
        info!(theme = %dashboard.theme(), path = %context.store.path().display(), "theme saved");
    }

    let headline = theme_headline(dashboard.theme());
    Ok(CommandOutcome::ok(context.render(&dashboard)).with_headline(headline))
}

pub fn theme_headline(theme: ThemePreference) -> String {
    format!("theme: {theme} (toggle: {})", theme.toggle_label())
}
