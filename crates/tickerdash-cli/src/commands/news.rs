use tickerdash_core::Tab;

use super::{AppContext, CommandOutcome};

pub fn run(context: &AppContext) -> CommandOutcome {
    let mut dashboard = context.dashboard();
    dashboard.set_tab(Tab::News);
    CommandOutcome::ok(context.render(&dashboard))
}
