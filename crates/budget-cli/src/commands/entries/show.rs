use budget_core::{LedgerError, LedgerStore};

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_json, render_entry};
use crate::ui::print;

pub fn handle_show(
    ctx: &AppContext,
    store: &dyn LedgerStore,
    args: &ShowArgs,
) -> anyhow::Result<()> {
    let entry = store
        .get(args.id)
        .ok_or_else(|| LedgerError::NotFound(format!("entry {}", args.id)))?;

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&entry_json(&entry));
    }
    print(ui, &render_entry(ui, &entry));
    Ok(())
}
