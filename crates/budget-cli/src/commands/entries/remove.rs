use budget_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::output::print_json;
use crate::ui::{badge, print, receipt, Badge};

/// Remove an entry. An unknown id leaves the ledger alone and only warns.
pub fn handle_remove(
    ctx: &AppContext,
    store: &mut dyn LedgerStore,
    args: &RemoveArgs,
) -> anyhow::Result<()> {
    let removed = store.remove(args.id);

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "id": args.id,
            "removed": removed,
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }

    if removed {
        print(
            ui,
            &receipt(ui, "Entry removed", &[("ID", args.id.to_string())]),
        );
    } else if ui.mode.is_pretty() {
        print(
            ui,
            &badge(ui, Badge::Warn, &format!("No entry with ID {}", args.id)),
        );
    } else {
        print(ui, &format!("status=unchanged\nid={}", args.id));
    }
    Ok(())
}
