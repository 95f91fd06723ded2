use budget_core::{summarize, LedgerStore};

use crate::app::AppContext;
use crate::output::{print_json, render_summary, summary_json};
use crate::ui::{header, print};

pub fn handle_summary(ctx: &AppContext, store: &dyn LedgerStore) -> anyhow::Result<()> {
    let summary = summarize(&store.list());

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&summary_json(&summary));
    }
    if ui.mode.is_pretty() && !ctx.quiet() {
        print(ui, &header(ui, "summary", None));
    }
    print(ui, &render_summary(ui, &summary));
    Ok(())
}
