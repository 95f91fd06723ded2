use budget_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::resolve_new_entry;
use crate::output::{entry_json, print_json};
use crate::ui::theme::kind_symbol;
use crate::ui::{format_currency, format_date, print, receipt};

pub fn handle_add(
    ctx: &AppContext,
    store: &mut dyn LedgerStore,
    args: &AddArgs,
) -> anyhow::Result<()> {
    let new_entry = resolve_new_entry(args, ctx.default_kind(), ctx.interactive())?;
    let entry = store.add(new_entry)?;

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&entry_json(&entry));
    }
    if ctx.quiet() {
        println!("{}", entry.id());
        return Ok(());
    }

    let amount = if ui.mode.is_pretty() {
        format!(
            "{}{}",
            kind_symbol(entry.kind(), false),
            format_currency(entry.amount().value(), &ui.currency_symbol)
        )
    } else {
        entry.amount().to_string()
    };
    print(
        ui,
        &receipt(
            ui,
            "Entry added",
            &[
                ("ID", entry.id().to_string()),
                ("Type", entry.kind().to_string()),
                ("Amount", amount),
                ("Category", entry.category().to_string()),
                ("Date", format_date(&entry.date())),
            ],
        ),
    );
    Ok(())
}
