use budget_core::{summarize, LedgerStore};

use crate::cli::ExportArgs;
use crate::output::{entries_json, summary_json};

/// Print every entry plus totals as one JSON document, whatever the output mode.
pub fn handle_export(store: &dyn LedgerStore, args: &ExportArgs) -> anyhow::Result<()> {
    let entries = store.list();
    let document = serde_json::json!({
        "entries": entries_json(&entries),
        "summary": summary_json(&summarize(&entries)),
    });
    let output = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{}", output);
    Ok(())
}
