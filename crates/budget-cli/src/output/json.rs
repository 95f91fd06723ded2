//! JSON output formatting for entries and totals.

use budget_core::{Entry, Summary};

use crate::ui::format_amount;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id(),
        "description": entry.description(),
        "amount": entry.amount(),
        "kind": entry.kind(),
        "category": entry.category(),
        "date": entry.date(),
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

/// Print a JSON document as a single line.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Convert totals to JSON, rounded to cents.
pub fn summary_json(summary: &Summary) -> serde_json::Value {
    serde_json::json!({
        "income": format_amount(summary.income),
        "expense": format_amount(summary.expense),
        "balance": format_amount(summary.balance),
        "standing": summary.standing(),
        "count": summary.count,
    })
}
