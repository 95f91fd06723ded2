//! Text and table output formatting for entries and totals.

use budget_core::{Entry, Summary};

use crate::ui::theme::{kind_style, kind_symbol, standing_style, styled, styles};
use crate::ui::{
    format_amount, format_currency, format_date, hint, kv, print, single_line, table, truncate,
    Column, UiContext,
};

use super::json::{entries_json, print_json};

const DESCRIPTION_MAX: usize = 40;
const CATEGORY_MAX: usize = 20;

const ENTRY_COLUMNS: [Column; 6] = [
    Column::right("ID"),
    Column::new("Date"),
    Column::new("Type"),
    Column::new("Description"),
    Column::new("Category"),
    Column::right("Amount"),
];

/// Signed, colored amount for pretty output (e.g. "+$12.00").
fn pretty_amount(ctx: &UiContext, entry: &Entry) -> String {
    let text = format!(
        "{}{}",
        kind_symbol(entry.kind(), false),
        format_currency(entry.amount().value(), &ctx.currency_symbol)
    );
    styled(&text, kind_style(entry.kind()), ctx.color)
}

fn entry_row(ctx: &UiContext, entry: &Entry) -> Vec<String> {
    if ctx.mode.is_pretty() {
        let kind = format!("{} {}", kind_symbol(entry.kind(), ctx.unicode), entry.kind());
        vec![
            entry.id().to_string(),
            format_date(&entry.date()),
            styled(&kind, kind_style(entry.kind()), ctx.color),
            truncate(&single_line(entry.description()), DESCRIPTION_MAX),
            truncate(&single_line(entry.category()), CATEGORY_MAX),
            pretty_amount(ctx, entry),
        ]
    } else {
        vec![
            entry.id().to_string(),
            format_date(&entry.date()),
            entry.kind().to_string(),
            single_line(entry.description()),
            single_line(entry.category()),
            entry.amount().to_string(),
        ]
    }
}

/// Render a list of entries as a table (pretty) or tab-separated rows (plain).
pub fn render_entry_list(ctx: &UiContext, entries: &[Entry]) -> String {
    if entries.is_empty() {
        return if ctx.mode.is_pretty() {
            styled("No entries found.", styles::dim(), ctx.color)
        } else {
            String::new()
        };
    }
    let rows: Vec<Vec<String>> = entries.iter().map(|e| entry_row(ctx, e)).collect();
    table(ctx, &ENTRY_COLUMNS, &rows)
}

/// Print a list result in the active output mode.
///
/// `total` is the match count before any row cap; pretty mode points out
/// when rows were left off.
pub fn print_entry_list(
    ctx: &UiContext,
    entries: &[Entry],
    total: usize,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return print_json(&serde_json::Value::Array(entries_json(entries)));
    }
    if quiet {
        for entry in entries {
            println!("{}", entry.id());
        }
        return Ok(());
    }
    print(ctx, &render_entry_list(ctx, entries));
    if ctx.mode.is_pretty() && entries.len() < total {
        print(
            ctx,
            &hint(
                ctx,
                &format!(
                    "Showing {} of {} entries. Use --limit or --all to see more.",
                    entries.len(),
                    total
                ),
            ),
        );
    }
    Ok(())
}

/// Render a single entry as key-value lines.
pub fn render_entry(ctx: &UiContext, entry: &Entry) -> String {
    let amount = if ctx.mode.is_pretty() {
        pretty_amount(ctx, entry)
    } else {
        entry.amount().to_string()
    };
    [
        kv(ctx, "ID", &entry.id().to_string()),
        kv(ctx, "Date", &format_date(&entry.date())),
        kv(ctx, "Type", entry.kind().as_str()),
        kv(ctx, "Description", entry.description()),
        kv(ctx, "Category", entry.category()),
        kv(ctx, "Amount", &amount),
    ]
    .join("\n")
}

/// Render income, expense and balance.
///
/// Pretty mode shows the balance as a magnitude labelled savings or deficit.
pub fn render_summary(ctx: &UiContext, summary: &Summary) -> String {
    if ctx.mode.is_pretty() {
        let symbol = ctx.currency_symbol.as_str();
        let income = styled(
            &format_currency(summary.income, symbol),
            styles::income(),
            ctx.color,
        );
        let expense = styled(
            &format_currency(summary.expense, symbol),
            styles::expense(),
            ctx.color,
        );
        let standing = summary.standing();
        let balance = styled(
            &format_currency(summary.balance.abs(), symbol),
            standing_style(standing),
            ctx.color,
        );
        let label = styled(standing.label(), styles::dim(), ctx.color);
        [
            kv(ctx, "Total Income", &income),
            kv(ctx, "Total Expenses", &expense),
            kv(ctx, "Net Balance", &format!("{}  {}", balance, label)),
            kv(ctx, "Entries", &summary.count.to_string()),
        ]
        .join("\n")
    } else {
        let standing = match summary.standing() {
            budget_core::Standing::Surplus => "surplus",
            budget_core::Standing::Deficit => "deficit",
        };
        [
            kv(ctx, "Income", &format_amount(summary.income)),
            kv(ctx, "Expense", &format_amount(summary.expense)),
            kv(ctx, "Balance", &format_amount(summary.balance)),
            kv(ctx, "Standing", standing),
            kv(ctx, "Count", &summary.count.to_string()),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use budget_core::{summarize, FixedClock, InMemoryLedger, LedgerStore, NewEntry};
    use chrono::NaiveDate;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 100,
            mode,
            currency_symbol: "$".to_string(),
            interactive: false,
        }
    }

    fn entries() -> Vec<Entry> {
        let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let mut store = InMemoryLedger::with_clock(FixedClock(day));
        store.add(NewEntry::income("Salary", "1000.00", "Work")).unwrap();
        store.add(NewEntry::expense("Rent", "1250.5", "Housing")).unwrap();
        store.list()
    }

    #[test]
    fn test_plain_list_rows() {
        let out = render_entry_list(&ctx(OutputMode::Plain), &entries());
        assert_eq!(
            out,
            "2\t2024-07-04\texpense\tRent\tHousing\t1250.5\n1\t2024-07-04\tincome\tSalary\tWork\t1000.00"
        );
    }

    #[test]
    fn test_pretty_list_uses_currency() {
        let out = render_entry_list(&ctx(OutputMode::Pretty), &entries());
        assert!(out.contains("-$1,250.50"));
        assert!(out.contains("+$1,000.00"));
        assert!(out.contains("Description"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_entry_list(&ctx(OutputMode::Plain), &[]), "");
        assert!(render_entry_list(&ctx(OutputMode::Pretty), &[]).contains("No entries"));
    }

    #[test]
    fn test_plain_summary() {
        let out = render_summary(&ctx(OutputMode::Plain), &summarize(&entries()));
        assert_eq!(
            out,
            "income=1000.00\nexpense=1250.50\nbalance=-250.50\nstanding=deficit\ncount=2"
        );
    }

    #[test]
    fn test_pretty_summary_shows_magnitude_and_label() {
        let out = render_summary(&ctx(OutputMode::Pretty), &summarize(&entries()));
        assert!(out.contains("Net Balance: $250.50"));
        assert!(out.contains("Current deficit"));
    }

    #[test]
    fn test_sub_cent_deficit_reads_as_zero_surplus() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let mut store = InMemoryLedger::with_clock(FixedClock(day));
        store.add(NewEntry::income("Refund", "0.006", "Misc")).unwrap();
        store.add(NewEntry::expense("Fee", "0.01", "Bank")).unwrap();
        let summary = summarize(&store.list());

        let plain = render_summary(&ctx(OutputMode::Plain), &summary);
        assert!(plain.contains("balance=0.00\nstanding=surplus"));
        let pretty = render_summary(&ctx(OutputMode::Pretty), &summary);
        assert!(pretty.contains("Net Balance: $0.00"));
        assert!(!pretty.contains("Current deficit"));
    }

    #[test]
    fn test_plain_entry() {
        let entries = entries();
        let out = render_entry(&ctx(OutputMode::Plain), &entries[1]);
        assert!(out.contains("id=1"));
        assert!(out.contains("type=income"));
        assert!(out.contains("amount=1000.00"));
    }
}
