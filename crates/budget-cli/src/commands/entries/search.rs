use budget_core::{EntryQuery, LedgerStore};

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::print_entry_list;

/// Case-insensitive substring search over description and category.
///
/// An empty query matches every entry.
pub fn handle_search(
    ctx: &AppContext,
    store: &dyn LedgerStore,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let mut query = EntryQuery::new().text(args.query.clone());
    if let Some(kind) = args.kind {
        query = query.kind(kind);
    }
    if !args.all {
        if let Some(limit) = args.limit.or_else(|| ctx.list_limit()) {
            query = query.limit(limit);
        }
    }

    let entries = store.list();
    let matched = query.apply(&entries);
    let total = EntryQuery { limit: None, ..query }.apply(&entries).len();
    print_entry_list(ctx.ui(), &matched, total, ctx.quiet())
}
