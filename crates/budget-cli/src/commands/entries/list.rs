use budget_core::{EntryQuery, LedgerStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::print_entry_list;

pub fn handle_list(
    ctx: &AppContext,
    store: &dyn LedgerStore,
    args: &ListArgs,
) -> anyhow::Result<()> {
    let mut query = EntryQuery::new();
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
