use tk_core::page::ListQuery;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Build the list query from a command's `--search`, the global `--page`,
/// and the configured page size.
pub fn list_query(search: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> ListQuery {
    build(search, flags.page, ctx.page_size())
}

fn build(search: Option<&str>, page: u32, page_size: u32) -> ListQuery {
    let query = ListQuery::default().page(page).page_size(page_size);
    match search {
        Some(term) => query.search(term),
        None => query,
    }
}
