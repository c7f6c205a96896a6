// Slice filter - maps (collection, page size, page, instance) to one page

use crate::state::context::PaginationContext;
use crate::state::page::page_window;

/// Effective page size when the caller passes 0: everything on one page.
const UNPAGED: usize = usize::MAX;

/// Slice one page out of `items`, recording the pagination metadata for the
/// given instance in the context.
///
/// The state for `instance_id` is created on first invocation and updated in
/// place afterwards, so calling this any number of times within one update
/// cycle is safe and leaves a single registry entry. The stored current page
/// is re-clamped against the fresh total before the slice is taken; the
/// clamped value is written back (state and bound cell) before this function
/// returns, which is what guarantees the controls read a consistent snapshot
/// later in the same cycle.
pub fn items_per_page<'a, T>(
    ctx: &mut PaginationContext,
    items: &'a [T],
    per_page: usize,
    instance_id: &str,
) -> &'a [T] {
    items_per_page_with_total(ctx, items, per_page, instance_id, None)
}

/// Like [`items_per_page`], but paginating an externally reported total.
///
/// With a total override the source is returned unsliced: the caller's
/// collection is already the one page of rows it was handed, while the link
/// window is computed from the override count.
pub fn items_per_page_with_total<'a, T>(
    ctx: &mut PaginationContext,
    items: &'a [T],
    per_page: usize,
    instance_id: &str,
    total_override: Option<usize>,
) -> &'a [T] {
    let per_page = if per_page == 0 { UNPAGED } else { per_page };

    let state = ctx.get_or_create(instance_id);
    state.set_items_per_page(per_page);
    match total_override {
        Some(total) => {
            state.set_total_items(total);
            state.set_async_mode(true);
        }
        None => {
            state.set_total_items(items.len());
            state.set_async_mode(false);
        }
    }

    let requested = state.requested_page();
    let page = state.set_current_page(requested);
    if page != requested {
        log::trace!("pagination '{instance_id}': clamped page {requested} -> {page}");
    }

    if state.is_async() {
        return items;
    }
    let (start, end) = page_window(items.len(), per_page, page);
    &items[start..end]
}
