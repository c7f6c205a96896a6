// Pagination registry - explicit per-view mapping from instance id to state

use std::collections::HashMap;

use crate::state::page::PageState;

/// Reserved identifier for lists declared without an explicit instance id.
///
/// Distinct from any user-supplied id by its double-underscore prefix.
pub const DEFAULT_ID: &str = "__default";

/// Registry of pagination instances for one view.
///
/// Owned by the enclosing view and passed explicitly to both the slice
/// filter and the controls widget, so several independent paginated lists
/// can coexist without touching each other's state. Dropping the context
/// (or calling [`remove`](Self::remove) for a single list) ends the
/// corresponding lifetimes.
#[derive(Debug, Default)]
pub struct PaginationContext {
    states: HashMap<String, PageState>,
}

impl PaginationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&PageState> {
        self.states.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PageState> {
        self.states.get_mut(id)
    }

    /// Upsert accessor reserved to the slice filter: the filter creates state
    /// on first invocation for an id and reuses it afterwards.
    pub(crate) fn get_or_create(&mut self, id: &str) -> &mut PageState {
        self.states.entry(id.to_owned()).or_insert_with(|| {
            log::debug!("pagination: registering instance '{id}'");
            PageState::new(id)
        })
    }

    /// Drop the state for an id when its list leaves the view.
    pub fn remove(&mut self, id: &str) -> Option<PageState> {
        let removed = self.states.remove(id);
        if removed.is_some() {
            log::debug!("pagination: released instance '{id}'");
        }
        removed
    }

    pub fn current_page(&self, id: &str) -> Option<usize> {
        self.get(id).map(PageState::current_page)
    }

    /// Programmatic page assignment. Clamps to the instance's range and
    /// returns the page actually stored, or `None` for an unknown id.
    pub fn set_current_page(&mut self, id: &str, page: usize) -> Option<usize> {
        self.get_mut(id).map(|state| state.set_current_page(page))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut ctx = PaginationContext::new();
        ctx.get_or_create("books").set_total_items(10);
        ctx.get_or_create("books");

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get("books").unwrap().total_items(), 10);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut ctx = PaginationContext::new();
        ctx.get_or_create("left").set_items_per_page(5);
        ctx.get_or_create("right").set_items_per_page(20);

        assert_eq!(ctx.get("left").unwrap().items_per_page(), 5);
        assert_eq!(ctx.get("right").unwrap().items_per_page(), 20);
    }

    #[test]
    fn test_remove_ends_the_instance() {
        let mut ctx = PaginationContext::new();
        ctx.get_or_create(DEFAULT_ID);
        assert!(ctx.is_registered(DEFAULT_ID));

        ctx.remove(DEFAULT_ID);
        assert!(!ctx.is_registered(DEFAULT_ID));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_set_current_page_unknown_id() {
        let mut ctx = PaginationContext::new();
        assert_eq!(ctx.set_current_page("nope", 3), None);
    }
}
