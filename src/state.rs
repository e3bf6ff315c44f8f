//! The pure state layer.
//!
//! [`ResourceState`] mirrors the most recent successful server responses into
//! local view state. Reconciliation rules live here with no IO, so the same
//! inputs always produce the same state. The async facade in
//! [`store`](crate::store) drives these functions around its one network call
//! per operation.

use crate::{
    client::ListResponse,
    pagination::{ListQuery, Pagination, DEFAULT_LIMIT, DEFAULT_PAGE},
    resource::Resource,
};

/// Cached view state for one resource collection.
///
/// Fields mirror server responses and are never speculatively mutated: every
/// change happens after a confirmed response. `current` has a lifecycle
/// independent of `items` and may reference an entity the list does not hold,
/// or hold a stale copy of one it does.
#[derive(Debug)]
pub struct ResourceState<R: Resource> {
    /// Cached entities, in server order for lists and newest-first for
    /// locally created entities.
    pub items: Vec<R::Entity>,
    /// The entity most recently fetched by id or updated.
    pub current: Option<R::Entity>,
    /// True while an operation is in flight.
    pub is_loading: bool,
    /// Message of the most recent failure. Cleared at the start of every
    /// operation; never expires on its own.
    pub error: Option<String>,
    /// Pagination window of the most recent list call.
    pub pagination: Pagination,
}

impl<R: Resource> ResourceState<R> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            is_loading: false,
            error: None,
            pagination: Pagination::default(),
        }
    }

    /// Enter the loading bracket: clear the previous error and mark an
    /// operation in flight.
    pub fn begin(&mut self) {
        self.error = None;
        self.is_loading = true;
    }

    /// Leave the loading bracket. Called on both success and failure.
    pub fn settle(&mut self) {
        self.is_loading = false;
    }

    /// Record a failure. Everything except `error` keeps its prior value.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Reconcile a successful list response.
    ///
    /// `items` is replaced wholesale with the response's entity array.
    /// Pagination comes from the response, falling back to the query's
    /// page/limit where the response omits them, then to defaults. A missing
    /// total falls back to the returned array length, and a missing page
    /// count is derived from total and limit.
    pub fn apply_list(&mut self, response: ListResponse<R::Entity>, query: &R::Query) {
        let limit = response
            .limit
            .or_else(|| query.limit())
            .unwrap_or(DEFAULT_LIMIT);
        let total = response.total.unwrap_or(response.data.len() as u64);
        let total_pages = response
            .total_pages
            .unwrap_or_else(|| derived_page_count(total, limit));

        self.pagination = Pagination {
            page: response
                .page
                .or_else(|| query.page())
                .unwrap_or(DEFAULT_PAGE),
            limit,
            total,
            total_pages,
        };
        self.items = response.data;
    }

    /// Reconcile a successful get-by-id response. `items` is untouched.
    pub fn apply_fetched(&mut self, entity: R::Entity) {
        self.current = Some(entity);
    }

    /// Reconcile a successful create response: the new entity goes to the
    /// front of `items` (newest first, matching every list view in the
    /// platform).
    pub fn apply_created(&mut self, entity: R::Entity) {
        self.items.insert(0, entity);
    }

    /// Reconcile a successful update response: the element matching the
    /// requested id is replaced wholesale by the server's representation,
    /// keeping its position, and `current` takes that representation. The
    /// match keys on the id the update was issued for, not the returned
    /// entity's id. When no element matches (the list was fetched under a
    /// different filter), `items` is left alone.
    pub fn apply_updated(&mut self, id: &R::Id, entity: R::Entity) {
        if let Some(pos) = self.items.iter().position(|e| R::id(e) == id) {
            self.items[pos] = entity.clone();
        }
        self.current = Some(entity);
    }

    /// Reconcile a successful delete: every element with the id is removed,
    /// relative order of the rest preserved.
    pub fn apply_deleted(&mut self, id: &R::Id) {
        self.items.retain(|e| R::id(e) != id);
    }

    /// Clear the stored error without any network call.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Restore all fields to their initial empty values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<R: Resource> Default for ResourceState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            current: self.current.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            pagination: self.pagination,
        }
    }
}

fn derived_page_count(total: u64, limit: u32) -> u32 {
    if total == 0 || limit == 0 {
        return 0;
    }
    total.div_ceil(limit as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageQuery;

    // Minimal resource for exercising the reconciliation rules.
    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
        }
    }

    struct Items;

    impl Resource for Items {
        type Entity = Item;
        type Id = String;
        type Create = ();
        type Update = ();
        type Query = PageQuery;

        const NAME: &'static str = "item";

        fn id(entity: &Item) -> &String {
            &entity.id
        }
    }

    fn seeded(ids: &[&str]) -> ResourceState<Items> {
        let mut state = ResourceState::new();
        state.items = ids.iter().map(|id| item(id, "seed")).collect();
        state
    }

    #[test]
    fn begin_clears_error_and_sets_loading() {
        let mut state = ResourceState::<Items>::new();
        state.fail("old failure");

        state.begin();
        assert!(state.error.is_none());
        assert!(state.is_loading);

        state.settle();
        assert!(!state.is_loading);
    }

    #[test]
    fn list_replaces_items_and_pagination() {
        let mut state = seeded(&["stale-1", "stale-2"]);

        let response = ListResponse {
            data: vec![item("a", "A"), item("b", "B"), item("c", "C")],
            page: Some(2),
            limit: Some(5),
            total: Some(13),
            total_pages: Some(3),
        };
        state.apply_list(response, &PageQuery::new(2, 5));

        assert_eq!(
            state.items.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            state.pagination,
            Pagination {
                page: 2,
                limit: 5,
                total: 13,
                total_pages: 3
            }
        );
    }

    #[test]
    fn list_falls_back_to_query_then_defaults() {
        let mut state = ResourceState::<Items>::new();

        // Response omits everything; query supplies page/limit
        state.apply_list(ListResponse::of(vec![item("a", "A")]), &PageQuery::new(4, 20));
        assert_eq!(state.pagination.page, 4);
        assert_eq!(state.pagination.limit, 20);
        assert_eq!(state.pagination.total, 1);
        assert_eq!(state.pagination.total_pages, 1);

        // Neither response nor query supplies anything
        state.apply_list(ListResponse::of(Vec::new()), &PageQuery::default());
        assert_eq!(state.pagination.page, DEFAULT_PAGE);
        assert_eq!(state.pagination.limit, DEFAULT_LIMIT);
        assert_eq!(state.pagination.total, 0);
        assert_eq!(state.pagination.total_pages, 0);
    }

    #[test]
    fn create_prepends() {
        let mut state = seeded(&["old"]);

        state.apply_created(item("new-1", "First"));
        state.apply_created(item("new-2", "Second"));

        assert_eq!(
            state.items.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["new-2", "new-1", "old"]
        );
    }

    #[test]
    fn update_replaces_in_place() {
        let mut state = seeded(&["c1", "c2", "c3"]);

        state.apply_updated(&"c2".to_string(), item("c2", "renamed"));

        assert_eq!(state.items[1], item("c2", "renamed"));
        assert_eq!(state.items[0].name, "seed");
        assert_eq!(state.items[2].name, "seed");
        assert_eq!(state.current, Some(item("c2", "renamed")));
    }

    #[test]
    fn update_of_absent_id_only_sets_current() {
        let mut state = seeded(&["c1"]);

        state.apply_updated(&"elsewhere".to_string(), item("elsewhere", "filtered out"));

        assert_eq!(state.items, vec![item("c1", "seed")]);
        assert_eq!(state.current, Some(item("elsewhere", "filtered out")));
    }

    #[test]
    fn update_keys_on_requested_id_not_returned_id() {
        // A server may hand back an entity under a different id (e.g. a
        // merge of duplicates). The element the update was issued for must
        // still be replaced, not left to linger.
        let mut state = seeded(&["c1", "c2"]);

        state.apply_updated(&"c2".to_string(), item("c2-merged", "merged"));

        assert_eq!(
            state.items,
            vec![item("c1", "seed"), item("c2-merged", "merged")]
        );
        assert_eq!(state.current, Some(item("c2-merged", "merged")));
    }

    #[test]
    fn delete_removes_and_preserves_order() {
        let mut state = seeded(&["c1", "c2", "c3"]);

        state.apply_deleted(&"c2".to_string());

        assert_eq!(
            state.items.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["c1", "c3"]
        );
    }

    #[test]
    fn delete_of_absent_id_is_noop() {
        let mut state = seeded(&["c1"]);
        state.apply_deleted(&"ghost".to_string());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn fetched_does_not_touch_items() {
        let mut state = seeded(&["c1"]);
        state.apply_fetched(item("c9", "detail"));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.current, Some(item("c9", "detail")));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = seeded(&["c1"]);
        state.current = Some(item("c1", "seed"));
        state.fail("boom");
        state.pagination.total = 42;

        state.reset();

        assert!(state.items.is_empty());
        assert!(state.current.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.pagination, Pagination::default());
    }

    #[test]
    fn derived_page_count_rounds_up() {
        assert_eq!(derived_page_count(13, 5), 3);
        assert_eq!(derived_page_count(10, 5), 2);
        assert_eq!(derived_page_count(1, 5), 1);
        assert_eq!(derived_page_count(0, 5), 0);
        assert_eq!(derived_page_count(5, 0), 0);
    }
}
