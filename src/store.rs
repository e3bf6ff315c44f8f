//! The resource store - async CRUD facade over one remote collection.
//!
//! Each operation makes exactly one client call, reconciles the pure state
//! from the result, and reports the outcome three ways: the return value,
//! the stored error, and a notification. Failures never propagate as `Err`
//! out of the store; callers check the return value.

use crate::{
    client::ResourceClient,
    error::ClientError,
    notify::{Notification, Notifier, NullNotifier},
    pagination::Pagination,
    resource::Resource,
    state::ResourceState,
};
use tokio::sync::broadcast;

/// Published after every state change, so observers can re-render without
/// polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// `items` was replaced from a list response
    Listed,
    /// `current` was set from a get-by-id response
    Fetched,
    /// A created entity was prepended to `items`
    Created,
    /// An entity in `items` was replaced
    Updated,
    /// An entity was removed from `items`
    Deleted,
    /// An operation failed; only `error` changed
    Failed,
    /// The stored error was cleared
    ErrorCleared,
    /// The store was reset to its initial state
    Reset,
}

/// A client-side cache and mutation facade for one resource type.
///
/// One store instance exists per resource type for the lifetime of the
/// application. Operations take `&mut self`, so individual state mutations
/// are never torn; when callers interleave operations on a shared store, the
/// last response to resolve wins. That weak ordering is deliberate: the UI
/// is single-user and human-paced, and a failed or stale view is corrected
/// by the next list call.
pub struct ResourceStore<R: Resource, C: ResourceClient<R>> {
    client: C,
    state: ResourceState<R>,
    notifier: Box<dyn Notifier>,
    events: broadcast::Sender<StoreEvent>,
}

impl<R: Resource, C: ResourceClient<R>> ResourceStore<R, C> {
    /// Create a store that discards notifications.
    pub fn new(client: C) -> Self {
        Self::with_notifier(client, NullNotifier)
    }

    /// Create a store delivering notifications to the given sink.
    pub fn with_notifier(client: C, notifier: impl Notifier + 'static) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            client,
            state: ResourceState::new(),
            notifier: Box::new(notifier),
            events,
        }
    }

    /// Cached entities, in reconciled order.
    pub fn items(&self) -> &[R::Entity] {
        &self.state.items
    }

    /// The most recently fetched or updated entity.
    pub fn current(&self) -> Option<&R::Entity> {
        self.state.current.as_ref()
    }

    /// True while an operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Message of the most recent failure, if not yet cleared.
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Pagination window of the most recent list call.
    pub fn pagination(&self) -> Pagination {
        self.state.pagination
    }

    /// Subscribe to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Fetch a page of entities and replace the cached list.
    ///
    /// On failure the prior `items` and `pagination` are kept and the error
    /// is recorded and notified. Not retried automatically.
    pub async fn list(&mut self, query: &R::Query) {
        self.state.begin();
        match self.client.list(query).await {
            Ok(response) => {
                tracing::debug!(resource = R::NAME, count = response.data.len(), "listed");
                self.state.apply_list(response, query);
                self.publish(StoreEvent::Listed);
            }
            Err(err) => self.fail("list", err),
        }
        self.state.settle();
    }

    /// Fetch one entity by id into `current`. The cached list is untouched.
    pub async fn get_by_id(&mut self, id: &R::Id) -> Option<R::Entity> {
        self.state.begin();
        let fetched = match self.client.get(id).await {
            Ok(entity) => {
                tracing::debug!(resource = R::NAME, id = %id, "fetched");
                self.state.apply_fetched(entity.clone());
                self.publish(StoreEvent::Fetched);
                Some(entity)
            }
            Err(err) => {
                self.fail("get", err);
                None
            }
        };
        self.state.settle();
        fetched
    }

    /// Create an entity. On success it is prepended to the cached list.
    pub async fn create(&mut self, payload: &R::Create) -> Option<R::Entity> {
        self.state.begin();
        let created = match self.client.create(payload).await {
            Ok(entity) => {
                tracing::debug!(resource = R::NAME, id = %R::id(&entity), "created");
                self.state.apply_created(entity.clone());
                self.notifier
                    .notify(Notification::success(format!("{} created", R::NAME)));
                self.publish(StoreEvent::Created);
                Some(entity)
            }
            Err(err) => {
                self.fail("create", err);
                None
            }
        };
        self.state.settle();
        created
    }

    /// Update an entity. On success the element with a matching id is
    /// replaced in place by the server's representation and `current` is set.
    /// When the id is absent from the cached list (fetched under another
    /// filter), only `current` changes.
    pub async fn update(&mut self, id: &R::Id, payload: &R::Update) -> Option<R::Entity> {
        self.state.begin();
        let updated = match self.client.update(id, payload).await {
            Ok(entity) => {
                tracing::debug!(resource = R::NAME, id = %id, "updated");
                self.state.apply_updated(id, entity.clone());
                self.notifier
                    .notify(Notification::success(format!("{} updated", R::NAME)));
                self.publish(StoreEvent::Updated);
                Some(entity)
            }
            Err(err) => {
                self.fail("update", err);
                None
            }
        };
        self.state.settle();
        updated
    }

    /// Delete an entity. On success every cached element with the id is
    /// removed; relative order of the rest is preserved.
    pub async fn delete(&mut self, id: &R::Id) -> bool {
        self.state.begin();
        let deleted = match self.client.delete(id).await {
            Ok(()) => {
                tracing::debug!(resource = R::NAME, id = %id, "deleted");
                self.state.apply_deleted(id);
                self.notifier
                    .notify(Notification::success(format!("{} deleted", R::NAME)));
                self.publish(StoreEvent::Deleted);
                true
            }
            Err(err) => {
                self.fail("delete", err);
                false
            }
        };
        self.state.settle();
        deleted
    }

    /// Clear the stored error without any network call.
    pub fn clear_error(&mut self) {
        self.state.clear_error();
        self.publish(StoreEvent::ErrorCleared);
    }

    /// Restore the store to its initial empty state. Used when navigating
    /// away from a feature area so stale data does not leak into another
    /// view.
    pub fn reset(&mut self) {
        self.state.reset();
        self.publish(StoreEvent::Reset);
    }

    fn fail(&mut self, operation: &'static str, err: ClientError) {
        tracing::warn!(resource = R::NAME, operation, error = %err, "operation failed");
        self.state.fail(err.message.clone());
        self.notifier.notify(Notification::failure(err.message));
        self.publish(StoreEvent::Failed);
    }

    fn publish(&self, event: StoreEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }
}
