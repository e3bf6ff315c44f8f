//! # iStudy Store
//!
//! A generic client-side resource store for the iStudy school platform.
//!
//! Every feature area of the platform front-end (academic years, grades,
//! classes, students, schedules, attendance, tuition) talks to the backend
//! through the same convention: fetch a page of entities, mirror it into
//! local state, and reconcile that state after each create/update/delete.
//! This crate factors that convention into one typed abstraction instead of
//! repeating it per entity type.
//!
//! ## Design Principles
//!
//! - **Pure state layer**: [`ResourceState`] holds the cached list and applies
//!   reconciliation rules with no IO. Same inputs, same outputs.
//! - **One seam to the network**: [`ResourceClient`] is the only boundary to
//!   the backend. The store never knows whether it is REST, GraphQL, or a
//!   test double.
//! - **No UI side effects**: the store emits structured [`Notification`]s and
//!   [`StoreEvent`]s; how they are rendered (toast, banner, log line) is the
//!   presentation layer's decision.
//!
//! ## Core Concepts
//!
//! ### Resources
//!
//! A [`Resource`] describes one entity type: the entity itself, its id, the
//! create/update payloads, and the list query. Stores are generic over the
//! resource, so a store for classes cannot be fed a student payload.
//!
//! ### Reconciliation
//!
//! Server responses are the source of truth. After each successful call the
//! cached list is reconciled:
//!
//! - `list` replaces the whole list and the pagination window
//! - `create` prepends the returned entity (newest first)
//! - `update` replaces the matching element in place
//! - `delete` removes the matching element
//!
//! A failed call never touches the cached list; it only records the error
//! message and emits a failure notification. Callers retry by re-invoking.
//!
//! ## Quick Start
//!
//! ```rust
//! use istudy_store::{
//!     mock::{MockResourceClient, ScriptedResponse},
//!     school::{NewStudent, Student, Students},
//!     ResourceStore,
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let client = MockResourceClient::<Students>::new();
//! client.push(ScriptedResponse::Entity(Student {
//!     id: "st_1".into(),
//!     full_name: "Linh Tran".into(),
//!     email: Some("linh@example.com".into()),
//!     parent_phone: None,
//!     class_id: Some("cl_9".into()),
//! }));
//!
//! let mut store = ResourceStore::<Students, _>::new(client);
//! let created = store
//!     .create(&NewStudent {
//!         full_name: "Linh Tran".into(),
//!         email: Some("linh@example.com".into()),
//!         parent_phone: None,
//!         class_id: Some("cl_9".into()),
//!     })
//!     .await;
//!
//! assert!(created.is_some());
//! assert_eq!(store.items().len(), 1);
//! assert!(store.error().is_none());
//! # });
//! ```

pub mod client;
pub mod error;
pub mod mock;
pub mod notify;
pub mod pagination;
pub mod resource;
pub mod school;
pub mod state;
pub mod store;

// Re-export main types at crate root
pub use client::{ListResponse, ResourceClient};
pub use error::ClientError;
pub use notify::{ChannelNotifier, Notification, Notifier, NullNotifier, Outcome};
pub use pagination::{ListQuery, PageQuery, Pagination};
pub use resource::Resource;
pub use state::ResourceState;
pub use store::{ResourceStore, StoreEvent};
