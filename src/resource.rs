//! Resource descriptors.
//!
//! A [`Resource`] ties together everything the store needs to know about one
//! entity type. Associated types keep each store fully typed: a store for
//! classes only accepts class payloads, and the compiler enforces it.

use std::fmt::{Debug, Display};

/// Describes one remote CRUD collection.
///
/// Implementors are zero-sized marker types; the data lives in the associated
/// types. See the [`school`](crate::school) module for the platform's
/// bindings.
pub trait Resource: Send + Sync + 'static {
    /// The entity as returned by the server.
    type Entity: Debug + Clone + Send + Sync + 'static;

    /// The entity's unique identifier.
    type Id: Eq + Clone + Debug + Display + Send + Sync + 'static;

    /// Payload for creating a new entity.
    type Create: Send + Sync;

    /// Payload for updating an existing entity.
    type Update: Send + Sync;

    /// Query parameters for listing entities.
    type Query: crate::pagination::ListQuery + Send + Sync;

    /// Human-readable singular name, used in notifications and logs
    /// (e.g. "class", "student").
    const NAME: &'static str;

    /// Extract the identifier from an entity.
    fn id(entity: &Self::Entity) -> &Self::Id;
}
