//! The remote boundary.
//!
//! [`ResourceClient`] is the only seam between a store and the backend. The
//! store issues exactly one client call per operation and reconciles its
//! state from the result; the transport behind the trait is opaque.

use crate::{error::Result, resource::Resource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Response payload of a list call.
///
/// Pagination fields are optional because not every endpoint returns them;
/// the store falls back to the query's page/limit and then to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<E> {
    /// The page of entities, in server order.
    #[serde(default = "Vec::new")]
    pub data: Vec<E>,
    /// Page number echoed by the server, if any.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size echoed by the server, if any.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total entities across all pages, if reported.
    #[serde(default)]
    pub total: Option<u64>,
    /// Total page count, if reported.
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<E> ListResponse<E> {
    /// A response carrying only entities, with no pagination fields.
    pub fn of(data: Vec<E>) -> Self {
        Self {
            data,
            page: None,
            limit: None,
            total: None,
            total_pages: None,
        }
    }
}

impl<E> Default for ListResponse<E> {
    fn default() -> Self {
        Self::of(Vec::new())
    }
}

/// Async CRUD access to one remote collection.
///
/// Every method is a single round-trip. Failures carry a human-readable
/// message and nothing else; the store does not inspect them beyond that.
#[async_trait]
pub trait ResourceClient<R: Resource>: Send + Sync {
    /// Fetch a page of entities.
    async fn list(&self, query: &R::Query) -> Result<ListResponse<R::Entity>>;

    /// Fetch a single entity by id.
    async fn get(&self, id: &R::Id) -> Result<R::Entity>;

    /// Create an entity, returning the server's representation.
    async fn create(&self, payload: &R::Create) -> Result<R::Entity>;

    /// Update an entity, returning the server's full representation.
    async fn update(&self, id: &R::Id, payload: &R::Update) -> Result<R::Entity>;

    /// Delete an entity. The response carries no payload.
    async fn delete(&self, id: &R::Id) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::school::Student;

    #[test]
    fn list_response_defaults_missing_fields() {
        // A bare entity array with no pagination at all
        let json = r#"{"data": []}"#;
        let parsed: ListResponse<Student> = serde_json::from_str(json).unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.page, None);
        assert_eq!(parsed.total, None);

        // Entirely empty object still parses
        let parsed: ListResponse<Student> = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn list_response_parses_camel_case_pagination() {
        let json = r#"{"data": [], "page": 2, "limit": 5, "total": 13, "totalPages": 3}"#;
        let parsed: ListResponse<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.page, Some(2));
        assert_eq!(parsed.limit, Some(5));
        assert_eq!(parsed.total, Some(13));
        assert_eq!(parsed.total_pages, Some(3));
    }
}
