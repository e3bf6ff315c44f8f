//! A scripted client for tests.
//!
//! [`MockResourceClient`] replays queued [`ScriptedResponse`]s in order, one
//! per call, and records which operations were invoked. It backs this crate's
//! own test suite and is exported for consumers testing their presentation
//! code against a store.

use crate::{
    client::{ListResponse, ResourceClient},
    error::{ClientError, Result},
    resource::Resource,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// What the next client call should return.
pub enum ScriptedResponse<R: Resource> {
    /// Succeed a `list` call with this response.
    List(ListResponse<R::Entity>),
    /// Succeed a `get`, `create`, or `update` call with this entity.
    Entity(R::Entity),
    /// Succeed a `delete` call.
    Deleted,
    /// Fail the call with this message.
    Failure(String),
}

/// A [`ResourceClient`] that replays scripted responses in FIFO order.
///
/// A call with no scripted response left, or whose scripted response does not
/// match the operation (e.g. a `list` call finding an `Entity` script), fails
/// with a descriptive message rather than panicking.
pub struct MockResourceClient<R: Resource> {
    responses: Mutex<VecDeque<ScriptedResponse<R>>>,
    calls: Mutex<Vec<String>>,
}

impl<R: Resource> MockResourceClient<R> {
    /// Create a client with an empty script.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue the response for the next unscripted call.
    pub fn push(&self, response: ScriptedResponse<R>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Operations invoked so far, in order (e.g. `["list", "create"]`).
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, operation: &str) -> Result<ScriptedResponse<R>> {
        self.calls.lock().unwrap().push(operation.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::new(format!("no scripted response for {operation}")))
    }
}

impl<R: Resource> Default for MockResourceClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceClient<R> for MockResourceClient<R> {
    async fn list(&self, _query: &R::Query) -> Result<ListResponse<R::Entity>> {
        match self.next("list")? {
            ScriptedResponse::List(response) => Ok(response),
            ScriptedResponse::Failure(message) => Err(ClientError::new(message)),
            other => Err(mismatch("list", &other)),
        }
    }

    async fn get(&self, _id: &R::Id) -> Result<R::Entity> {
        match self.next("get")? {
            ScriptedResponse::Entity(entity) => Ok(entity),
            ScriptedResponse::Failure(message) => Err(ClientError::new(message)),
            other => Err(mismatch("get", &other)),
        }
    }

    async fn create(&self, _payload: &R::Create) -> Result<R::Entity> {
        match self.next("create")? {
            ScriptedResponse::Entity(entity) => Ok(entity),
            ScriptedResponse::Failure(message) => Err(ClientError::new(message)),
            other => Err(mismatch("create", &other)),
        }
    }

    async fn update(&self, _id: &R::Id, _payload: &R::Update) -> Result<R::Entity> {
        match self.next("update")? {
            ScriptedResponse::Entity(entity) => Ok(entity),
            ScriptedResponse::Failure(message) => Err(ClientError::new(message)),
            other => Err(mismatch("update", &other)),
        }
    }

    async fn delete(&self, _id: &R::Id) -> Result<()> {
        match self.next("delete")? {
            ScriptedResponse::Deleted => Ok(()),
            ScriptedResponse::Failure(message) => Err(ClientError::new(message)),
            other => Err(mismatch("delete", &other)),
        }
    }
}

fn mismatch<R: Resource>(operation: &str, got: &ScriptedResponse<R>) -> ClientError {
    let kind = match got {
        ScriptedResponse::List(_) => "List",
        ScriptedResponse::Entity(_) => "Entity",
        ScriptedResponse::Deleted => "Deleted",
        ScriptedResponse::Failure(_) => "Failure",
    };
    ClientError::new(format!("scripted {kind} response does not fit {operation}"))
}
