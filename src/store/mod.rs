//! # Resource Stores
//!
//! One capability set, two backends.
//!
//! [`ResourceStore`] is the abstract interface over a persisted collection
//! of resources: `{create, get, list, update, delete}`, parameterized by
//! the backend's identifier type. [`PgResourceStore`] keeps resources as
//! rows in PostgreSQL with integer primary keys; [`MongoResourceStore`]
//! keeps them as MongoDB documents with ObjectId identifiers.
//!
//! Each HTTP route group is constructed with its concrete adapter passed
//! in directly (no dynamic dispatch, no ambient lookup). The two backends
//! hold entirely independent data; an id from one is never valid in the
//! other.

pub mod error;
pub mod mongo;
pub mod postgres;

pub use error::{StoreError, StoreResult};
pub use mongo::MongoResourceStore;
pub use postgres::PgResourceStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Resource, ResourceBody};

/// Abstract CRUD capability over a collection of resources.
///
/// Implementations own identifier assignment: `create` returns the full
/// resource including the backend-assigned id. Zero matching records on
/// `get`, `update`, or `delete` is a typed [`StoreError::NotFound`], not a
/// driver error. Every operation is a single round trip; none retries.
#[async_trait]
pub trait ResourceStore: Clone + Send + Sync + 'static {
    /// Backend-specific identifier type.
    type Id: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    /// Returns all resources in storage order; empty if none exist.
    async fn list(&self) -> StoreResult<Vec<Resource<Self::Id>>>;

    /// Returns the resource with the given id.
    async fn get(&self, id: &Self::Id) -> StoreResult<Resource<Self::Id>>;

    /// Persists a new resource; the backend assigns the id.
    async fn create(&self, body: ResourceBody) -> StoreResult<Resource<Self::Id>>;

    /// Fully replaces name and description for the given id.
    async fn update(&self, id: &Self::Id, body: ResourceBody) -> StoreResult<Resource<Self::Id>>;

    /// Removes the resource with the given id.
    async fn delete(&self, id: &Self::Id) -> StoreResult<()>;
}
