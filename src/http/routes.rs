//! # Resource Routes
//!
//! One generic route group wiring the five CRUD operations to a store.
//!
//! The relational and document namespaces are structurally identical, so
//! a single set of handlers is instantiated once per backend, each with
//! its concrete adapter injected as router state. The only behavioral
//! difference between the namespaces falls out of the types: the
//! relational store's `i32` id makes path extraction reject non-numeric
//! ids as validation failures, while the document store accepts any
//! string and applies its own ObjectId format check.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::model::{Resource, ResourceBody};
use crate::store::ResourceStore;
use crate::validation::parse_resource_body;

/// Builds the route group for one backend.
///
/// Mounted under a namespace prefix, this serves:
/// `GET /`, `POST /`, `GET /:id`, `PUT /:id`, `DELETE /:id`.
pub fn resource_routes<S: ResourceStore>(store: S) -> Router {
    Router::new()
        .route("/", get(list_handler::<S>).post(create_handler::<S>))
        .route(
            "/:id",
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(store)
}

// ==================
// Extraction Helpers
// ==================

/// Unwraps a path-extracted id, turning extraction failure (a non-numeric
/// id in the relational namespace) into a validation error.
fn checked_id<Id>(id: Result<Path<Id>, PathRejection>) -> ApiResult<Id> {
    let Path(id) = id.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(id)
}

/// Unwraps and shape-checks a request body. Malformed JSON and shape
/// mismatches are both validation failures; the store is never invoked.
fn checked_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<ResourceBody> {
    let Json(value) = body.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(parse_resource_body(&value)?)
}

// ==================
// Handlers
// ==================

async fn list_handler<S: ResourceStore>(
    State(store): State<S>,
) -> ApiResult<Json<Vec<Resource<S::Id>>>> {
    let resources = store.list().await?;
    Ok(Json(resources))
}

async fn get_handler<S: ResourceStore>(
    State(store): State<S>,
    id: Result<Path<S::Id>, PathRejection>,
) -> ApiResult<Json<Resource<S::Id>>> {
    let id = checked_id(id)?;
    let resource = store.get(&id).await?;
    Ok(Json(resource))
}

async fn create_handler<S: ResourceStore>(
    State(store): State<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Resource<S::Id>>)> {
    let body = checked_body(body)?;
    let created = store.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_handler<S: ResourceStore>(
    State(store): State<S>,
    id: Result<Path<S::Id>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Resource<S::Id>>> {
    let id = checked_id(id)?;
    let body = checked_body(body)?;
    let updated = store.update(&id, body).await?;
    Ok(Json(updated))
}

async fn delete_handler<S: ResourceStore>(
    State(store): State<S>,
    id: Result<Path<S::Id>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = checked_id(id)?;
    store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
