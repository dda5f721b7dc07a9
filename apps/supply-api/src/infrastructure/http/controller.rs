//! HTTP controller (driver adapter).
//!
//! Axum-based REST API over the entity stores. Handlers are generic over the
//! entity type; one resource router is instantiated per store. The transport
//! mapping is: List/Get/Insert/Replace/Remove onto GET/POST/PUT/DELETE, with
//! a store miss becoming 404 and a validation failure 400.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::store::{Entity, EntityStore};
use crate::domain::validation::Validate;
use crate::infrastructure::seed::Stores;

use super::error::ApiError;
use super::response::HealthResponse;

/// Create the HTTP router with all endpoints.
#[must_use]
pub fn create_router(stores: Stores) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(resource_routes("/api/headquarters", stores.headquarters))
        .merge(resource_routes("/api/branches", stores.branches))
        .merge(resource_routes("/api/suppliers", stores.suppliers))
        .merge(resource_routes("/api/products", stores.products))
        .merge(resource_routes("/api/orders", stores.orders))
        .merge(resource_routes("/api/order-details", stores.order_details))
        .merge(resource_routes("/api/deliveries", stores.deliveries))
        .merge(resource_routes(
            "/api/order-detail-deliveries",
            stores.order_detail_deliveries,
        ))
}

/// CRUD routes for one entity store.
fn resource_routes<T>(prefix: &str, store: Arc<EntityStore<T>>) -> Router
where
    T: Entity + Validate + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
{
    Router::new()
        .route(prefix, get(list_records::<T>).post(create_record::<T>))
        .route(
            &format!("{prefix}/{{id}}"),
            get(get_record::<T>)
                .put(replace_record::<T>)
                .delete(remove_record::<T>),
        )
        .with_state(store)
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List all records in current insertion order.
async fn list_records<T>(State(store): State<Arc<EntityStore<T>>>) -> Json<Vec<T>>
where
    T: Entity + Serialize,
{
    Json(store.list())
}

/// Get one record by identifier.
async fn get_record<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Path(id): Path<T::Id>,
) -> Result<Json<T>, ApiError>
where
    T: Entity + Serialize,
    T::Id: DeserializeOwned,
{
    Ok(Json(store.get(id)?))
}

/// Insert a fully-formed record.
async fn create_record<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Json(record): Json<T>,
) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: Entity + Validate + Serialize + DeserializeOwned,
{
    record.validate()?;

    tracing::info!(entity = T::KIND, id = %record.id(), "Inserting record");
    Ok((StatusCode::CREATED, Json(store.insert(record))))
}

/// Replace the record with the given identifier.
async fn replace_record<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Path(id): Path<T::Id>,
    Json(record): Json<T>,
) -> Result<Json<T>, ApiError>
where
    T: Entity + Validate + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
{
    record.validate()?;

    tracing::info!(entity = T::KIND, id = %id, "Replacing record");
    Ok(Json(store.replace(id, record)?))
}

/// Remove the record with the given identifier.
async fn remove_record<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Path(id): Path<T::Id>,
) -> Result<StatusCode, ApiError>
where
    T: Entity,
    T::Id: DeserializeOwned,
{
    store.remove(id)?;

    tracing::info!(entity = T::KIND, id = %id, "Removed record");
    Ok(StatusCode::NO_CONTENT)
}
