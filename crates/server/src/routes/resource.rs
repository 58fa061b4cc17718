use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use service::{CrudRepository, CrudService};
use tracing::{error, info, warn};

use crate::errors::JsonApiError;

/// Per-resource handler state: the service plus the names used in log lines.
pub struct ResourceState<R: CrudRepository> {
    svc: Arc<CrudService<R>>,
    collection: &'static str,
}

impl<R: CrudRepository> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self { svc: Arc::clone(&self.svc), collection: self.collection }
    }
}

/// Emit the single outcome event for a handled request.
fn log_outcome<T>(verb: &str, operation: &str, result: &Result<T, JsonApiError>) {
    match result {
        Ok(_) => info!(verb, operation, outcome = "success", "request handled"),
        Err(e) if e.status.is_server_error() => {
            error!(verb, operation, outcome = "error", status = e.status.as_u16(), err = %e.message, "request failed")
        }
        Err(e) => warn!(verb, operation, outcome = "error", status = e.status.as_u16(), err = %e.message, "request failed"),
    }
}

/// An id segment that cannot even be extracted names no record.
fn path_id<R: CrudRepository>(id: Result<Path<String>, PathRejection>) -> Result<String, JsonApiError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| JsonApiError::not_found(format!("{} not found: {}", R::RESOURCE, rejection.body_text())))
}

async fn list<R>(State(st): State<ResourceState<R>>) -> Result<Json<Vec<R::Record>>, JsonApiError>
where
    R: CrudRepository + 'static,
{
    let res = st.svc.list().await.map(Json).map_err(JsonApiError::from);
    log_outcome("GET", &format!("get{}", st.collection), &res);
    res
}

async fn get_one<R>(
    State(st): State<ResourceState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<R::Record>, JsonApiError>
where
    R: CrudRepository + 'static,
{
    let res = match path_id::<R>(id) {
        Ok(id) => st.svc.get(&id).await.map(Json).map_err(JsonApiError::from),
        Err(e) => Err(e),
    };
    log_outcome("GET", &format!("get{}ById", R::RESOURCE), &res);
    res
}

async fn create<R>(
    State(st): State<ResourceState<R>>,
    payload: Result<Json<R::NewRecord>, JsonRejection>,
) -> Result<Json<R::Record>, JsonApiError>
where
    R: CrudRepository + 'static,
    R::NewRecord: DeserializeOwned,
{
    let res = match payload {
        Ok(Json(input)) => st.svc.create(input).await.map(Json).map_err(JsonApiError::from),
        Err(rejection) => Err(JsonApiError::bad_request(format!(
            "there is no {} to create: {}",
            R::RESOURCE,
            rejection.body_text()
        ))),
    };
    log_outcome("POST", &format!("create{}", R::RESOURCE), &res);
    res
}

async fn update<R>(
    State(st): State<ResourceState<R>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Result<Json<R::Record>, JsonApiError>
where
    R: CrudRepository + 'static,
    R::Patch: DeserializeOwned,
{
    let res = match (path_id::<R>(id), payload) {
        (Err(e), _) => Err(e),
        (Ok(id), Ok(Json(patch))) => st.svc.update(&id, patch).await.map(Json).map_err(JsonApiError::from),
        (Ok(_), Err(rejection)) => Err(JsonApiError::bad_request(format!(
            "invalid {} update: {}",
            R::RESOURCE,
            rejection.body_text()
        ))),
    };
    log_outcome("PUT", &format!("update{}", R::RESOURCE), &res);
    res
}

async fn delete_one<R>(
    State(st): State<ResourceState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, JsonApiError>
where
    R: CrudRepository + 'static,
{
    let res = match path_id::<R>(id) {
        Ok(id) => st.svc.delete(&id).await.map(|_| StatusCode::OK).map_err(JsonApiError::from),
        Err(e) => Err(e),
    };
    log_outcome("DELETE", &format!("delete{}", R::RESOURCE), &res);
    res
}

/// Mount list/get/create/update/delete for one collection under `/{collection}`.
pub fn resource_router<R>(collection: &'static str, svc: Arc<CrudService<R>>) -> Router
where
    R: CrudRepository + 'static,
    R::Record: Serialize,
    R::NewRecord: DeserializeOwned,
    R::Patch: DeserializeOwned,
{
    let state = ResourceState { svc, collection };
    Router::new()
        .route(&format!("/{collection}"), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{collection}/:id"),
            get(get_one::<R>).put(update::<R>).delete(delete_one::<R>),
        )
        .with_state(state)
}
