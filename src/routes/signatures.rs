//! Signature endpoints.
//!
//! Each handler makes exactly one store call. A `None` from the store is
//! answered with 404 and the JSON string `"not found"`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::run_blocking;
use crate::app::AppState;
use crate::error::GuestbookError;
use crate::signature::{NewSignature, Signature, SignaturePatch};

pub const NOT_FOUND_BODY: &str = "not found";

fn found_or_not_found(signature: Option<Signature>) -> Response {
    match signature {
        Some(signature) => (StatusCode::OK, Json(signature)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(NOT_FOUND_BODY)).into_response(),
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_signatures(
    State(state): State<AppState>,
) -> Result<Json<Vec<Signature>>, GuestbookError> {
    let store = state.store.clone();
    let signatures = run_blocking(move || store.get_all()).await?;

    Ok(Json(signatures))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_signature(
    State(state): State<AppState>,
    Json(payload): Json<NewSignature>,
) -> Result<Response, GuestbookError> {
    let store = state.store.clone();
    let created = run_blocking(move || store.create(payload)).await?;
    tracing::info!(id = %created.id, "Signature created");

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[tracing::instrument(skip(state))]
pub async fn get_signature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, GuestbookError> {
    let store = state.store.clone();
    let signature = run_blocking(move || store.get_by_id(&id)).await?;

    Ok(found_or_not_found(signature))
}

#[tracing::instrument(skip(state, patch))]
pub async fn update_signature(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<SignaturePatch>,
) -> Result<Response, GuestbookError> {
    let store = state.store.clone();
    let signature = run_blocking(move || store.update_by_id(&id, patch)).await?;

    Ok(found_or_not_found(signature))
}

#[tracing::instrument(skip(state))]
pub async fn delete_signature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, GuestbookError> {
    let store = state.store.clone();
    let signature = run_blocking(move || store.delete_by_id(&id)).await?;

    Ok(found_or_not_found(signature))
}
