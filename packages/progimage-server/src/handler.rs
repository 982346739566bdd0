use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;

use crate::AppState;
use progimage_core::{
    ImageRequest, IngestResponse, MediaError, StorageError, TransformError,
};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// POST /v1/img
pub async fn upload(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IngestResponse>, AppError> {
    let request = ImageRequest::from_json(&body)?;
    tracing::info!(kind = %request.kind, size = request.data.len(), "ingesting image");

    let id = progimage_core::ingest(state.store.as_ref(), &request).await?;
    tracing::info!(id = %id, "image stored");

    Ok(Json(IngestResponse { id }))
}

/// GET /v1/img/{filename}
pub async fn fetch(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let served =
        progimage_core::serve(state.store.as_ref(), state.registry, &filename, &query).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, served.content_type.to_string()),
            (header::CONTENT_DISPOSITION, served.content_disposition()),
        ],
        served.body,
    )
        .into_response())
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Validation(msg) => {
                tracing::warn!(error = %msg, "validation error");
                AppError::BadRequest(msg)
            }
            MediaError::Storage(storage_err) => storage_err.into(),
            MediaError::Transform(transform_err) => transform_err.into(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { key } => {
                tracing::warn!(key = %key, "image not found");
                AppError::NotFound(key)
            }
            StorageError::Internal(msg) => {
                tracing::error!(error = %msg, "storage error");
                AppError::Internal(msg)
            }
        }
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::InvalidParams(msg) => {
                tracing::warn!(error = %msg, "invalid filter parameters");
                AppError::BadRequest(msg)
            }
            TransformError::Decode(msg) => {
                tracing::warn!(error = %msg, "invalid or unsupported image");
                AppError::BadRequest(format!("Invalid or unsupported image: {msg}"))
            }
            TransformError::ProcessingFailed(msg) => {
                tracing::error!(error = %msg, "image processing failed");
                AppError::Internal(msg)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
