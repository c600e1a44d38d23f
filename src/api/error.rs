use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::PlannerError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Planner(#[from] PlannerError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Not found")]
    NotFound,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, field) = match &self {
            ApiError::Planner(err @ PlannerError::InvalidInput { field, .. }) => {
                tracing::warn!("Rejected input: {err}");
                (StatusCode::BAD_REQUEST, err.kind(), Some(field.clone()))
            }
            ApiError::Planner(err @ PlannerError::Computation(_)) => {
                tracing::error!("Computation failed: {err}");
                (StatusCode::UNPROCESSABLE_ENTITY, err.kind(), None)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {msg}");
                (StatusCode::BAD_REQUEST, "InvalidInput", None)
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
        };
        let body = ErrorBody {
            success: false,
            kind,
            field,
            error: self.to_string(),
        };
        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-store"));
        response
    }
}
