//! Error-to-HTTP mapping.
//!
//! Every handler returns [`AppResult`]; the [`IntoResponse`] impl below
//! turns failures into a `{ "error": ..., "code": ... }` JSON body with
//! the matching status. Storage failures reach the client as a sanitized
//! 500 -- internal detail stays in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tourcraft_core::error::CoreError;

/// Failure type shared by all HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain rule was violated or an entity was not visible.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The storage layer failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request itself was unusable.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything that should never happen in a healthy deployment.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

/// Fixed body for failures whose detail must not leak.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl AppError {
    /// Status, machine-readable code, and client-facing message.
    fn rejection(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },
            AppError::Database(err) => database_rejection(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

/// Map a sqlx failure onto the error taxonomy.
///
/// A unique-constraint violation (Postgres 23505 on a `uq_*` constraint)
/// is a conflict the caller can act on; `RowNotFound` is a plain 404;
/// everything else is an opaque storage failure.
fn database_rejection(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    internal()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.rejection();
        (status, axum::Json(ErrorBody { error, code })).into_response()
    }
}
