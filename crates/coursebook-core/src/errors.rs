use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Body returned for every authentication failure, whatever the cause.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Full `anyhow` chain of a server error, attached to the response
/// extensions so request logging can report it without leaking it to the
/// client.
#[derive(Debug, Clone)]
pub struct ErrorReport(pub String);

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    /// Per-field messages, rendered as the `errors` array on client errors.
    pub errors: Vec<String>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            errors: Vec::new(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// 401 with the generic denial message. The concrete reason is only
    /// ever logged by the caller.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(ACCESS_DENIED))
    }

    /// 400 carrying one message per failed rule.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: anyhow!("Validation failed"),
            errors,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.error.to_string();

        let body = if self.status.is_server_error() {
            json!({
                "message": message,
                "error": {}
            })
        } else if self.errors.is_empty() {
            json!({ "message": message })
        } else {
            json!({
                "message": message,
                "errors": self.errors
            })
        };

        let mut response = (self.status, Json(body)).into_response();
        if self.status.is_server_error() {
            response
                .extensions_mut()
                .insert(ErrorReport(format!("{:?}", self.error)));
        }
        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
