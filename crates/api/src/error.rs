//! Error to response mapping.
//!
//! Handlers fail with `AppError`. HTML endpoints answer with a short
//! `text/plain` body, the JSON mirror with `{ "error", "message" }`.
//! Server-side failures are logged here and never echoed to the client.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use caixa_core::LedgerError;
use caixa_shared::AppError;
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

/// Maps a validation failure to an application error.
pub fn from_ledger(err: &LedgerError) -> AppError {
    AppError::Validation(err.to_string())
}

/// Maps a store failure to an application error.
pub fn from_db(err: &DbErr) -> AppError {
    AppError::Database(err.to_string())
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_server_error(err: &AppError) {
    if !err.is_client_error() {
        error!(error = %err, code = err.error_code(), "Request failed");
    }
}

// ============================================================================
// Plain text (HTML surface)
// ============================================================================

/// Error rendered as `text/plain` for the form endpoints.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for PageError {
    fn from(err: LedgerError) -> Self {
        Self(from_ledger(&err))
    }
}

impl From<DbErr> for PageError {
    fn from(err: DbErr) -> Self {
        Self(from_db(&err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        log_server_error(&self.0);
        (
            status_of(&self.0),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.public_message(),
        )
            .into_response()
    }
}

// ============================================================================
// JSON (API mirror)
// ============================================================================

/// Error rendered as a JSON body for the `/api/v1` endpoints.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(from_ledger(&err))
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(from_db(&err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log_server_error(&self.0);
        (
            status_of(&self.0),
            Json(json!({
                "error": self.0.error_code().to_lowercase(),
                "message": self.0.public_message()
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_plain_400() {
        let response = PageError::from(LedgerError::InvalidAmount("abc".into())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "Invalid amount: \"abc\"");
    }

    #[tokio::test]
    async fn test_store_error_hides_cause() {
        let response =
            PageError::from(DbErr::Custom("connection refused".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(!body.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_json_error_body() {
        let response = ApiError::from(AppError::NotFound("Transaction not found".into()))
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Transaction not found");
    }
}
