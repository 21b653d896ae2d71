use crate::application::LibraryApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、シェル側で検出するエラーをHTTPレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    /// アプリケーション層のエラー
    Application(LibraryApplicationError),
    /// 入力値の検証エラー（コアには渡さない）
    Validation(String),
    /// 返却対象の書籍が貸出中ではない
    AlreadyAvailable(String),
    /// 図書館の状態を保持するロックが壊れている
    LibraryUnavailable,
}

impl From<LibraryApplicationError> for ApiError {
    fn from(err: LibraryApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 入力値の不備
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),

            // 404 Not Found - リクエストされた書籍が存在しない
            ApiError::Application(err @ LibraryApplicationError::BookNotFound(_)) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", err.to_string())
            }

            // 409 Conflict - 現在の状態と両立しない
            ApiError::Application(err @ LibraryApplicationError::DuplicateTitle(_)) => {
                (StatusCode::CONFLICT, "DUPLICATE_TITLE", err.to_string())
            }
            ApiError::AlreadyAvailable(title) => (
                StatusCode::CONFLICT,
                "ALREADY_AVAILABLE",
                format!("Book '{}' is not on loan", title),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::LibraryUnavailable => {
                tracing::error!("Library state lock is poisoned");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LIBRARY_UNAVAILABLE",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
