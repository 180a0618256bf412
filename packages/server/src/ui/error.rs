//! Mapping of domain outcomes to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::ValueObjectError, infrastructure::dto::http::ErrorDto, usecase::ChatError,
};

/// Error returned by HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// The request body or path held an invalid value
    InvalidInput(ValueObjectError),
    /// The chat operation was rejected
    Chat(ChatError),
}

impl From<ValueObjectError> for ApiError {
    fn from(err: ValueObjectError) -> Self {
        ApiError::InvalidInput(err)
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        ApiError::Chat(err)
    }
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::Chat(ChatError::UserNotFound(_)) => (StatusCode::NOT_FOUND, "user_not_found"),
            ApiError::Chat(ChatError::ChatNotFound) => (StatusCode::NOT_FOUND, "chat_not_found"),
            ApiError::Chat(ChatError::ChatAlreadyExists(_)) => {
                (StatusCode::BAD_REQUEST, "chat_already_exists")
            }
            ApiError::Chat(ChatError::NotAuthorized { .. }) => {
                (StatusCode::FORBIDDEN, "not_authorized")
            }
            ApiError::Chat(ChatError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let message = match &self {
            ApiError::InvalidInput(err) => err.to_string(),
            // Storage details stay in the server log.
            ApiError::Chat(ChatError::Storage(_)) => "Internal storage error".to_string(),
            ApiError::Chat(err) => err.to_string(),
        };

        let body = Json(ErrorDto {
            error: kind.to_string(),
            message,
        });
        (status, body).into_response()
    }
}
