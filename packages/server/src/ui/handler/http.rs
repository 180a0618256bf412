//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{ChatId, ChatName, UserId},
    infrastructure::dto::http::{ChatDto, CreateChatDto, DeleteChatDto},
    ui::{error::ApiError, state::AppState},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a chat owned by the requesting user
pub async fn create_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateChatDto>,
) -> Result<Json<ChatDto>, ApiError> {
    let name = ChatName::try_from(body.chat_name).inspect_err(|err| {
        tracing::warn!("Invalid chat name: {}", err);
    })?;

    let chat = state
        .create_chat_usecase()
        .execute(UserId::new(body.user_id), name)
        .await?;

    Ok(Json(ChatDto::from(chat)))
}

/// Delete a chat; only its creator may do so
pub async fn delete_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DeleteChatDto>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_chat_usecase()
        .execute(UserId::new(body.user_id), ChatId::new(body.chat_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a chat by exact name
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_name): Path<String>,
) -> Result<Json<ChatDto>, ApiError> {
    let name = ChatName::try_from(chat_name)?;
    let chat = state.get_chat_usecase().execute(name).await?;
    Ok(Json(ChatDto::from(chat)))
}
