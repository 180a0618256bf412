//! HTTP API request/response DTOs for the chat application.

use parlor_shared::time::timestamp_to_jst_rfc3339;
use serde::{Deserialize, Serialize};

use crate::domain::Chat;

/// Request body for `POST /api/Chat/CreateChat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatDto {
    pub user_id: u64,
    pub chat_name: String,
}

/// Request body for `POST /api/Chat/DeleteChat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChatDto {
    pub user_id: u64,
    pub chat_id: u64,
}

/// Chat representation returned by create and get endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub id: u64,
    pub name: String,
    pub creator_id: u64,
    pub created_at: String, // ISO 8601
}

impl From<Chat> for ChatDto {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id.value(),
            name: chat.name.into_string(),
            creator_id: chat.creator_id.value(),
            created_at: timestamp_to_jst_rfc3339(chat.created_at.value()),
        }
    }
}

/// Error body returned with every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
    pub message: String,
}
