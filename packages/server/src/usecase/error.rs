//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{ChatId, RepositoryError, UserId};

/// Outcomes of a rejected chat operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The requesting user does not exist
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The referenced chat (by id or name) does not exist
    #[error("Chat not found")]
    ChatNotFound,

    /// Another chat already uses this name
    #[error("Chat already exists: {0}")]
    ChatAlreadyExists(String),

    /// The requesting user is not the creator of the chat
    #[error("User {user_id} is not allowed to delete chat {chat_id}")]
    NotAuthorized { user_id: UserId, chat_id: ChatId },

    /// Unclassified storage fault
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for ChatError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ChatNameConflict(name) => ChatError::ChatAlreadyExists(name),
            RepositoryError::ChatNotFound(_) => ChatError::ChatNotFound,
            other => {
                tracing::error!("Repository error: {}", other);
                ChatError::Storage(other.to_string())
            }
        }
    }
}
