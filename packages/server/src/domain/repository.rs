//! Repository traits (Persistence Store ports).
//!
//! The domain defines these traits; infrastructure implements them.
//! Implementations own all concurrency control: the uniqueness check on
//! chat names must happen atomically with the insert.

use async_trait::async_trait;
use thiserror::Error;

use super::{
    entity::{Chat, NewChat, User},
    value_object::{ChatId, ChatName, UserId},
};

/// Errors surfaced by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A chat with the same name is already stored
    #[error("Chat name is already taken: {0}")]
    ChatNameConflict(String),

    /// A chat with the same id is already stored
    #[error("Chat id is already taken: {0}")]
    ChatIdConflict(ChatId),

    /// A user with the same id is already stored
    #[error("User id is already taken: {0}")]
    UserIdConflict(UserId),

    /// The chat to delete does not exist
    #[error("Chat not found: {0}")]
    ChatNotFound(ChatId),

    /// Any other storage fault (connectivity, corruption, ...)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// User store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Store a user. Used for seeding.
    async fn insert(&self, user: User) -> Result<(), RepositoryError>;
}

/// Chat store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Look up a chat by id.
    async fn find_by_id(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError>;

    /// Look up a chat by exact name.
    async fn find_by_name(&self, name: &ChatName) -> Result<Option<Chat>, RepositoryError>;

    /// Allocate an id and store the chat.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ChatNameConflict` if the name is taken.
    async fn insert(&self, chat: NewChat) -> Result<Chat, RepositoryError>;

    /// Remove a chat.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ChatNotFound` if no chat has this id.
    async fn delete(&self, id: ChatId) -> Result<(), RepositoryError>;
}
