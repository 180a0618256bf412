//! Core domain models for the chat application.

use serde::{Deserialize, Serialize};

use super::value_object::{ChatId, ChatName, Timestamp, UserId, UserName};

/// A known user. Users are seeded externally and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Display name
    pub name: UserName,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }
}

/// A chat that has not been stored yet.
///
/// The chat store allocates the identifier when it inserts the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    pub name: ChatName,
    pub creator_id: UserId,
    pub created_at: Timestamp,
}

impl NewChat {
    pub fn new(name: ChatName, creator_id: UserId, created_at: Timestamp) -> Self {
        Self {
            name,
            creator_id,
            created_at,
        }
    }

    /// Turn the draft into a stored chat with the allocated identifier.
    pub fn into_chat(self, id: ChatId) -> Chat {
        Chat {
            id,
            name: self.name,
            creator_id: self.creator_id,
            created_at: self.created_at,
        }
    }
}

/// A named chat owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Chat identifier
    pub id: ChatId,
    /// Globally unique chat name
    pub name: ChatName,
    /// The creator; the only user allowed to delete the chat
    pub creator_id: UserId,
    /// Timestamp when the chat was created
    pub created_at: Timestamp,
}

impl Chat {
    /// Whether `user_id` is the creator of this chat.
    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.creator_id == user_id
    }
}
