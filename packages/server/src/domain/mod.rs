//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Chat, NewChat, User};
pub use error::ValueObjectError;
pub use repository::{ChatRepository, RepositoryError, UserRepository};
pub use value_object::{ChatId, ChatName, Timestamp, UserId, UserName};
