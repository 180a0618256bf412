//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{ChatRepository, UserRepository},
    usecase::{CreateChatUseCase, DeleteChatUseCase, GetChatUseCase},
};

/// Shared application state
pub struct AppState {
    /// User store
    pub users: Arc<dyn UserRepository>,
    /// Chat store
    pub chats: Arc<dyn ChatRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, chats: Arc<dyn ChatRepository>) -> Self {
        Self { users, chats }
    }

    pub fn create_chat_usecase(&self) -> CreateChatUseCase {
        CreateChatUseCase::new(self.users.clone(), self.chats.clone())
    }

    pub fn delete_chat_usecase(&self) -> DeleteChatUseCase {
        DeleteChatUseCase::new(self.chats.clone())
    }

    pub fn get_chat_usecase(&self) -> GetChatUseCase {
        GetChatUseCase::new(self.chats.clone())
    }
}
