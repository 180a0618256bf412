//! UseCase: チャット取得処理

use std::sync::Arc;

use crate::domain::{Chat, ChatName, ChatRepository};

use super::error::ChatError;

/// チャット取得のユースケース（名前の完全一致、権限確認なし）
pub struct GetChatUseCase {
    chats: Arc<dyn ChatRepository>,
}

impl GetChatUseCase {
    pub fn new(chats: Arc<dyn ChatRepository>) -> Self {
        Self { chats }
    }

    /// 名前でチャットを取得
    pub async fn execute(&self, name: ChatName) -> Result<Chat, ChatError> {
        self.chats.find_by_name(&name).await?.ok_or_else(|| {
            tracing::debug!("Chat '{}' not found", name);
            ChatError::ChatNotFound
        })
    }
}
