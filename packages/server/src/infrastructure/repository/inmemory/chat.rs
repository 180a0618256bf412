//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait の具体的な実装。
//! ID と名前の 2 つの索引を 1 つの Mutex で保護し、
//! 名前の一意性チェックと書き込みをアトミックに行います。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Chat, ChatId, ChatName, ChatRepository, NewChat, RepositoryError};

#[derive(Default)]
struct ChatTable {
    by_id: HashMap<ChatId, Chat>,
    id_by_name: HashMap<ChatName, ChatId>,
    /// Highest id ever allocated or seeded; ids are never reused.
    last_id: u64,
}

impl ChatTable {
    fn put(&mut self, chat: Chat) {
        self.last_id = self.last_id.max(chat.id.value());
        self.id_by_name.insert(chat.name.clone(), chat.id);
        self.by_id.insert(chat.id, chat);
    }
}

/// インメモリ Chat Repository 実装
pub struct InMemoryChatRepository {
    table: Mutex<ChatTable>,
}

impl InMemoryChatRepository {
    /// 空の InMemoryChatRepository を作成
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ChatTable::default()),
        }
    }

    /// 初期チャットを投入した InMemoryChatRepository を作成
    ///
    /// 以降に割り当てられる ID は投入済みの最大 ID より大きくなります。
    ///
    /// # Errors
    ///
    /// ID が重複している場合は `RepositoryError::ChatIdConflict`、
    /// 名前が重複している場合は `RepositoryError::ChatNameConflict`
    pub fn with_chats(chats: impl IntoIterator<Item = Chat>) -> Result<Self, RepositoryError> {
        let mut table = ChatTable::default();
        for chat in chats {
            if table.by_id.contains_key(&chat.id) {
                return Err(RepositoryError::ChatIdConflict(chat.id));
            }
            if table.id_by_name.contains_key(&chat.name) {
                return Err(RepositoryError::ChatNameConflict(chat.name.into_string()));
            }
            table.put(chat);
        }
        Ok(Self {
            table: Mutex::new(table),
        })
    }

    /// 保存されているチャット数
    pub async fn count(&self) -> usize {
        self.table.lock().await.by_id.len()
    }
}

impl Default for InMemoryChatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn find_by_id(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.by_id.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &ChatName) -> Result<Option<Chat>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table
            .id_by_name
            .get(name)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn insert(&self, chat: NewChat) -> Result<Chat, RepositoryError> {
        let mut table = self.table.lock().await;
        if table.id_by_name.contains_key(&chat.name) {
            return Err(RepositoryError::ChatNameConflict(chat.name.into_string()));
        }

        let id = ChatId::new(table.last_id)
            .next()
            .ok_or_else(|| RepositoryError::Storage("Chat id space exhausted".to_string()))?;
        let stored = chat.into_chat(id);
        table.put(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ChatId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        let chat = table
            .by_id
            .remove(&id)
            .ok_or(RepositoryError::ChatNotFound(id))?;
        table.id_by_name.remove(&chat.name);
        Ok(())
    }
}
