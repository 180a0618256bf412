//! InMemory User Repository 実装
//!
//! ドメイン層が定義する UserRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, User, UserId, UserRepository};

/// インメモリ User Repository 実装
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// 空の InMemoryUserRepository を作成
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// 初期ユーザーを投入した InMemoryUserRepository を作成
    ///
    /// 同じ ID が複数回現れた場合は後のものが優先されます。
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Mutex::new(users),
        }
    }

    /// 登録済みユーザー数
    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::UserIdConflict(user.id));
        }
        users.insert(user.id, user);
        Ok(())
    }
}
