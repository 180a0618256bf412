//! UseCase: チャット作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateChatUseCase::execute() メソッド
//! - ユーザー存在確認 → 名前の重複確認 → 保存 の順序
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存ユーザーによる未使用の名前でのチャット作成
//! - 異常系：存在しないユーザー（名前が使用済みでも UserNotFound）
//! - 異常系：名前の重複（事前チェック、保存時の競合の両方）
//! - 異常系：ストレージ障害

use std::sync::Arc;

use parlor_shared::time::get_jst_timestamp;

use crate::domain::{Chat, ChatName, ChatRepository, NewChat, Timestamp, UserId, UserRepository};

use super::error::ChatError;

/// チャット作成のユースケース
pub struct CreateChatUseCase {
    users: Arc<dyn UserRepository>,
    chats: Arc<dyn ChatRepository>,
}

impl CreateChatUseCase {
    /// 新しい CreateChatUseCase を作成
    pub fn new(users: Arc<dyn UserRepository>, chats: Arc<dyn ChatRepository>) -> Self {
        Self { users, chats }
    }

    /// チャット作成を実行
    ///
    /// # Arguments
    ///
    /// * `user_id` - 作成者となるユーザーの ID
    /// * `name` - チャット名
    ///
    /// # Returns
    ///
    /// * `Ok(Chat)` - 保存されたチャット
    /// * `Err(ChatError::UserNotFound)` - ユーザーが存在しない（名前の重複より優先）
    /// * `Err(ChatError::ChatAlreadyExists)` - 名前が使用済み
    pub async fn execute(&self, user_id: UserId, name: ChatName) -> Result<Chat, ChatError> {
        // 1. ユーザー存在確認
        if self.users.find_by_id(user_id).await?.is_none() {
            tracing::warn!("Create chat rejected: user {} not found", user_id);
            return Err(ChatError::UserNotFound(user_id));
        }

        // 2. 名前の重複確認
        if self.chats.find_by_name(&name).await?.is_some() {
            tracing::warn!("Create chat rejected: name '{}' already exists", name);
            return Err(ChatError::ChatAlreadyExists(name.into_string()));
        }

        // 3. 保存（同時作成との競合はストレージ層が最終判定する）
        let new_chat = NewChat::new(name, user_id, Timestamp::new(get_jst_timestamp()));
        let chat = self.chats.insert(new_chat).await.inspect_err(|err| {
            tracing::warn!("Create chat failed at insert: {}", err);
        })?;

        tracing::info!(
            "Chat '{}' (id {}) created by user {}",
            chat.name,
            chat.id,
            chat.creator_id
        );
        Ok(chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            ChatId, RepositoryError, User, UserName,
            repository::{MockChatRepository, MockUserRepository},
        },
        infrastructure::repository::{InMemoryChatRepository, InMemoryUserRepository},
    };

    fn user(id: u64, name: &str) -> User {
        User::new(UserId::new(id), UserName::new(name.to_string()).unwrap())
    }

    fn name(value: &str) -> ChatName {
        ChatName::new(value.to_string()).unwrap()
    }

    fn create_test_repositories() -> (Arc<InMemoryUserRepository>, Arc<InMemoryChatRepository>) {
        let users = Arc::new(InMemoryUserRepository::with_users(vec![
            user(1, "John"),
            user(2, "Elon"),
        ]));
        let chats = Arc::new(
            InMemoryChatRepository::with_chats(vec![
                NewChat::new(name("NewChat_1"), UserId::new(1), Timestamp::new(0))
                    .into_chat(ChatId::new(1)),
            ])
            .unwrap(),
        );
        (users, chats)
    }

    #[tokio::test]
    async fn test_create_chat_success() {
        // テスト項目: 既存ユーザーが未使用の名前でチャットを作成できる
        // given (前提条件):
        let (users, chats) = create_test_repositories();
        let usecase = CreateChatUseCase::new(users, chats.clone());

        // when (操作):
        let result = usecase.execute(UserId::new(1), name("MyNewChat")).await;

        // then (期待する結果):
        let chat = result.unwrap();
        assert_eq!(chat.name, name("MyNewChat"));
        assert_eq!(chat.creator_id, UserId::new(1));
        let stored = chats.find_by_name(&name("MyNewChat")).await.unwrap();
        assert_eq!(stored, Some(chat));
    }

    #[tokio::test]
    async fn test_create_chat_user_not_found() {
        // テスト項目: 存在しないユーザーはチャットを作成できない
        // given (前提条件):
        let (users, chats) = create_test_repositories();
        let usecase = CreateChatUseCase::new(users, chats.clone());

        // when (操作):
        let result = usecase
            .execute(UserId::new(23), name("ChatWithRandomName"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::UserNotFound(UserId::new(23))));
        assert_eq!(chats.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_chat_user_not_found_takes_precedence() {
        // テスト項目: 名前が使用済みでも、ユーザー不在が優先して返される
        // given (前提条件):
        let (users, chats) = create_test_repositories();
        let usecase = CreateChatUseCase::new(users, chats);

        // when (操作):
        let result = usecase.execute(UserId::new(23), name("NewChat_1")).await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::UserNotFound(UserId::new(23))));
    }

    #[tokio::test]
    async fn test_create_chat_already_exists() {
        // テスト項目: 使用済みの名前ではチャットを作成できない
        // given (前提条件):
        let (users, chats) = create_test_repositories();
        let usecase = CreateChatUseCase::new(users, chats.clone());

        // when (操作):
        let result = usecase.execute(UserId::new(2), name("NewChat_1")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ChatError::ChatAlreadyExists("NewChat_1".to_string()))
        );
        assert_eq!(chats.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_chat_conflict_at_insert() {
        // テスト項目: 事前チェック後に別リクエストが同名で保存した場合も ChatAlreadyExists
        // given (前提条件):
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id.value(), "John"))));
        let mut chats = MockChatRepository::new();
        chats.expect_find_by_name().returning(|_| Ok(None));
        chats
            .expect_insert()
            .times(1)
            .returning(|chat| Err(RepositoryError::ChatNameConflict(chat.name.into_string())));
        let usecase = CreateChatUseCase::new(Arc::new(users), Arc::new(chats));

        // when (操作):
        let result = usecase.execute(UserId::new(1), name("Race")).await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::ChatAlreadyExists("Race".to_string())));
    }

    #[tokio::test]
    async fn test_create_chat_does_not_touch_chats_for_unknown_user() {
        // テスト項目: ユーザー不在の場合はチャットストアに問い合わせない
        // given (前提条件):
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        let mut chats = MockChatRepository::new();
        chats.expect_find_by_name().never();
        chats.expect_insert().never();
        let usecase = CreateChatUseCase::new(Arc::new(users), Arc::new(chats));

        // when (操作):
        let result = usecase.execute(UserId::new(5), name("Any")).await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::UserNotFound(UserId::new(5))));
    }

    #[tokio::test]
    async fn test_create_chat_storage_fault() {
        // テスト項目: ストレージ障害は Storage エラーとして伝播する
        // given (前提条件):
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::Storage("connection refused".to_string())));
        let chats = MockChatRepository::new();
        let usecase = CreateChatUseCase::new(Arc::new(users), Arc::new(chats));

        // when (操作):
        let result = usecase.execute(UserId::new(1), name("Any")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ChatError::Storage(_))));
    }
}
