//! UseCase: チャット削除処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DeleteChatUseCase::execute() メソッド
//! - チャット存在確認 → 作成者確認 → 削除 の順序
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成者による削除（削除後は名前で取得できない）
//! - 異常系：作成者以外による削除（チャットは残る）
//! - 異常系：存在しないチャット（権限の有無に関わらず ChatNotFound）
//! - エッジケース：同時削除で先を越された場合

use std::sync::Arc;

use crate::domain::{ChatId, ChatRepository, UserId};

use super::error::ChatError;

/// チャット削除のユースケース
pub struct DeleteChatUseCase {
    chats: Arc<dyn ChatRepository>,
}

impl DeleteChatUseCase {
    /// 新しい DeleteChatUseCase を作成
    pub fn new(chats: Arc<dyn ChatRepository>) -> Self {
        Self { chats }
    }

    /// チャット削除を実行
    ///
    /// 要求ユーザー自体の存在は確認しません。作成者でなければ
    /// 存在しないユーザーでも `NotAuthorized` になります。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 削除成功
    /// * `Err(ChatError::ChatNotFound)` - チャットが存在しない（権限確認より優先）
    /// * `Err(ChatError::NotAuthorized)` - 要求ユーザーが作成者ではない
    pub async fn execute(&self, user_id: UserId, chat_id: ChatId) -> Result<(), ChatError> {
        // 1. チャット存在確認
        let Some(chat) = self.chats.find_by_id(chat_id).await? else {
            tracing::warn!("Delete chat rejected: chat {} not found", chat_id);
            return Err(ChatError::ChatNotFound);
        };

        // 2. 作成者確認
        if !chat.is_created_by(user_id) {
            tracing::warn!(
                "Delete chat rejected: user {} is not the creator of chat {}",
                user_id,
                chat_id
            );
            return Err(ChatError::NotAuthorized { user_id, chat_id });
        }

        // 3. 削除
        self.chats.delete(chat_id).await?;

        tracing::info!("Chat '{}' (id {}) deleted by user {}", chat.name, chat_id, user_id);
        Ok(())
    }
}
