//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! 各ユースケースは検証を決められた順序で行い、状態はすべて Repository に置きます。

pub mod create_chat;
pub mod delete_chat;
pub mod error;
pub mod get_chat;

pub use create_chat::CreateChatUseCase;
pub use delete_chat::DeleteChatUseCase;
pub use error::ChatError;
pub use get_chat::GetChatUseCase;
