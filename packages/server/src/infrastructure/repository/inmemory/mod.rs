//! インメモリ Repository 実装

mod chat;
mod user;

pub use chat::InMemoryChatRepository;
pub use user::InMemoryUserRepository;
