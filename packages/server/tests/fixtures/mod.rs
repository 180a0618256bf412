//! Test fixtures for HTTP integration tests.
//!
//! Every `TestServer` owns fresh in-memory stores, so scenarios never
//! share state.

use std::sync::Arc;

use parlor_server::{
    domain::{Chat, ChatId, ChatName, NewChat, Timestamp, User, UserId, UserName},
    infrastructure::repository::{InMemoryChatRepository, InMemoryUserRepository},
    ui::{build_router, state::AppState},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// Users seeded by most scenarios
pub fn seed_users() -> Vec<User> {
    [
        (1, "John"),
        (2, "Elon"),
        (3, "Kate"),
        (4, "Dan"),
        (5, "Chuck"),
        (6, "Julia"),
        (7, "Juliet"),
    ]
    .into_iter()
    .map(|(id, name)| User::new(UserId::new(id), UserName::new(name.to_string()).unwrap()))
    .collect()
}

/// Chats seeded by most scenarios
pub fn seed_chats() -> Vec<Chat> {
    [(1, "NewChat_1", 1), (2, "NewChat_2", 2), (3, "NewChat_3", 3)]
        .into_iter()
        .map(|(id, name, creator)| {
            NewChat::new(
                ChatName::new(name.to_string()).unwrap(),
                UserId::new(creator),
                Timestamp::new(1_672_498_800_000),
            )
            .into_chat(ChatId::new(id))
        })
        .collect()
}

/// Server running in-process on an ephemeral port
pub struct TestServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the given seed data.
    pub async fn start(users: Vec<User>, chats: Vec<Chat>) -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users(users));
        let chats =
            Arc::new(InMemoryChatRepository::with_chats(chats).expect("Failed to seed chats"));
        let app = build_router(Arc::new(AppState::new(users, chats)));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Start a server seeded with the default users and chats.
    pub async fn start_seeded() -> Self {
        Self::start(seed_users(), seed_chats()).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
