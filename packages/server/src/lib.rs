//! Chat management server library.
//!
//! Lets known users create uniquely named chats, delete the chats they
//! created, and look chats up by name. Layered as domain, usecase,
//! infrastructure and ui (HTTP transport).

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
