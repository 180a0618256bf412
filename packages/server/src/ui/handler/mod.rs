//! Handler modules for HTTP endpoints.

pub mod http;

pub use http::{create_chat, delete_chat, get_chat, health_check};
