//! Chat management HTTP server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server -- --user 1:John --user 2:Elon
//! ```

use clap::Parser;
use parlor_server::ServerConfig;
use parlor_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = parlor_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
