//! # relay-api
//!
//! HTTP server for the roster admin surface and the Telegram relay,
//! built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the server entry points for binaries and tests
pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
