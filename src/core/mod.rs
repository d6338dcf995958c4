//! Core Module
//!
//! Configuration, shared server state, and the HTTP server itself.

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
