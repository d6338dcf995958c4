//! E-Gas Server - order and operations backend for a gas cylinder delivery
//! business
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): RESTful routes per resource
//! - **Database** (`db`): embedded SurrealDB storage, models and repositories
//! - **Auth** (`auth`): JWT bearer tokens, user/admin roles
//! - **Order domain** (`orders`): reference generation, pagination, filters,
//!   CSV export
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # config, state, HTTP server
//! ├── auth/     # JWT service, extractors, middleware
//! ├── api/      # routes and handlers
//! ├── db/       # models and repositories
//! ├── orders/   # order domain logic
//! └── utils/    # errors, response envelope, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, create the data directory, and install the logger.
///
/// Must run before [`Config`] is read anywhere else: `.env` values only
/// apply to lookups that happen after this call.
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_data_dir_structure()?;

    let log_dir = config.log_dir();
    if config.is_production() {
        init_logger_with_file(Some(&config.log_level), log_dir.to_str());
    } else {
        init_logger_with_file(Some(&config.log_level), None);
    }

    Ok(config)
}
