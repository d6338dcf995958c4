//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`AppResponse`] - success envelope with flattened payload
//! - logging and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse, ok, ok_with_message};
pub use result::AppResult;
