//! Authentication and Authorization Module
//!
//! JWT token generation/validation, extractors, and auth middleware.

mod extractor;
mod jwt;
mod middleware;

pub use extractor::MaybeUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
