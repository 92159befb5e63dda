//! User Service Domain Module
//!
//! A read-only lookup service over a static user dataset:
//! - Wire models (User, lookup request shape)
//! - The directory loaded once at startup
//! - The JSON-RPC handler for GetUser

pub mod directory;
pub mod handlers;
pub mod models;

// Re-export commonly used types for convenience
pub use directory::{DirectoryError, SharedUserDirectory, UserDirectory};
pub use handlers::routes;
