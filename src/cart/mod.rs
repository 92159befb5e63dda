//! Cart Service Domain Module
//!
//! Everything the cart service owns:
//! - Wire models (CartItem, method request/response shapes)
//! - The in-memory cart store
//! - JSON-RPC handlers binding the store to the transport

pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use store::{CartError, CartStore, SharedCartStore};
