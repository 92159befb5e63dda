//! Shop Services Library
//!
//! This library provides the backend for the shop RPC services: the cart
//! service (in-memory cart store plus its JSON-RPC handlers) and the user
//! service (a read-only user directory queried by id).

// Domain modules
pub mod cart;
pub mod user;

// Infrastructure
pub mod config;
pub mod router;
pub mod rpc;
pub mod telemetry;
