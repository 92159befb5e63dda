//! JSON-RPC error codes used by both services.

/// Request body was not valid JSON or not a valid envelope
pub const PARSE_ERROR: i32 = -32700;
/// The requested method is not exposed by this service
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Parameters failed validation; nothing was changed
pub const INVALID_PARAMS: i32 = -32602;
/// Unexpected server-side failure; logged and surfaced to the caller
pub const INTERNAL_ERROR: i32 = -32603;
/// Server-defined code for lookups that match no record
pub const NOT_FOUND: i32 = -32000;
