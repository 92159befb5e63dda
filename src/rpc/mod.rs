//! JSON-RPC 2.0 Plumbing
//!
//! Shared by the cart and user services: the request envelope, the error
//! code taxonomy, and helpers for building response envelopes and decoding
//! method parameters.

pub mod codes;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// A failed method call, ready to be wrapped into an error envelope.
#[derive(Debug)]
pub struct RpcError {
    /// JSON-RPC error code
    pub code: i32,

    /// Human-readable description of the error
    pub message: String,
}

impl RpcError {
    /// Client sent parameters the method cannot accept.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: codes::INVALID_PARAMS,
            message: message.into(),
        }
    }

    /// The request named a method this service does not expose.
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: codes::METHOD_NOT_FOUND,
            message: format!("Method not found: {}", method),
        }
    }

    /// A lookup matched no record.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: codes::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Unexpected server-side failure. The caller is still answered.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: codes::INTERNAL_ERROR,
            message: message.into(),
        }
    }
}

/// Decodes method parameters into a typed request struct.
///
/// Any shape mismatch is reported as an invalid-params error carrying the
/// serde description of what was wrong.
pub fn decode_params<T: DeserializeOwned>(params: Value) -> Result<T, RpcError> {
    serde_json::from_value(params)
        .map_err(|e| RpcError::invalid_params(format!("Invalid params: {}", e)))
}

/// Builds a JSON-RPC 2.0 success envelope, echoing the request `id`.
pub fn success_envelope(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error envelope, echoing the request `id`
/// (or `null` when the id could not be read).
pub fn error_envelope(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes_echo_the_request_id() {
        let ok = success_envelope(json!(1), json!("done"));
        assert_eq!(ok["jsonrpc"], "2.0");
        assert_eq!(ok["id"], 1);
        assert_eq!(ok["result"], "done");

        let err = error_envelope(json!(2), codes::INVALID_PARAMS, "bad input");
        assert_eq!(err["id"], 2);
        assert_eq!(err["error"]["code"], codes::INVALID_PARAMS);
        assert_eq!(err["error"]["message"], "bad input");
    }

    #[test]
    fn decode_params_reports_shape_mismatch() {
        #[derive(serde::Deserialize, Debug)]
        struct Probe {
            #[allow(dead_code)]
            user_id: String,
        }

        let err = decode_params::<Probe>(json!({"wrong": 1})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_PARAMS);
        assert!(err.message.contains("Invalid params"));
    }
}
