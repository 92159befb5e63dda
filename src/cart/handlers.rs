//! Cart Service JSON-RPC Handlers
//!
//! Stateless adapters over the cart store: they validate request shape,
//! delegate to the store, and map every outcome to a JSON-RPC response.
//! No failure is swallowed; every request gets either a result or an
//! explicit error envelope.

use super::models::{AddItemRequest, Cart, UserIdRequest};
use super::store::{CartStore, SharedCartStore};
use crate::rpc::{self, codes, JsonRpcRequest, RpcError};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates the JSON-RPC routes for the cart service
pub fn routes() -> Router<SharedCartStore> {
    Router::new()
        .route("/", post(handle_rpc))
        .route("/rpc", post(handle_rpc)) // Explicit endpoint alias
}

/// Endpoint: POST / and POST /rpc
///
/// Unwraps the JSON-RPC envelope and dispatches to the method handlers.
async fn handle_rpc(
    State(store): State<SharedCartStore>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "rejecting unparseable request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc::error_envelope(Value::Null, codes::PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    let body = match dispatch(&store, method, params) {
        Ok(result) => rpc::success_envelope(id, result),
        Err(err) => {
            // Identifying fields only; the raw payload never reaches the log.
            tracing::warn!(method, code = err.code, error = %err.message, "cart call failed");
            rpc::error_envelope(id, err.code, err.message)
        }
    };

    Json(body).into_response()
}

/// Dispatches one decoded call to the store. Public so tests can drive the
/// service without going through the HTTP layer.
pub fn dispatch(store: &CartStore, method: &str, params: Value) -> Result<Value, RpcError> {
    match method {
        "AddItem" => add_item(store, params),
        "EmptyCart" => empty_cart(store, params),
        "GetCart" => get_cart(store, params),
        "ping" => Ok(json!({})), // Health check
        _ => Err(RpcError::method_not_found(method)),
    }
}

/// Handles `AddItem`: appends one line to the user's cart.
fn add_item(store: &CartStore, params: Value) -> Result<Value, RpcError> {
    let req: AddItemRequest = rpc::decode_params(params)?;

    store
        .add_item(&req.user_id, req.item)
        .map_err(|e| RpcError::invalid_params(e.to_string()))?;

    Ok(json!({}))
}

/// Handles `EmptyCart`: drops the user's cart; succeeds even when absent.
fn empty_cart(store: &CartStore, params: Value) -> Result<Value, RpcError> {
    let req: UserIdRequest = rpc::decode_params(params)?;

    store.empty_cart(&req.user_id);

    Ok(json!({}))
}

/// Handles `GetCart`: returns the current snapshot, empty when the user has
/// no cart. An encoding failure is surfaced as an internal error rather
/// than dropped.
fn get_cart(store: &CartStore, params: Value) -> Result<Value, RpcError> {
    let req: UserIdRequest = rpc::decode_params(params)?;

    let cart = Cart {
        items: store.get_cart(&req.user_id),
        user_id: req.user_id,
    };

    serde_json::to_value(&cart).map_err(|e| {
        tracing::error!(user_id = %cart.user_id, error = %e, "encoding GetCart response failed");
        RpcError::internal("failed to encode cart")
    })
}
