//! User Service JSON-RPC Handler

use super::directory::{SharedUserDirectory, UserDirectory};
use super::models::UserId;
use crate::rpc::{self, codes, JsonRpcRequest, RpcError};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates the JSON-RPC routes for the user service
pub fn routes() -> Router<SharedUserDirectory> {
    Router::new()
        .route("/", post(handle_rpc))
        .route("/rpc", post(handle_rpc)) // Explicit endpoint alias
}

/// Endpoint: POST / and POST /rpc
async fn handle_rpc(
    State(directory): State<SharedUserDirectory>,
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

    let body = match dispatch(&directory, method, params) {
        Ok(result) => rpc::success_envelope(id, result),
        Err(err) => {
            tracing::warn!(method, code = err.code, error = %err.message, "user call failed");
            rpc::error_envelope(id, err.code, err.message)
        }
    };

    Json(body).into_response()
}

/// Dispatches one decoded call against the directory.
pub fn dispatch(directory: &UserDirectory, method: &str, params: Value) -> Result<Value, RpcError> {
    match method {
        "GetUser" => get_user(directory, params),
        "ping" => Ok(json!({})), // Health check
        _ => Err(RpcError::method_not_found(method)),
    }
}

/// Handles `GetUser`: a miss is answered with an explicit not-found error,
/// never left unanswered.
fn get_user(directory: &UserDirectory, params: Value) -> Result<Value, RpcError> {
    let req: UserId = rpc::decode_params(params)?;

    let user = directory
        .get(&req.value)
        .ok_or_else(|| RpcError::not_found(format!("unknown user id {}", req.value)))?;

    serde_json::to_value(user).map_err(|e| {
        tracing::error!(user_id = %req.value, error = %e, "encoding GetUser response failed");
        RpcError::internal("failed to encode user")
    })
}

#[cfg(test)]
mod tests {
    use super::dispatch;
    use crate::rpc::codes;
    use crate::user::directory::UserDirectory;
    use crate::user::models::User;
    use serde_json::json;

    fn directory() -> UserDirectory {
        UserDirectory::from_records(vec![User {
            id: "1".into(),
            first_name: "Jane".into(),
            last_name: "Porter".into(),
            email: "jane.porter@example.com".into(),
        }])
    }

    #[test]
    fn dispatch_answers_known_ids() {
        let result = dispatch(&directory(), "GetUser", json!({"value": "1"})).unwrap();
        assert_eq!(result["firstName"], "Jane");
        assert_eq!(result["email"], "jane.porter@example.com");
    }

    #[test]
    fn dispatch_maps_misses_to_not_found() {
        let err = dispatch(&directory(), "GetUser", json!({"value": "42"})).unwrap_err();
        assert_eq!(err.code, codes::NOT_FOUND);
        assert!(err.message.contains("unknown user id"));
    }
}
