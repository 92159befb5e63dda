//! Router assembly for the shop services

use crate::cart::store::SharedCartStore;
use crate::user::directory::SharedUserDirectory;
use axum::{extract::Request, middleware::Next, response::Response, Router};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

/// Creates and configures the cart-service router with all routes and middleware
pub fn cart_app(store: SharedCartStore) -> Router {
    with_middleware(crate::cart::routes().with_state(store))
}

/// Creates and configures the user-service router with all routes and middleware
pub fn user_app(directory: SharedUserDirectory) -> Router {
    with_middleware(crate::user::routes().with_state(directory))
}

/// Applies the middleware shared by both services: request logging and a
/// permissive CORS layer.
fn with_middleware(router: Router) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(axum::middleware::from_fn(log_request))
        .layer(cors_layer)
}

/// Middleware: logs every request with a fresh correlation id.
async fn log_request(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let res = next.run(req).await;

    if res.status().is_success() {
        tracing::debug!(%request_id, %method, %uri, status = %res.status(), "request handled");
    } else {
        tracing::warn!(%request_id, %method, %uri, status = %res.status(), "request failed");
    }

    res
}
