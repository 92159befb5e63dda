use shop_services_rust::cart::CartStore;
use shop_services_rust::{config, router, telemetry};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    telemetry::init();

    // The store is constructed once and injected into the handlers; there is
    // no other holder of cart state.
    let store = Arc::new(CartStore::new());
    let app = router::cart_app(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::port(config::DEFAULT_CART_PORT)));
    tracing::info!(%addr, "starting cart service");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
