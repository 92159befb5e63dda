use shop_services_rust::user::UserDirectory;
use shop_services_rust::{config, router, telemetry};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    telemetry::init();

    // The dataset is read exactly once; a broken file stops the process
    // before it starts answering requests.
    let path = config::users_db_path();
    let directory = match UserDirectory::load(&path) {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            tracing::error!(%path, error = %e, "failed to load user dataset");
            std::process::exit(1);
        }
    };
    tracing::info!(%path, users = directory.len(), "user dataset loaded");

    let app = router::user_app(directory);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::port(config::DEFAULT_USER_PORT)));
    tracing::info!(%addr, "starting user service");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
