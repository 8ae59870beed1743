//! Same wiring as the default demo, but headerless requests fall back to
//! `https://foo.com/base` instead of localhost:
//! - `https` when the scheme cannot be determined
//! - `foo.com` when the host cannot be determined
//! - `/base` included as the path for the path-rewriting proxy in front

use axum::routing::get;
use axum::Router;
use axum_location::{Config, Location, LocationLayer};
use tracing_subscriber::EnvFilter;

async fn index(location: Location) -> String {
    location.to_string()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::new()
        .scheme("https")
        .host("foo.com")
        .base("/base");

    let app = Router::new()
        .route("/", get(index))
        .layer(LocationLayer::new(config));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("bind demo listener");
    axum::serve(listener, app).await.expect("serve demo app");
}
