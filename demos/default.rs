//! Detects scheme and host automatically, falling back to
//! `http://localhost:8080` when the request carries no signal. Try it with
//! `curl -H 'X-Forwarded-Proto: https' -H 'X-Forwarded-For: foo.com' localhost:8080`.

use axum::routing::get;
use axum::Router;
use axum_location::{Location, LocationLayer};
use tracing_subscriber::EnvFilter;

async fn index(location: Location) -> String {
    location.to_string()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = Router::new()
        .route("/", get(index))
        .layer(LocationLayer::default());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("bind demo listener");
    axum::serve(listener, app).await.expect("serve demo app");
}
