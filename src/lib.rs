//! Middleware that resolves the externally visible URL of each request.
//!
//! A service running behind proxies, load balancers, or TLS terminators only
//! sees the rewritten request, so the scheme and host a client actually used
//! have to be recovered from forwarding headers and connection details.
//! [`LocationLayer`] does that once per request with a fixed precedence
//! chain, attaches the result to the request, and [`Location`] hands it to
//! whatever handler needs to build absolute URLs pointing back at the
//! service.
//!
//! The scheme is taken from the first of: the configured forwarding header
//! (when its value is exactly `https`), an `https` request-line scheme, the
//! connection's encryption flag, a raw protocol token starting with `HTTPS`,
//! and finally the configured default. The host comes from the first
//! non-empty of: the configured forwarding header, the fixed `x-host`
//! convention, the `Host` header, the request-line host, and the configured
//! default. The path is always the configured base path. Every request
//! resolves; there are no error cases.
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use axum_location::{Config, Location, LocationLayer};
//!
//! async fn handler(location: Location) -> String {
//!     location.to_string()
//! }
//!
//! # async fn serve() {
//! let config = Config::new()
//!     .scheme("https")
//!     .host("foo.com")
//!     .base("/base");
//!
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(LocationLayer::new(config));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```
//!
//! Header values are used as-is: nothing here validates, sanitizes, or
//! splits comma-separated proxy chains, and resolved hosts are never checked
//! against DNS. Strip or trust forwarding headers at the edge accordingly.

mod config;
mod connection;
mod extract;
mod layer;
mod location;
mod resolve;

pub use config::{Config, ForwardingHeaders, X_FORWARDED_FOR, X_FORWARDED_PROTO};
pub use connection::ConnectionInfo;
pub use extract::LocationRejection;
pub use layer::{LocationLayer, ResolveLocation};
pub use location::Location;
