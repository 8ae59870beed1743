use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json};
use http::request::Parts;

use crate::location::Location;

#[async_trait]
impl<S> FromRequestParts<S> for Location
where
    S: Send + Sync,
{
    type Rejection = LocationRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Location::from_extensions(&parts.extensions)
            .cloned()
            .ok_or(LocationRejection)
    }
}

/// Rejection for requests that reached a handler without a resolved location.
///
/// This means the request never passed through a
/// [`LocationLayer`](crate::LocationLayer), a wiring mistake in the hosting
/// application rather than anything the client did, so it renders as a server
/// error. Handlers that can live without a location extract
/// `Option<Location>` instead.
#[derive(Debug, thiserror::Error)]
#[error("request carried no resolved location, the location middleware never ran")]
pub struct LocationRejection;

impl IntoResponse for LocationRejection {
    fn into_response(self) -> Response {
        tracing::error!("handler extracted a location on a route without the location middleware");

        let err_msg = serde_json::json!({ "status": "location resolver not installed" });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(err_msg)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http::Request;

    use super::*;

    fn bare_parts() -> Parts {
        let (parts, _) = Request::builder().uri("/").body(()).expect("request").into_parts();
        parts
    }

    #[tokio::test]
    async fn extraction_fails_when_the_middleware_never_ran() {
        let mut parts = bare_parts();

        let outcome = Location::from_request_parts(&mut parts, &()).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn extraction_returns_the_attached_location() {
        let mut parts = bare_parts();
        parts
            .extensions
            .insert(Location::new("https".to_owned(), "bar.com".to_owned(), "/bar".to_owned()));

        let location = Location::from_request_parts(&mut parts, &())
            .await
            .expect("attached location");

        assert_eq!(location.to_string(), "https://bar.com/bar");
    }

    #[test]
    fn rejection_is_a_server_error() {
        let response = LocationRejection.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
