use std::task::{Context, Poll};

use http::Request;
use tower::{Layer, Service};

use crate::config::Config;

/// Applies [`ResolveLocation`] to every request passing through the stack.
///
/// `LocationLayer::default()` uses the localhost configuration from
/// [`Config::default`]; deployments behind real proxies construct one with
/// [`LocationLayer::new`]. Install it before any handler that extracts
/// [`Location`](crate::Location).
#[derive(Clone, Debug, Default)]
pub struct LocationLayer {
    config: Config,
}

impl LocationLayer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for LocationLayer {
    type Service = ResolveLocation<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ResolveLocation::new(inner, self.config.clone())
    }
}

/// Middleware that resolves the externally visible location of each request
/// and attaches it to the request's extensions before delegating to the
/// wrapped service. The response side is left untouched.
#[derive(Clone, Debug)]
pub struct ResolveLocation<S> {
    config: Config,
    inner: S,
}

impl<S> ResolveLocation<S> {
    pub fn new(inner: S, config: Config) -> Self {
        Self { config, inner }
    }
}

impl<S, B> Service<Request<B>> for ResolveLocation<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let location = self.config.resolve(&request);
        tracing::trace!(
            scheme = location.scheme(),
            host = location.host(),
            "resolved request location"
        );

        request.extensions_mut().insert(location);
        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use tower::{service_fn, ServiceExt};

    use super::*;
    use crate::location::Location;

    async fn captured_location(request: Request<()>) -> Result<Option<Location>, Infallible> {
        Ok(Location::from_extensions(request.extensions()).cloned())
    }

    #[tokio::test]
    async fn layer_attaches_a_location_to_the_request() {
        let service = LocationLayer::default().layer(service_fn(captured_location));

        let request = Request::builder().uri("/").body(()).expect("request");
        let seen = service.oneshot(request).await.expect("service call");

        assert_eq!(seen.map(|l| l.to_string()).as_deref(), Some("http://localhost:8080"));
    }

    #[tokio::test]
    async fn layer_resolution_follows_its_configuration() {
        let config = Config::new().scheme("https").host("foo.com").base("/base");
        let service = LocationLayer::new(config).layer(service_fn(captured_location));

        let request = Request::builder().uri("/").body(()).expect("request");
        let seen = service.oneshot(request).await.expect("service call");

        assert_eq!(seen.map(|l| l.to_string()).as_deref(), Some("https://foo.com/base"));
    }
}
