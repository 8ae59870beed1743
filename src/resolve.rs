use http::header::{self, HeaderMap, HeaderName};
use http::{Request, Uri};

use crate::config::Config;
use crate::connection::ConnectionInfo;
use crate::location::Location;

/// Widely used secondary host convention, checked after the configured
/// forwarding header regardless of configuration.
const X_HOST: HeaderName = HeaderName::from_static("x-host");

const HTTPS: &str = "https";

impl Config {
    /// Resolves the externally visible location of `request`.
    ///
    /// Total over its inputs: absent or malformed fields simply fail to match
    /// and the chain falls through to the configured defaults, so every
    /// request yields a usable value. Nothing is read beyond a fixed handful
    /// of header lookups and no state is kept between calls.
    pub fn resolve<B>(&self, request: &Request<B>) -> Location {
        let connection = request.extensions().get::<ConnectionInfo>();
        let scheme = self.resolve_scheme(request.headers(), request.uri(), connection);
        let host = self.resolve_host(request.headers(), request.uri());

        Location::new(scheme.to_owned(), host.to_owned(), self.base.clone())
    }

    /// First match wins: forwarded scheme header, request-line scheme, the
    /// connection's encryption flag, a raw `HTTPS` protocol token, then the
    /// configured default. Header and protocol values are matched
    /// case-sensitively; only the header *name* lookup is case-insensitive.
    fn resolve_scheme<'r>(
        &'r self,
        headers: &HeaderMap,
        uri: &Uri,
        connection: Option<&ConnectionInfo>,
    ) -> &'r str {
        let forwarded = self.headers.scheme.as_ref().and_then(|name| headers.get(name));
        if forwarded.map(|value| value.as_bytes() == HTTPS.as_bytes()).unwrap_or(false) {
            return HTTPS;
        }

        if uri.scheme_str() == Some(HTTPS) {
            return HTTPS;
        }

        if connection.map(|info| info.encrypted).unwrap_or(false) {
            return HTTPS;
        }

        let protocol = connection.and_then(|info| info.protocol.as_deref());
        if protocol.map(|proto| proto.starts_with("HTTPS")).unwrap_or(false) {
            return HTTPS;
        }

        &self.scheme
    }

    /// First non-empty source wins: the configured forwarding header, the
    /// fixed `x-host` convention, the `Host` header the immediate peer sent,
    /// the request-line host (rarely set server side), then the configured
    /// default.
    fn resolve_host<'r>(&'r self, headers: &'r HeaderMap, uri: &'r Uri) -> &'r str {
        self.headers
            .host
            .as_ref()
            .and_then(|name| header_value(headers, name))
            .or_else(|| header_value(headers, &X_HOST))
            .or_else(|| header_value(headers, &header::HOST))
            .or_else(|| uri.host().filter(|host| !host.is_empty()))
            .unwrap_or(&self.host)
    }
}

fn header_value<'m>(headers: &'m HeaderMap, name: &HeaderName) -> Option<&'m str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}
