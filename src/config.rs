use http::HeaderName;
use serde::{Deserialize, Serialize};

/// Conventional header a proxy uses to report the original request scheme.
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Conventional header a proxy uses to report the original host.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Settings for resolving the externally visible location of a request.
///
/// The scheme and host act as fallbacks when nothing on the request itself
/// reveals what the client-facing URL looked like. The base path is prepended
/// verbatim for deployments where an intermediary rewrites paths. A fresh
/// default configuration maps to `http://localhost:8080` with no base path.
///
/// ```
/// use axum_location::Config;
///
/// let config = Config::new()
///     .scheme("https")
///     .host("foo.com")
///     .base("/base");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) scheme: String,
    pub(crate) host: String,
    pub(crate) base: String,
    pub(crate) headers: ForwardingHeaders,
}

impl Config {
    /// Returns a generic default configuration mapped to localhost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme to fall back on when it cannot be determined from the request.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Host to fall back on when it cannot be determined from the request.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Path prefix included in the resolved location, for use with proxy
    /// servers that do path re-writing.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Overrides which headers the forwarded scheme and host are read from.
    pub fn headers(mut self, headers: ForwardingHeaders) -> Self {
        self.headers = headers;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: "http".to_owned(),
            host: "localhost:8080".to_owned(),
            base: String::new(),
            headers: ForwardingHeaders::default(),
        }
    }
}

/// Names of the headers carrying proxy-forwarded values.
///
/// A `None` field disables that header source entirely: the resolver skips
/// straight to the later steps of its fallback chain. In serialized form a
/// disabled source is the empty string, so deployment config files can turn
/// a lookup off without knowing about `Option`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardingHeaders {
    /// Header holding the client-facing scheme, `x-forwarded-proto` unless
    /// overridden.
    #[serde(with = "header_name")]
    pub scheme: Option<HeaderName>,

    /// Header holding the client-facing host, `x-forwarded-for` unless
    /// overridden.
    #[serde(with = "header_name")]
    pub host: Option<HeaderName>,
}

impl ForwardingHeaders {
    /// Ignore forwarding headers even when present on a request.
    pub const fn disabled() -> Self {
        Self {
            scheme: None,
            host: None,
        }
    }
}

impl Default for ForwardingHeaders {
    fn default() -> Self {
        Self {
            scheme: Some(X_FORWARDED_PROTO),
            host: Some(X_FORWARDED_FOR),
        }
    }
}

mod header_name {
    use http::HeaderName;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(name: &Option<HeaderName>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match name {
            Some(name) => serializer.serialize_str(name.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<HeaderName>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        if raw.is_empty() {
            return Ok(None);
        }

        HeaderName::try_from(raw.as_str())
            .map(Some)
            .map_err(de::Error::custom)
    }
}
