use std::fmt;

use http::Extensions;
use url::Url;

/// The externally visible URL prefix resolved for one request.
///
/// Produced by [`LocationLayer`](crate::LocationLayer) and carried in the
/// request's extensions; handlers usually receive it through the extractor
/// impl rather than touching the extension map themselves. Rendering with
/// `Display` yields `scheme://host` followed by the configured base path,
/// which is exactly the prefix to put in front of redirect targets or links
/// sent back to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    scheme: String,
    host: String,
    path: String,
}

impl Location {
    pub(crate) fn new(scheme: String, host: String, path: String) -> Self {
        Self { scheme, host, path }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The configured base path, not anything derived from the request.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Looks up the location resolved earlier in the request lifecycle.
    ///
    /// Returns `None` when the resolver middleware never ran for this
    /// request, which points at a missing [`LocationLayer`](crate::LocationLayer)
    /// in the caller's stack. No default is fabricated.
    pub fn from_extensions(extensions: &Extensions) -> Option<&Self> {
        extensions.get::<Self>()
    }

    /// Converts the resolved prefix into a parsed [`Url`].
    ///
    /// Resolution itself never fails, but a host taken verbatim from an
    /// inbound header is not guaranteed to form a parseable URL.
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_location() -> Location {
        Location::new("https".to_owned(), "bar.com".to_owned(), "/bar".to_owned())
    }

    #[test]
    fn display_appends_the_base_path() {
        assert_eq!(bar_location().to_string(), "https://bar.com/bar");
    }

    #[test]
    fn display_omits_an_empty_path() {
        let location = Location::new("http".to_owned(), "localhost:8080".to_owned(), String::new());

        assert_eq!(location.to_string(), "http://localhost:8080");
    }

    #[test]
    fn url_conversion_agrees_with_display() {
        let url = bar_location().to_url().expect("well formed location");

        assert_eq!(url.as_str(), "https://bar.com/bar");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("bar.com"));
    }

    #[test]
    fn extension_lookup_is_explicit_about_absence() {
        let mut extensions = Extensions::new();
        assert_eq!(Location::from_extensions(&extensions), None);

        extensions.insert(bar_location());
        assert_eq!(Location::from_extensions(&extensions), Some(&bar_location()));
    }
}
