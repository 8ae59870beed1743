/// Connection-level details the request itself does not carry.
///
/// `http::Request` has no notion of transport encryption and its version enum
/// cannot represent a raw protocol token, so whatever accepts the connection
/// (a TLS acceptor, server glue, a test) records them here and inserts the
/// value into the request's extensions before handing it off. Requests
/// without one are treated as plain text with an unknown protocol.
///
/// ```
/// use axum_location::ConnectionInfo;
///
/// let info = ConnectionInfo::new().encrypted(true);
/// # let mut request = http::Request::new(());
/// request.extensions_mut().insert(info);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConnectionInfo {
    pub(crate) encrypted: bool,
    pub(crate) protocol: Option<String>,
}

impl ConnectionInfo {
    /// A plain-text connection with no recorded protocol.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks whether transport encryption is in use on this connection.
    pub fn encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }

    /// Records the raw protocol identifier the connection was opened with.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}
