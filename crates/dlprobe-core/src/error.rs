//! Probe error type and transport error classification.

use std::backtrace::Backtrace;
use std::fmt;
use thiserror::Error;

/// Coarse category of a transport failure, derived from the libcurl error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    Timeout,
    Dns,
    Connect,
    Tls,
    TooManyRedirects,
    /// Connection was up but the exchange broke (reset, empty reply, etc.).
    Transfer,
    Other,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetworkErrorKind::Timeout => "request timed out",
            NetworkErrorKind::Dns => "DNS lookup failed",
            NetworkErrorKind::Connect => "connection failed",
            NetworkErrorKind::Tls => "TLS handshake failed",
            NetworkErrorKind::TooManyRedirects => "too many redirects",
            NetworkErrorKind::Transfer => "transfer failed",
            NetworkErrorKind::Other => "request failed",
        };
        f.write_str(s)
    }
}

/// Classify a curl error into a network error kind.
pub fn classify_curl_error(e: &curl::Error) -> NetworkErrorKind {
    if e.is_operation_timedout() {
        return NetworkErrorKind::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return NetworkErrorKind::Dns;
    }
    if e.is_couldnt_connect() {
        return NetworkErrorKind::Connect;
    }
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cipher()
    {
        return NetworkErrorKind::Tls;
    }
    if e.is_too_many_redirects() {
        return NetworkErrorKind::TooManyRedirects;
    }
    if e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return NetworkErrorKind::Transfer;
    }
    NetworkErrorKind::Other
}

/// Failure of one of the probe's two fallible steps.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No usable HTTP response (timeout, DNS, refused, reset, TLS).
    #[error("{kind} for {url}")]
    Network {
        url: String,
        kind: NetworkErrorKind,
        #[source]
        source: curl::Error,
        backtrace: Backtrace,
    },
    /// Body is not a decodable raster (unknown format, corrupt, truncated, empty).
    #[error("cannot decode {len} bytes as an image")]
    ImageDecode {
        len: usize,
        #[source]
        source: image::ImageError,
        backtrace: Backtrace,
    },
}

// Constructors always capture a trace; RUST_BACKTRACE does not apply.
impl ProbeError {
    pub fn network(url: &str, source: curl::Error) -> Self {
        ProbeError::Network {
            url: url.to_string(),
            kind: classify_curl_error(&source),
            source,
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn image_decode(len: usize, source: image::ImageError) -> Self {
        ProbeError::ImageDecode {
            len,
            source,
            backtrace: Backtrace::force_capture(),
        }
    }

    /// Stack trace captured where the error was created.
    pub fn backtrace(&self) -> &Backtrace {
        match self {
            ProbeError::Network { backtrace, .. } | ProbeError::ImageDecode { backtrace, .. } => {
                backtrace
            }
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ProbeError::Network { .. })
    }
}
