//! Single blocking HTTP GET.
//!
//! Uses the curl crate (libcurl) to fetch the whole body into memory along with
//! the final response's status and headers. Any HTTP status is a successful
//! fetch; only transport failures are errors.

mod parse;

use crate::config::RequestDescriptor;
use crate::error::ProbeError;

/// Header name/value pairs of the final response, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    /// First value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Status, headers and body of the response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u32,
    pub headers: ResponseHeaders,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }
}

/// Performs the GET described by `request` and buffers the response.
///
/// Follows redirects and decodes any `Content-Encoding` libcurl supports, so
/// `body` is what the server meant to send. Runs in the current thread and
/// blocks for at most `request.timeout`.
pub fn fetch(request: &RequestDescriptor) -> Result<FetchedResponse, ProbeError> {
    let url = request.url.as_str();
    let net = |e: curl::Error| ProbeError::network(url, e);

    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(net)?;
    easy.get(true).map_err(net)?;
    easy.follow_location(true).map_err(net)?;
    easy.max_redirections(request.max_redirects).map_err(net)?;
    easy.accept_encoding("").map_err(net)?;
    easy.timeout(request.timeout).map_err(net)?;

    let mut list = curl::easy::List::new();
    for (k, v) in &request.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))
            .map_err(net)?;
    }
    if !request.headers.is_empty() {
        easy.http_headers(list).map_err(net)?;
    }

    tracing::debug!(url, timeout = ?request.timeout, "sending GET");
    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                header_lines.push(parse::header_line(data));
                true
            })
            .map_err(net)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(net)?;
        transfer.perform().map_err(net)?;
    }

    let status = easy.response_code().map_err(net)?;
    let headers = parse::parse_headers(&header_lines);
    tracing::info!(status, bytes = body.len(), "response received");
    tracing::debug!(count = headers.len(), "final response headers");
    for (name, value) in headers.iter() {
        tracing::trace!(header = name, value, "response header");
    }

    Ok(FetchedResponse {
        status,
        headers,
        body,
    })
}
