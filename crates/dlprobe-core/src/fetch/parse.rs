//! Parse raw HTTP response header lines into ResponseHeaders.

use super::ResponseHeaders;

/// One raw header line from libcurl, trailing CRLF removed.
///
/// Non-UTF-8 bytes are replaced rather than dropping the line.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Parse collected header lines into ResponseHeaders.
///
/// libcurl reports the headers of every response in a redirect chain; a status
/// line starts a new response, so only the final response's headers survive.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHeaders {
    let mut entries = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            entries.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            entries.push((name.to_string(), value.trim().to_string()));
        }
    }

    ResponseHeaders { entries }
}
