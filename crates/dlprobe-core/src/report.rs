//! Console report: the lines the probe prints, in order.
//!
//! Every writer takes `&mut impl Write` so tests can capture output in a `Vec<u8>`.

use crate::config::PREVIEW_LEN;
use crate::decode::Raster;
use crate::error::ProbeError;
use crate::fetch::FetchedResponse;
use std::fmt::Write as _;
use std::io::{self, Write};

pub const SUCCESS_MARK: &str = "✅ SUCCESS!";
pub const ERROR_MARK: &str = "❌ ERROR:";

/// `Testing download from: <url>` followed by a blank line.
pub fn write_banner(out: &mut impl Write, url: &str) -> io::Result<()> {
    writeln!(out, "Testing download from: {}", url)?;
    writeln!(out)
}

/// Status, content type, body length and body preview.
pub fn write_response_summary(out: &mut impl Write, response: &FetchedResponse) -> io::Result<()> {
    writeln!(out, "Status: {}", response.status)?;
    writeln!(
        out,
        "Content-Type: {}",
        response.content_type().unwrap_or("None")
    )?;
    writeln!(out, "Content-Length: {} bytes", response.body.len())?;
    writeln!(
        out,
        "First {} bytes: {}",
        PREVIEW_LEN,
        byte_literal(preview(&response.body))
    )
}

pub fn write_success(out: &mut impl Write, raster: &Raster) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} Image loaded: ({}, {})",
        SUCCESS_MARK, raster.width, raster.height
    )
}

/// Error message with its cause chain, then the trace captured where the error was created.
pub fn write_failure(out: &mut impl Write, err: &ProbeError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", ERROR_MARK, error_chain(err))?;
    writeln!(out, "Stack backtrace:")?;
    writeln!(out, "{}", err.backtrace())
}

/// `outer: cause: root cause`, like anyhow's `{:#}`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    anyhow::Chain::new(err)
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// First `min(PREVIEW_LEN, len)` bytes of `body`.
pub fn preview(body: &[u8]) -> &[u8] {
    &body[..body.len().min(PREVIEW_LEN)]
}

/// Renders bytes as a `b'...'` literal.
///
/// Printable ASCII is kept, `\\ \t \n \r` and the quote are escaped, anything
/// else becomes `\xNN`. Double quotes are used only when the bytes contain a
/// single quote and no double quote.
pub fn byte_literal(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut s = String::with_capacity(bytes.len() + 3);
    s.push('b');
    s.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => s.push_str("\\\\"),
            b'\t' => s.push_str("\\t"),
            b'\n' => s.push_str("\\n"),
            b'\r' => s.push_str("\\r"),
            _ if b == quote => {
                s.push('\\');
                s.push(b as char);
            }
            0x20..=0x7e => s.push(b as char),
            _ => {
                let _ = write!(s, "\\x{:02x}", b);
            }
        }
    }
    s.push(quote as char);
    s
}
