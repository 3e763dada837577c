//! The probe: one GET, one decode attempt, one report.

use crate::checksum;
use crate::config::RequestDescriptor;
use crate::decode::{self, Raster};
use crate::error::ProbeError;
use crate::fetch;
use crate::report;
use std::io::{self, Write};
use tracing::Level;

/// Which step the probe stopped at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// No response at all; the summary block was not printed.
    Network,
    /// A response arrived but its body is not an image.
    Decode,
}

/// How a probe run ended. The binary ignores it; it exists for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Loaded(Raster),
    Failed(FailureStage),
}

impl ProbeOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ProbeOutcome::Loaded(_))
    }
}

#[derive(Debug, Clone)]
pub struct DownloadProbe {
    request: RequestDescriptor,
}

impl DownloadProbe {
    pub fn new(request: RequestDescriptor) -> Self {
        Self { request }
    }

    /// Runs the probe, writing the report to `out`.
    ///
    /// Fetch and decode failures are reported, not returned: the only `Err`
    /// is a failure to write to `out`.
    pub fn run(&self, out: &mut impl Write) -> io::Result<ProbeOutcome> {
        report::write_banner(out, self.request.url.as_str())?;

        let response = match fetch::fetch(&self.request) {
            Ok(response) => response,
            Err(err) => return fail(out, err),
        };
        if tracing::enabled!(Level::DEBUG) {
            tracing::debug!(
                sha256 = %checksum::sha256_bytes(&response.body),
                "response body digest"
            );
        }
        report::write_response_summary(out, &response)?;

        match decode::decode_image(&response.body) {
            Ok(raster) => {
                tracing::info!(
                    width = raster.width,
                    height = raster.height,
                    format = ?raster.format,
                    "image decoded"
                );
                report::write_success(out, &raster)?;
                Ok(ProbeOutcome::Loaded(raster))
            }
            Err(err) => fail(out, err),
        }
    }
}

/// The single catch boundary: report `err` and its trace, then finish normally.
fn fail(out: &mut impl Write, err: ProbeError) -> io::Result<ProbeOutcome> {
    let stage = if err.is_network() {
        FailureStage::Network
    } else {
        FailureStage::Decode
    };
    tracing::info!("probe failed: {}", report::error_chain(&err));
    report::write_failure(out, &err)?;
    Ok(ProbeOutcome::Failed(stage))
}
