//! CLI for the dlprobe download diagnostic.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dlprobe_core::{DownloadProbe, ProbeOutcome, RequestDescriptor};
use std::io::{self, Write};

/// Downloads the compiled-in image once and reports whether it decodes.
#[derive(Debug, Parser)]
#[command(name = "dlprobe", version)]
#[command(about = "Fetch one image URL and check that the body decodes", long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Runs the probe against stdout.
    pub fn run(&self) -> Result<()> {
        let request = RequestDescriptor::compiled_in()?;
        let probe = DownloadProbe::new(request);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let outcome = probe.run(&mut out).context("writing report to stdout")?;
        out.flush().context("flushing stdout")?;

        match outcome {
            ProbeOutcome::Loaded(raster) => {
                tracing::debug!("probe done: {}x{}", raster.width, raster.height)
            }
            ProbeOutcome::Failed(stage) => tracing::debug!("probe done: failed at {:?}", stage),
        }
        Ok(())
    }
}
