use clap::Parser;
use dlprobe_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logging is best-effort; the report goes to stdout either way.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("dlprobe: {:#}", err);
    }

    // Probe failures are part of the report and exit 0; only a broken stdout lands here.
    if let Err(err) = cli.run() {
        eprintln!("dlprobe error: {:#}", err);
        std::process::exit(1);
    }
}
