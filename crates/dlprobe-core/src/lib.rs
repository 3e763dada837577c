pub mod config;
pub mod logging;

pub mod checksum;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod probe;
pub mod report;

pub use config::RequestDescriptor;
pub use error::{NetworkErrorKind, ProbeError};
pub use probe::{DownloadProbe, FailureStage, ProbeOutcome};
