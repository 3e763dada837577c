//! Compiled-in request descriptor.
//!
//! The probe has no runtime configuration: the URL, the header set and the
//! timeout are constants. The descriptor is still a value so the library can be
//! pointed at a local server in tests.

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Image fetched by the probe.
pub const PROBE_URL: &str = "https://ssfiahbvlzepvddglawo.supabase.co/storage/v1/object/public/images/4aaa14222152-Screenshot_20250922_183517.jpg";

/// Browser-like User-Agent; some storage fronts reject the libcurl default.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound on the whole request (connect + transfer).
pub const TIMEOUT: Duration = Duration::from_secs(30);

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: u32 = 30;

/// Number of body bytes echoed in the report.
pub const PREVIEW_LEN: usize = 200;

/// Everything needed to issue the probe's single GET.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    /// Extra request headers, sent in order.
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub max_redirects: u32,
}

impl RequestDescriptor {
    /// Descriptor for `url` with the standard header set and timeout.
    pub fn for_url(url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid URL: {}", url))?;
        Ok(Self {
            url,
            headers: vec![("User-Agent".to_string(), USER_AGENT.to_string())],
            timeout: TIMEOUT,
            max_redirects: MAX_REDIRECTS,
        })
    }

    /// The descriptor the `dlprobe` binary runs with.
    pub fn compiled_in() -> Result<Self> {
        Self::for_url(PROBE_URL)
    }

    /// Replaces the total timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
