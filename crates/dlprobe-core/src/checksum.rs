//! SHA-256 of a response body, for debug logging.
//!
//! Lets two runs against the same resource be compared from their logs without
//! dumping the body.

use sha2::{Digest, Sha256};

/// SHA-256 of `bytes` as lowercase hex.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
