//! Request Fingerprint Module
//!
//! Derives the cache key for a (resume, job description) pair.

use sha2::{Digest, Sha256};

// == Fingerprint ==
/// Builds a deterministic fingerprint for one analysis request.
///
/// SHA-256 over both inputs with length-prefixed framing, hex encoded.
/// The length prefixes keep the encoding injective: no pair of distinct
/// inputs can collapse onto the same byte stream the way a plain
/// separator join would allow (`("ab", "c")` vs `("a", "bc")`), and
/// swapping the two inputs always produces a different digest unless
/// they are equal. Identical inputs always produce identical keys.
///
/// This is a cache key, not a security boundary.
pub fn fingerprint(resume: &str, job_description: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update((resume.len() as u64).to_le_bytes());
    hasher.update(resume.as_bytes());
    hasher.update((job_description.len() as u64).to_le_bytes());
    hasher.update(job_description.as_bytes());
    format!("{:x}", hasher.finalize())
}
