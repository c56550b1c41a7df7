//! Typed error raised when a URL is classified as malicious.

use thiserror::Error;

/// Fixed message carried by every [`MalwareUrlError`].
pub const MALWARE_URL_MESSAGE: &str = "Malware URL Found";

/// Error value signaling that a URL's domain was judged malicious.
///
/// Constructed by screening code at the point of detection and propagated
/// unmodified to a boundary handler; nothing in this crate catches it.
/// The domain string is stored as-is with no validation or normalization,
/// so empty or malformed input is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malware URL Found: {domain}")]
pub struct MalwareUrlError {
    domain: String,
}

impl MalwareUrlError {
    /// Creates the error for the given offending domain.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    /// The domain judged malicious, exactly as supplied.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The fixed message, [`MALWARE_URL_MESSAGE`].
    pub fn message(&self) -> &'static str {
        MALWARE_URL_MESSAGE
    }
}
