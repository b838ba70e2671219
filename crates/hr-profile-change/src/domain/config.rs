//! # Subsystem Configuration

use serde::{Deserialize, Serialize};

/// Submission-time caps on raw input sizes.
///
/// These are transport hygiene, not semantic validation: the proposed
/// field and value are only checked against the allow-list at approval
/// time, but nothing is served by persisting megabytes of free text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangeRequestConfig {
    /// Maximum byte length of the encoded change stored in a request.
    pub max_encoded_bytes: usize,
    /// Maximum byte length of a submitter's or reviewer's reason.
    pub max_reason_bytes: usize,
}

impl Default for ChangeRequestConfig {
    fn default() -> Self {
        Self {
            max_encoded_bytes: 8 * 1024,
            max_reason_bytes: 2 * 1024,
        }
    }
}
