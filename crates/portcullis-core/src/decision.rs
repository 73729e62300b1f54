//! Decision returned to the caller for one request

use serde::{Deserialize, Serialize};

/// Result of evaluating a rule set
///
/// An explicit allow is reported as `Decline`: the caller proceeds exactly as
/// if access control had no opinion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "status", rename_all = "lowercase")]
pub enum Decision {
    /// No opinion; the caller applies its own default policy
    Decline,

    /// Reject the request with this status code
    Deny(u16),
}

impl Decision {
    /// Whether the caller must reject the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, Decision::Deny(_))
    }

    /// Status code to reject with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Decision::Deny(status) => Some(*status),
            Decision::Decline => None,
        }
    }
}
