//! Error types for scalar change segmentation

use serde::{Deserialize, Serialize};

/// Precondition failures raised by timelines and segmentation walks.
///
/// Every variant is reported before any part callback fires, so a failed call
/// never leaves a walk half-delivered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ChangeError {
    /// Timeline weight was zero, negative or not finite
    #[error("Invalid timeline weight: {weight} (must be a positive finite number)")]
    InvalidWeight { weight: f32 },

    /// Query against a timeline without entries
    #[error("Timeline has no entries")]
    EmptyTimeline,

    /// Window bounds are equal where a non-zero span is required
    #[error("Degenerate window: from {from} and to {to} span nothing")]
    DegenerateWindow { from: f32, to: f32 },

    /// Timeline definition could not be parsed
    #[error("Parse error: {reason}")]
    ParseError { reason: String },
}

impl ChangeError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidWeight { .. } | Self::EmptyTimeline => "timeline",
            Self::DegenerateWindow { .. } => "window",
            Self::ParseError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for ChangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            reason: err.to_string(),
        }
    }
}
