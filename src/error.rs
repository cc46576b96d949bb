//! Error taxonomy for the conversion pipeline.

use thiserror::Error;

/// Failure modes surfaced by [`crate::convert`].
///
/// Rendering and splitting are pure, so any `ProcessingFailed` is either a
/// programming defect or invalid input; nothing here is transient and no
/// retries are performed.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input string was empty.
    #[error("input cannot be empty")]
    InvalidInput,

    /// An internal fault during tokenization, rendering or splitting,
    /// including a caught panic in a rendering worker.
    #[error("processing failed: {message}")]
    ProcessingFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reserved for a hard limit violation that splitting cannot resolve.
    #[error("message exceeds the maximum length")]
    MessageTooLong,
}

impl ConvertError {
    pub(crate) fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingFailed {
            message: message.into(),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
