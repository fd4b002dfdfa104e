//! Error types for the model converter

use thiserror::Error;

/// Failures the converter reports for a single document or override.
///
/// Neither variant aborts a batch: `MalformedInput` skips one file,
/// `UnsupportedReference` skips one override while the rest of the document
/// still converts. I/O failures belong to the pack layer, not here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The document is not valid JSON, or lacks the structure needed to
    /// build an output document.
    #[error("malformed item model: {reason}")]
    MalformedInput { reason: String },

    /// A model reference string violates the resolution grammar.
    #[error("unresolvable model reference '{reference}': {reason}")]
    UnsupportedReference { reference: String, reason: String },
}

impl ConvertError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ConvertError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn unsupported(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::UnsupportedReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}
