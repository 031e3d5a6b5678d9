//! Error types for frontlink operations.

use thiserror::Error;

/// Main error type for conversion and ingestion operations.
///
/// No variant is globally fatal: every failure is caught at the top of the
/// pipeline that produced it, reported through the host's notification sink,
/// and the session keeps dispatching events afterwards.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// There is no active document to resolve an attachment path against.
    /// Raised before anything is written.
    #[error("No active file!")]
    NoActiveDocument,

    /// The accessible label identifying the target property could not be
    /// found on the focused field. Fatal for the paste operation; the
    /// just-saved attachment is rolled back.
    #[error("property label not found on the focused field")]
    MissingPropertyLabel,

    /// The host's frontmatter transform failed (for example because the
    /// document changed concurrently or its frontmatter is invalid).
    #[error("frontmatter update failed: {message}")]
    MetadataWrite { message: String },

    /// Persisting the attachment bytes failed. Nothing was created, so no
    /// rollback is needed.
    #[error("attachment write failed: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type alias for frontlink operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
