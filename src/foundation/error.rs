/// Convenience result type used across segmix.
pub type SegmixResult<T> = Result<T, SegmixError>;

/// Top-level error taxonomy for the loading and geometry APIs.
///
/// The segment transform itself never returns these; it reports through the
/// host's [`crate::NotesSink`] and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum SegmixError {
    /// Invalid user-provided or ingest data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid studio configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A split layout was requested for a source count without a box table.
    #[error("unsupported split count {0}; expected 2, 3 or 4")]
    UnsupportedSplitCount(usize),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegmixError {
    /// Build a [`SegmixError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SegmixError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SegmixError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SegmixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
