use thiserror::Error;

/// Errors that can occur while buffering or exporting session audio.
///
/// Only `ChunkDecode` is raised during live ingestion, and the recorder
/// recovers from it by dropping the offending chunk. The remaining variants
/// surface from `export` and leave buffered audio untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordingError {
    #[error("chunk decode failed: {0}")]
    ChunkDecode(String),

    #[error("no audio captured")]
    NoAudioCaptured,

    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
