//! # call-recording-core
//!
//! Transport-agnostic recording core for live voice sessions.
//!
//! Two independently sampled streams arrive as ordered chunks over a live
//! connection: synthesized agent speech (raw PCM16 at 24 kHz) and the
//! customer microphone (base64-encoded PCM16 at 16 kHz). This crate buffers
//! both for the lifetime of a session and reconstructs a single downloadable
//! mono WAV on demand, resampling and loudness-matching so both parties are
//! audible. The live transport and the UI are external collaborators that
//! each hold a [`SessionRecorder`] handle.
//!
//! ## Architecture
//!
//! ```text
//! call-recording-core (this crate)
//! ├── models/       ← RecordingError, SessionPhase, RecorderConfig, EncodedRecording, etc.
//! ├── processing/   ← ChunkBuffer, resampling, loudness matching, mixing, WAV encoding
//! └── session/      ← SessionRecorder (orchestrator)
//! ```

pub mod models;
pub mod processing;
pub mod session;

// Re-export key types at crate root for convenience.
pub use models::audio_models::{
    RecordingVariant, SessionDiagnostics, StreamKind, EXPORT_SAMPLE_RATE,
};
pub use models::config::RecorderConfig;
pub use models::error::RecordingError;
pub use models::recording_result::{EncodedRecording, RecordingMetadata, WAV_MIME_TYPE};
pub use models::state::SessionPhase;
pub use processing::chunk_buffer::ChunkBuffer;
pub use session::recorder::SessionRecorder;
