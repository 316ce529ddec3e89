use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use crate::models::audio_models::{
    RecordingVariant, SessionDiagnostics, StreamKind, EXPORT_SAMPLE_RATE,
};
use crate::models::config::RecorderConfig;
use crate::models::error::RecordingError;
use crate::models::recording_result::{build_file_name, EncodedRecording, RecordingMetadata};
use crate::models::state::SessionPhase;
use crate::processing::chunk_buffer::ChunkBuffer;
use crate::processing::mix::mix;
use crate::processing::resample::resample;
use crate::processing::wav::encode_wav;

/// Internal mutable session state, protected by `parking_lot::Mutex`.
struct SessionState {
    phase: SessionPhase,
    diagnostics: SessionDiagnostics,
}

impl SessionState {
    fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            diagnostics: SessionDiagnostics::default(),
        }
    }
}

/// Transport-agnostic recording orchestrator for one live voice session.
///
/// Buffers both parties' chunk streams for the lifetime of the session and
/// reconstructs a single downloadable file on demand:
/// ```text
/// push_agent_audio ───→ [agent ChunkBuffer, 24 kHz] ──────────────────┐
/// push_customer_audio → [customer ChunkBuffer, 16 kHz] → resample ×1.5┤
///                                                                     ↓
///                                       export(): mix → mono WAV bytes
/// ```
/// Handles are cheap to clone and share one session: the transport layer
/// feeds chunk events while the UI keeps its own handle for export.
#[derive(Clone)]
pub struct SessionRecorder {
    config: Arc<RecorderConfig>,
    agent_stream: Arc<Mutex<ChunkBuffer>>,
    customer_stream: Arc<Mutex<ChunkBuffer>>,
    session_state: Arc<Mutex<SessionState>>,
}

impl SessionRecorder {
    /// Create a recorder in the idle phase with empty streams.
    pub fn new(config: RecorderConfig) -> Result<Self, RecordingError> {
        config
            .validate()
            .map_err(RecordingError::InvalidConfiguration)?;

        Ok(Self {
            config: Arc::new(config),
            agent_stream: Arc::new(Mutex::new(ChunkBuffer::new())),
            customer_stream: Arc::new(Mutex::new(ChunkBuffer::new())),
            session_state: Arc::new(Mutex::new(SessionState::new())),
        })
    }

    /// Begin a live session: discard previously buffered audio and start
    /// accepting chunks. Valid from any phase.
    pub fn begin_session(&self) {
        self.agent_stream.lock().clear();
        self.customer_stream.lock().clear();
        {
            let mut state = self.session_state.lock();
            state.phase = SessionPhase::Recording;
            state.diagnostics = SessionDiagnostics::default();
        }
        log::info!("recording session started, previous audio discarded");
    }

    /// The live connection ended: stop accepting chunks but keep everything
    /// captured so far, so the recording stays exportable.
    pub fn mark_disconnected(&self) {
        let mut state = self.session_state.lock();
        if state.phase.is_recording() {
            state.phase = SessionPhase::Disconnected;
            log::info!(
                "recording session disconnected after {} agent / {} customer chunks",
                state.diagnostics.agent_chunks,
                state.diagnostics.customer_chunks
            );
        }
    }

    /// Append one agent chunk: raw little-endian PCM16 bytes at 24 kHz.
    pub fn push_agent_audio(&self, pcm: &[u8]) {
        if !self.accepting(StreamKind::Agent) {
            return;
        }
        self.append_decoded(StreamKind::Agent, pcm);
    }

    /// Append one customer chunk: base64-encoded little-endian PCM16 at
    /// 16 kHz. An undecodable chunk is dropped and the session keeps going.
    pub fn push_customer_audio(&self, encoded: &str) {
        if !self.accepting(StreamKind::Customer) {
            return;
        }
        match BASE64.decode(encoded) {
            Ok(bytes) => self.append_decoded(StreamKind::Customer, &bytes),
            Err(e) => self.record_decode_failure(
                StreamKind::Customer,
                &RecordingError::ChunkDecode(format!("invalid base64: {e}")),
            ),
        }
    }

    /// Build the downloadable recording from everything captured so far.
    ///
    /// Works in any phase and never consumes the streams: each is copied in
    /// full under a brief lock, so chunks racing with a mid-session export
    /// simply land in the next one.
    pub fn export(&self) -> Result<EncodedRecording, RecordingError> {
        let agent = self.agent_stream.lock().concat();
        let customer = self.customer_stream.lock().concat();

        let variant = RecordingVariant::from_presence(!agent.is_empty(), !customer.is_empty())
            .ok_or(RecordingError::NoAudioCaptured)?;

        // The agent stream is already at the export rate and passes through
        // untouched; only the customer stream is resampled.
        let samples = match variant {
            RecordingVariant::Agent => agent,
            RecordingVariant::Customer => resample(
                &customer,
                StreamKind::Customer.sample_rate(),
                EXPORT_SAMPLE_RATE,
            ),
            RecordingVariant::AgentCustomer => {
                let customer_upsampled = resample(
                    &customer,
                    StreamKind::Customer.sample_rate(),
                    EXPORT_SAMPLE_RATE,
                );
                mix(&agent, &customer_upsampled)
            }
        };

        let wav_bytes = match encode_wav(&samples, EXPORT_SAMPLE_RATE) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("failed to encode recording: {}", e);
                return Err(e);
            }
        };

        let checksum = sha256_hex(&wav_bytes);
        let metadata =
            RecordingMetadata::new(variant, EXPORT_SAMPLE_RATE, samples.len(), &checksum);
        let file_name = build_file_name(&self.config.filename_prefix, variant, chrono::Utc::now());

        self.session_state.lock().diagnostics.exports_completed += 1;
        log::info!(
            "exported {} recording: {} samples, {} bytes, {}",
            variant.as_str(),
            samples.len(),
            wav_bytes.len(),
            file_name
        );

        Ok(EncodedRecording {
            wav_bytes,
            file_name,
            variant,
            sample_rate: EXPORT_SAMPLE_RATE,
            metadata,
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.session_state.lock().phase
    }

    /// Snapshot of the ingestion counters.
    pub fn diagnostics(&self) -> SessionDiagnostics {
        self.session_state.lock().diagnostics
    }

    /// Whether both streams are empty.
    pub fn is_empty(&self) -> bool {
        self.agent_stream.lock().is_empty() && self.customer_stream.lock().is_empty()
    }

    // --- Internal helpers ---

    fn accepting(&self, kind: StreamKind) -> bool {
        let recording = self.session_state.lock().phase.is_recording();
        if !recording {
            log::debug!("ignoring {} chunk outside an active session", kind.as_str());
        }
        recording
    }

    fn append_decoded(&self, kind: StreamKind, pcm: &[u8]) {
        let stream = match kind {
            StreamKind::Agent => &self.agent_stream,
            StreamKind::Customer => &self.customer_stream,
        };

        match stream.lock().push_pcm_bytes(pcm) {
            Ok(0) => {} // an empty payload appends nothing and is not counted
            Ok(appended) => {
                let mut state = self.session_state.lock();
                let diag = &mut state.diagnostics;
                match kind {
                    StreamKind::Agent => {
                        diag.agent_chunks += 1;
                        diag.agent_samples += appended as u64;
                    }
                    StreamKind::Customer => {
                        diag.customer_chunks += 1;
                        diag.customer_samples += appended as u64;
                    }
                }
            }
            Err(e) => self.record_decode_failure(kind, &e),
        }
    }

    fn record_decode_failure(&self, kind: StreamKind, error: &RecordingError) {
        self.session_state.lock().diagnostics.decode_failures += 1;
        log::warn!("dropping {} chunk: {}", kind.as_str(), error);
    }
}

/// SHA-256 hex digest of a finished artifact.
fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
