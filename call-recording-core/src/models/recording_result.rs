use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::audio_models::RecordingVariant;

/// MIME type of every exported artifact.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Result returned when an export completes successfully.
///
/// `wav_bytes` is the complete file image; the host application decides what
/// to do with it (trigger a browser download, upload it, write it to disk).
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRecording {
    pub wav_bytes: Vec<u8>,
    pub file_name: String,
    pub variant: RecordingVariant,
    pub sample_rate: u32,
    pub metadata: RecordingMetadata,
}

/// Metadata handed to the host application alongside a recording.
///
/// Serializable for JSON export to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    pub id: String,
    pub variant: RecordingVariant,
    pub sample_rate: u32,
    pub sample_count: usize,
    pub duration_secs: f64,
    pub checksum: String,
    pub created_at: String,
    pub mime_type: String,
}

impl RecordingMetadata {
    pub fn new(
        variant: RecordingVariant,
        sample_rate: u32,
        sample_count: usize,
        checksum: &str,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            variant,
            sample_rate,
            sample_count,
            duration_secs: sample_count as f64 / sample_rate as f64,
            checksum: checksum.to_string(),
            created_at: Utc::now().to_rfc3339(),
            mime_type: WAV_MIME_TYPE.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the download file name `<prefix>-<variant>-<timestamp>.wav`.
pub fn build_file_name(prefix: &str, variant: RecordingVariant, at: DateTime<Utc>) -> String {
    format!(
        "{}-{}-{}.wav",
        prefix,
        variant.as_str(),
        filesystem_timestamp(at)
    )
}

/// ISO 8601 timestamp made filesystem-safe: colons and periods replaced with
/// hyphens so the name survives every mainstream OS and browser download path.
fn filesystem_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}
