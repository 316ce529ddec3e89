use serde::{Deserialize, Serialize};

/// Sample rate of every exported recording, in Hz.
///
/// Matches the agent stream's native rate; the customer stream is resampled
/// up to it before mixing or standalone export.
pub const EXPORT_SAMPLE_RATE: u32 = 24_000;

/// Which party a live audio stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    /// Synthesized assistant speech, delivered as raw PCM at 24 kHz.
    Agent,
    /// Caller microphone audio, delivered base64-encoded at 16 kHz.
    Customer,
}

impl StreamKind {
    /// Fixed capture rate of this stream in Hz.
    pub fn sample_rate(&self) -> u32 {
        match self {
            Self::Agent => 24_000,
            Self::Customer => 16_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Customer => "customer",
        }
    }
}

/// Which streams contributed to an exported recording.
///
/// Doubles as the tag embedded in exported file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordingVariant {
    #[serde(rename = "agent")]
    Agent,
    #[serde(rename = "customer")]
    Customer,
    #[serde(rename = "agent-customer")]
    AgentCustomer,
}

impl RecordingVariant {
    /// Derives the variant from which streams hold audio; `None` when neither
    /// does.
    pub fn from_presence(has_agent: bool, has_customer: bool) -> Option<Self> {
        match (has_agent, has_customer) {
            (true, true) => Some(Self::AgentCustomer),
            (true, false) => Some(Self::Agent),
            (false, true) => Some(Self::Customer),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Customer => "customer",
            Self::AgentCustomer => "agent-customer",
        }
    }
}

/// Diagnostics for debugging recording sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionDiagnostics {
    pub agent_chunks: u64,
    pub customer_chunks: u64,
    pub agent_samples: u64,
    pub customer_samples: u64,
    pub decode_failures: u64,
    pub exports_completed: u64,
}
