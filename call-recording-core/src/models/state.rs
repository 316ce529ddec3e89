/// Recording session state machine.
///
/// Phase transitions:
/// ```text
/// idle → recording → disconnected
///           ↑______________|
/// ```
/// `begin_session` enters `Recording` from any phase and clears buffered
/// audio. `mark_disconnected` stops ingestion but keeps captured audio, so
/// export stays available after the live connection drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Recording,
    Disconnected,
}

impl SessionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}
