/// Configuration for a session recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Prefix of exported file names: `<prefix>-<variant>-<timestamp>.wav`
    /// (default: "call").
    pub filename_prefix: String,
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.filename_prefix.is_empty() {
            return Err("filename prefix must not be empty".into());
        }
        if self
            .filename_prefix
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':' | '.') || c.is_whitespace())
        {
            return Err(format!(
                "filename prefix contains unsafe characters: {:?}",
                self.filename_prefix
            ));
        }
        Ok(())
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            filename_prefix: "call".into(),
        }
    }
}
