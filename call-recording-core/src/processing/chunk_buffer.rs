use crate::models::error::RecordingError;

/// Append-only chunk store for one audio stream.
///
/// Chunks arrive in order from a single live connection and are kept exactly
/// as ingested: never reordered, split, merged, or dropped. Wrap in
/// `Arc<parking_lot::Mutex<ChunkBuffer>>` for cross-thread access; export
/// takes a contiguous copy via [`ChunkBuffer::concat`].
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunks: Vec<Vec<i16>>,
    sample_count: usize,
}

impl ChunkBuffer {
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            sample_count: 0,
        }
    }

    /// Append one decoded chunk. Empty chunks are a no-op.
    pub fn push(&mut self, samples: Vec<i16>) {
        if samples.is_empty() {
            return;
        }
        self.sample_count += samples.len();
        self.chunks.push(samples);
    }

    /// Decode a little-endian PCM16 byte buffer and append it as one chunk.
    ///
    /// Returns the number of samples appended. The bytes must hold a whole
    /// number of samples; an odd byte count rejects the entire chunk.
    pub fn push_pcm_bytes(&mut self, bytes: &[u8]) -> Result<usize, RecordingError> {
        let samples = decode_pcm16_le(bytes)?;
        let appended = samples.len();
        self.push(samples);
        Ok(appended)
    }

    /// Concatenate all chunks, in arrival order, into one contiguous sequence.
    pub fn concat(&self) -> Vec<i16> {
        let mut all = Vec::with_capacity(self.sample_count);
        for chunk in &self.chunks {
            all.extend_from_slice(chunk);
        }
        all
    }

    /// Total samples across all chunks.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of chunks appended so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the buffer holds any audio.
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Drop all buffered audio (start of a new session).
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.sample_count = 0;
    }
}

/// Reinterpret little-endian PCM16 bytes as samples.
pub fn decode_pcm16_le(bytes: &[u8]) -> Result<Vec<i16>, RecordingError> {
    if bytes.len() % 2 != 0 {
        return Err(RecordingError::ChunkDecode(format!(
            "byte length {} is not a whole number of 16-bit samples",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_preserves_arrival_order() {
        let mut buf = ChunkBuffer::new();
        buf.push(vec![1, 2, 3]);
        buf.push(vec![4]);
        buf.push(vec![5, 6]);

        assert_eq!(buf.concat(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.sample_count(), 6);
        assert_eq!(buf.chunk_count(), 3);
    }

    #[test]
    fn empty_chunk_is_noop() {
        let mut buf = ChunkBuffer::new();
        buf.push(Vec::new());

        assert!(buf.is_empty());
        assert_eq!(buf.chunk_count(), 0);

        let appended = buf.push_pcm_bytes(&[]).unwrap();
        assert_eq!(appended, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn pcm_bytes_decode_little_endian() {
        let mut buf = ChunkBuffer::new();
        // 0x1234, -1, i16::MIN
        let bytes = [0x34, 0x12, 0xFF, 0xFF, 0x00, 0x80];
        let appended = buf.push_pcm_bytes(&bytes).unwrap();

        assert_eq!(appended, 3);
        assert_eq!(buf.concat(), vec![0x1234, -1, i16::MIN]);
    }

    #[test]
    fn odd_byte_count_rejects_whole_chunk() {
        let mut buf = ChunkBuffer::new();
        let err = buf.push_pcm_bytes(&[0x01, 0x02, 0x03]).unwrap_err();

        assert!(matches!(err, RecordingError::ChunkDecode(_)));
        assert!(buf.is_empty()); // nothing from the bad chunk was kept
    }

    #[test]
    fn clear_resets_everything() {
        let mut buf = ChunkBuffer::new();
        buf.push(vec![1, 2, 3]);
        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.sample_count(), 0);
        assert_eq!(buf.chunk_count(), 0);
        assert!(buf.concat().is_empty());
    }

    #[test]
    fn growth_is_unbounded_until_cleared() {
        let mut buf = ChunkBuffer::new();
        for i in 0..1000 {
            buf.push(vec![i as i16; 10]);
        }

        assert_eq!(buf.sample_count(), 10_000);
        assert_eq!(buf.concat().len(), 10_000);
    }
}
