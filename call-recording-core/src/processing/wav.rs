use crate::models::error::RecordingError;

/// WAV serialization for exported recordings.
///
/// Every artifact is mono 16-bit PCM, so the header generator hardwires those
/// fields and the encoder produces the complete file image in memory. The
/// size fields are written once with their final values; nothing is patched
/// after the fact.
/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Channel count of every exported file.
const CHANNELS: u16 = 1;
/// Bits per sample of every exported file.
const BIT_DEPTH: u16 = 16;

/// Generate the 44-byte RIFF header for a mono 16-bit PCM file.
///
/// Format: PCM (format code 1), little-endian.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    file size - 8 (= 36 + data_size)
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  1 (channels, mono)
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * 2
/// [32-33]  2 (block align)
/// [34-35]  16 (bits per sample)
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
pub fn wav_header(sample_rate: u32, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * CHANNELS as u32 * BIT_DEPTH as u32 / 8;
    let block_align = CHANNELS * BIT_DEPTH / 8;
    let chunk_size = 36 + data_size;

    let mut header = [0u8; WAV_HEADER_SIZE];

    // RIFF chunk descriptor
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt sub-chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // PCM format size
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM format code
    header[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&BIT_DEPTH.to_le_bytes());

    // data sub-chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Serialize samples into a complete RIFF/WAVE byte stream.
///
/// Fails only when the data section is too large for the 32-bit RIFF size
/// fields; buffered sessions are far below that in practice.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, RecordingError> {
    let data_size = samples.len() as u64 * 2;
    if data_size > (u32::MAX - 36) as u64 {
        return Err(RecordingError::EncodingFailed(format!(
            "{data_size} byte data section exceeds the RIFF 32-bit size limit"
        )));
    }

    let mut bytes = Vec::with_capacity(WAV_HEADER_SIZE + data_size as usize);
    bytes.extend_from_slice(&wav_header(sample_rate, data_size as u32));
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_size_is_44_bytes() {
        let header = wav_header(24_000, 0);
        assert_eq!(header.len(), 44);
    }

    #[test]
    fn header_riff_magic() {
        let header = wav_header(24_000, 0);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
    }

    #[test]
    fn header_pcm_format() {
        let header = wav_header(24_000, 0);
        // Format code = 1 (PCM)
        assert_eq!(u16::from_le_bytes([header[20], header[21]]), 1);
        // fmt chunk size = 16
        assert_eq!(
            u32::from_le_bytes([header[16], header[17], header[18], header[19]]),
            16
        );
    }

    #[test]
    fn header_24khz_mono_16bit() {
        let header = wav_header(24_000, 9600);

        let channels = u16::from_le_bytes([header[22], header[23]]);
        assert_eq!(channels, 1);

        let sample_rate = u32::from_le_bytes([header[24], header[25], header[26], header[27]]);
        assert_eq!(sample_rate, 24_000);

        let byte_rate = u32::from_le_bytes([header[28], header[29], header[30], header[31]]);
        assert_eq!(byte_rate, 48_000); // 24000 * 1 * 16/8

        let block_align = u16::from_le_bytes([header[32], header[33]]);
        assert_eq!(block_align, 2); // 1 * 16/8

        let bit_depth = u16::from_le_bytes([header[34], header[35]]);
        assert_eq!(bit_depth, 16);

        let data_size = u32::from_le_bytes([header[40], header[41], header[42], header[43]]);
        assert_eq!(data_size, 9600);

        let chunk_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        assert_eq!(chunk_size, 36 + 9600);
    }

    #[test]
    fn encode_sizes_track_sample_count() {
        let bytes = encode_wav(&[0i16; 1000], 24_000).unwrap();
        assert_eq!(bytes.len(), 44 + 2000);

        let data_size = u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]);
        assert_eq!(data_size, 2000);
    }

    #[test]
    fn encode_empty_is_header_only() {
        let bytes = encode_wav(&[], 24_000).unwrap();
        assert_eq!(bytes.len(), 44);

        let data_size = u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]);
        assert_eq!(data_size, 0);
    }

    #[test]
    fn samples_follow_header_little_endian() {
        let bytes = encode_wav(&[0x1234, -1], 24_000).unwrap();
        assert_eq!(&bytes[44..48], &[0x34, 0x12, 0xFF, 0xFF]);
    }

    #[test]
    fn standard_reader_round_trips_the_stream() {
        let samples = vec![0i16, 1000, -1000, 32767, -32768, 42];
        let bytes = encode_wav(&samples, 24_000).unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24_000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }
}
