/// Resample mono 16-bit PCM between fixed rates using linear interpolation.
///
/// Output length is `round(input_len * to_rate / from_rate)`. Each output
/// sample interpolates between the two nearest input samples; positions past
/// the last input sample repeat it. Equal rates return the input unchanged.
///
/// Quality is intentionally plain interpolation (no windowed-sinc filtering):
/// the only conversion performed live is 16 kHz speech up to 24 kHz, where
/// interpolation artifacts sit above the voice band.
pub fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let output_len = (samples.len() as f64 * ratio).round() as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let src_index = i as f64 / ratio;
        let lo = src_index.floor() as usize;
        let hi = (lo + 1).min(samples.len() - 1);
        let frac = src_index - lo as f64;
        let interpolated = samples[lo] as f64 * (1.0 - frac) + samples[hi] as f64 * frac;
        output.push(interpolated.round() as i16);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_rates_pass_through_unchanged() {
        let samples = vec![3, -7, 32767, -32768, 0];
        assert_eq!(resample(&samples, 24_000, 24_000), samples);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(resample(&[], 16_000, 24_000).is_empty());
    }

    #[test]
    fn upsample_interpolates_between_neighbors() {
        // ratio 1.5: source positions 0, 2/3, 4/3
        let output = resample(&[0, 300], 16_000, 24_000);
        assert_eq!(output, vec![0, 200, 300]);
    }

    #[test]
    fn positions_past_last_sample_repeat_it() {
        // ratio 2.0: source positions 0, 0.5, 1.0, 1.5 (clamped to index 1)
        let output = resample(&[0, 1000], 12_000, 24_000);
        assert_eq!(output, vec![0, 500, 1000, 1000]);
    }

    #[test]
    fn single_sample_expands_by_repetition() {
        assert_eq!(resample(&[700], 16_000, 24_000), vec![700, 700]);
    }

    #[test]
    fn output_length_is_rounded_ratio() {
        for (input_len, expected) in [(1, 2), (2, 3), (3, 5), (160, 240), (16_000, 24_000)] {
            let samples = vec![0i16; input_len];
            assert_eq!(
                resample(&samples, 16_000, 24_000).len(),
                expected,
                "input_len = {input_len}"
            );
        }
    }

    #[test]
    fn one_second_of_speech_rate_becomes_one_second_of_export_rate() {
        let samples: Vec<i16> = (0..16_000).map(|i| (i % 2000) as i16).collect();
        assert_eq!(resample(&samples, 16_000, 24_000).len(), 24_000);
    }
}
