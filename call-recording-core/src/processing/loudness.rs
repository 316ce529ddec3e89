/// Full-scale divisor mapping 16-bit samples onto [-1.0, 1.0).
const FULL_SCALE: f64 = 32768.0;

/// RMS level of a sample sequence, normalized so full scale is 1.0.
///
/// Returns 0.0 for empty input.
pub fn rms_level(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = samples
        .iter()
        .map(|&s| {
            let v = s as f64 / FULL_SCALE;
            v * v
        })
        .sum();
    (sum_of_squares / samples.len() as f64).sqrt()
}

/// Rescale samples so their RMS level matches `target_rms` (normalized,
/// 0.0 < target <= 1.0).
///
/// Digital silence and empty input are returned unchanged: silence carries no
/// loudness to match, and amplifying it would only raise the noise floor.
/// The gain is peak-unaware, so spiky input can clip; every sample is clamped
/// to the 16-bit range before rounding.
pub fn normalize_rms(samples: &[i16], target_rms: f64) -> Vec<i16> {
    let current = rms_level(samples);
    if current == 0.0 {
        return samples.to_vec();
    }

    let gain = target_rms / current;
    samples
        .iter()
        .map(|&s| (s as f64 * gain).clamp(-32768.0, 32767.0).round() as i16)
        .collect()
}
