use super::loudness::normalize_rms;

/// RMS loudness both parties are matched to before summing.
///
/// The quieter live source (typically the customer microphone, captured far
/// below the synthesized voice) must stay audible next to the agent, and
/// 0.25 leaves the equal-weight sum headroom inside the 16-bit range.
pub const MIX_TARGET_RMS: f64 = 0.25;

/// Mix two mono sequences at the same sample rate into one.
///
/// Both inputs are independently normalized to [`MIX_TARGET_RMS`], the
/// shorter is zero-padded at the tail, and each output sample is the
/// 0.5-weighted sum, rounded and clamped to the 16-bit range. Output length
/// is the longer input's length.
pub fn mix(a: &[i16], b: &[i16]) -> Vec<i16> {
    let norm_a = normalize_rms(a, MIX_TARGET_RMS);
    let norm_b = normalize_rms(b, MIX_TARGET_RMS);

    let out_len = norm_a.len().max(norm_b.len());
    let mut mixed = Vec::with_capacity(out_len);

    for i in 0..out_len {
        let sa = norm_a.get(i).copied().unwrap_or(0) as f64;
        let sb = norm_b.get(i).copied().unwrap_or(0) as f64;
        let sample = ((sa + sb) * 0.5).round().clamp(-32768.0, 32767.0);
        mixed.push(sample as i16);
    }

    mixed
}
