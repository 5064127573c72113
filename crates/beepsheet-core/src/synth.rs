//! Deterministic beep tone synthesis.
//!
//! Generates the fixed placeholder tone every clip is rendered as: an 80 Hz
//! sine sampled at 100 Hz, quantized to unsigned 8-bit. The sample rate is
//! intentionally far below audio-quality rates; these are placeholder/test
//! tones, not usable audio.
//!
//! The quantization truncates the floating-point sine value toward zero and
//! wraps it into a u8 (numpy `astype(uint8)` semantics) instead of doing
//! proper PCM scaling. That yields a degenerate, clipped waveform, which is
//! the reference behavior and must be reproduced bit-for-bit.

use std::f64::consts::TAU;

use crate::wav::{write_wav_to_vec, WavFormat};

/// Sine tone frequency in Hz.
pub const TONE_FREQUENCY_HZ: f64 = 80.0;

/// Output sample rate in samples per second.
pub const SAMPLE_RATE_HZ: u32 = 100;

/// A rendered beep: complete WAV bytes plus a hash of the raw samples.
#[derive(Debug, Clone)]
pub struct BeepResult {
    /// Complete WAV file bytes (header + samples).
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the sample bytes only (determinism checks).
    pub pcm_hash: String,
    /// Number of samples.
    pub num_samples: usize,
}

impl BeepResult {
    /// Rendered duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / SAMPLE_RATE_HZ as f64
    }
}

/// Number of samples for a given duration: `floor(sample_rate * duration)`.
/// Negative durations clamp to zero samples.
pub fn sample_count(duration_seconds: f64) -> usize {
    let count = (SAMPLE_RATE_HZ as f64 * duration_seconds).floor();
    if count <= 0.0 {
        0
    } else {
        count as usize
    }
}

/// Quantizes one sine value to unsigned 8-bit.
///
/// Truncation toward zero, then wrap modulo 256: -1.0 becomes 255, anything
/// in (-1, 1) becomes 0, 1.0 becomes 1.
fn quantize(sample: f64) -> u8 {
    (sample as i64) as u8
}

/// Generates the sample bytes for a beep of the given duration.
///
/// Sample `i` is `sin(2π * i * 80 / 100)` quantized via [`quantize`]. Pure
/// function of the duration; no randomness, no external state.
pub fn beep_samples(duration_seconds: f64) -> Vec<u8> {
    let count = sample_count(duration_seconds);
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let phase = TAU * i as f64 * TONE_FREQUENCY_HZ / SAMPLE_RATE_HZ as f64;
        samples.push(quantize(phase.sin()));
    }
    samples
}

/// Renders a complete beep WAV for the given duration.
pub fn render_beep(duration_seconds: f64) -> BeepResult {
    let samples = beep_samples(duration_seconds);
    let pcm_hash = blake3::hash(&samples).to_hex().to_string();
    let wav_data = write_wav_to_vec(&WavFormat::mono8(SAMPLE_RATE_HZ), &samples);

    BeepResult {
        wav_data,
        pcm_hash,
        num_samples: samples.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_count_law() {
        assert_eq!(sample_count(5.0), 500);
        assert_eq!(sample_count(2.5), 250);
        assert_eq!(sample_count(0.999), 99);
        assert_eq!(sample_count(0.0), 0);
        assert_eq!(sample_count(-1.0), 0);
        assert_eq!(sample_count(0.009), 0);
    }

    #[test]
    fn test_first_sample_is_zero() {
        let samples = beep_samples(1.0);
        // sin(0) == 0.0, trunc -> 0
        assert_eq!(samples[0], 0);
    }

    #[test]
    fn test_truncation_zeroes_fractional_sine_values() {
        // With f=80 and sr=100 the sine never hits exactly +/-1, so every
        // sample truncates to 0.
        let samples = beep_samples(2.0);
        assert_eq!(samples.len(), 200);
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_quantize_wraps_like_uint8_cast() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.951), 0);
        assert_eq!(quantize(-0.951), 0);
        assert_eq!(quantize(1.0), 1);
        assert_eq!(quantize(-1.0), 255);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_beep(1.5);
        let b = render_beep(1.5);
        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(a.wav_data, b.wav_data);
    }

    #[test]
    fn test_render_wav_shape() {
        let result = render_beep(5.0);
        assert_eq!(result.num_samples, 500);
        assert_eq!(result.wav_data.len(), 44 + 500);
        assert_eq!(&result.wav_data[0..4], b"RIFF");
        assert_eq!(&result.wav_data[8..12], b"WAVE");
        assert_eq!(result.duration_seconds(), 5.0);
    }

    #[test]
    fn test_zero_duration_renders_empty_file() {
        let result = render_beep(0.0);
        assert_eq!(result.num_samples, 0);
        assert_eq!(result.wav_data.len(), 44);
    }

    #[test]
    fn test_pcm_hash_format() {
        let result = render_beep(0.5);
        assert_eq!(result.pcm_hash.len(), 64);
        assert!(result.pcm_hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
