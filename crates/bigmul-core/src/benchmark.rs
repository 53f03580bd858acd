//! Single-algorithm encode/decode benchmark.

use num_bigint::BigInt;
use serde::Serialize;
use tracing::info;

use crate::algorithm::{Algorithm, CodecError};
use crate::constants::PREVIEW_LEN;

/// Which phases a benchmark times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    /// Time encoding only; decode is skipped.
    Encode,
    /// Time decoding only; the payload is still encoded first, off the clock.
    Decode,
    /// Time both phases.
    #[default]
    Both,
}

impl TestType {
    fn times_encode(self) -> bool {
        matches!(self, Self::Encode | Self::Both)
    }

    fn decodes(self) -> bool {
        matches!(self, Self::Decode | Self::Both)
    }
}

/// Outcome of one encode/decode run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Full algorithm name.
    pub algorithm_name: &'static str,
    /// Asymptotic time complexity label.
    pub time_complexity: &'static str,
    /// Asymptotic space complexity label.
    pub space_complexity: &'static str,
    /// Descriptive security label.
    pub security_level: &'static str,
    /// Algorithm description.
    pub description: &'static str,
    /// Phases that were timed.
    pub mode: TestType,
    /// Time spent encoding, in milliseconds.
    pub encode_time_ms: f64,
    /// Time spent decoding, in milliseconds.
    pub decode_time_ms: f64,
    /// Sum of both phases.
    pub total_time_ms: f64,
    /// Rough size of the encoded text in MiB.
    pub memory_estimate_mb: f64,
    /// Start of the encoded text.
    pub encoded_preview: String,
    /// Start of the decoded text.
    pub decoded_preview: String,
    /// Whether the decoded text starts with the input; true when decode was skipped.
    pub decode_success: bool,
}

/// Benchmark `algorithm` on `data` with a freshly generated key.
///
/// The private key is used for both directions.
pub fn run<A: Algorithm + ?Sized>(
    algorithm: &A,
    data: &str,
    mode: TestType,
) -> Result<BenchmarkResult, CodecError> {
    let keys = algorithm.generate_key_pair();
    run_with_key(algorithm, data, &keys.private_key, mode)
}

/// Benchmark `algorithm` on `data` with an explicit key.
pub fn run_with_key<A: Algorithm + ?Sized>(
    algorithm: &A,
    data: &str,
    key: &BigInt,
    mode: TestType,
) -> Result<BenchmarkResult, CodecError> {
    info!(algorithm = algorithm.name(), bytes = data.len(), ?mode, "running benchmark");

    let encoded = algorithm.encode_str(data, key)?;
    let encode_time_ms = if mode.times_encode() {
        encoded.elapsed_ms()
    } else {
        0.0
    };

    let (decoded, decode_time_ms) = if mode.decodes() {
        let decoded = algorithm.decode_str(&encoded.value, key)?;
        let elapsed = decoded.elapsed_ms();
        (Some(decoded.value), elapsed)
    } else {
        (None, 0.0)
    };

    let profile = algorithm.profile();

    Ok(BenchmarkResult {
        algorithm_name: profile.full_name,
        time_complexity: profile.time_complexity,
        space_complexity: profile.space_complexity,
        security_level: profile.security_level,
        description: profile.description,
        mode,
        encode_time_ms,
        decode_time_ms,
        total_time_ms: encode_time_ms + decode_time_ms,
        memory_estimate_mb: memory_estimate_mb(&encoded.value),
        encoded_preview: preview(&encoded.value),
        decoded_preview: decoded.as_deref().map(preview).unwrap_or_default(),
        decode_success: decoded.as_deref().map_or(true, |text| text.starts_with(data)),
    })
}

/// Two bytes per encoded character, in MiB.
#[allow(clippy::cast_precision_loss)]
fn memory_estimate_mb(encoded: &str) -> f64 {
    (encoded.len() * 2) as f64 / (1024.0 * 1024.0)
}

/// First [`PREVIEW_LEN`] characters, with `...` appended when cut.
#[must_use]
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Karatsuba, SchonhageStrassen, ToomCook3};

    #[test]
    fn preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(150);
        let p = preview(&long);
        assert_eq!(p.len(), PREVIEW_LEN + 3);
        assert!(p.ends_with("..."));
        assert_eq!(preview(&"é".repeat(100)), "é".repeat(100));
    }

    #[test]
    fn karatsuba_benchmark_round_trips() {
        let result = Karatsuba::new()
            .benchmark("benchmark payload", TestType::Both)
            .unwrap();
        assert!(result.decode_success);
        assert_eq!(result.decoded_preview, "benchmark payload");
        assert_eq!(result.algorithm_name, "Karatsuba Algorithm");
        assert!(result.total_time_ms >= result.encode_time_ms);
    }

    #[test]
    fn toom_benchmark_labels() {
        let result = ToomCook3::new().benchmark("abc", TestType::Both).unwrap();
        assert!(result.decode_success);
        assert_eq!(result.security_level, "High");
        assert_eq!(result.time_complexity, "O(n^log₃5) ≈ O(n^1.465)");
    }

    #[test]
    fn ssa_with_unit_key_round_trips() {
        let key = BigInt::from(1);
        let result =
            run_with_key(&SchonhageStrassen::new(), "Hello!", &key, TestType::Both).unwrap();
        assert!(result.decode_success);
        assert_eq!(result.encoded_preview, "48656c6c:6f210000");
    }

    #[test]
    fn memory_estimate() {
        let text = "a".repeat(1024 * 1024);
        assert!((memory_estimate_mb(&text) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_camel_case() {
        let result =
            run_with_key(&Karatsuba::new(), "Hi", &BigInt::from(17), TestType::Both).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithmName"], "Karatsuba Algorithm");
        assert_eq!(json["mode"], "both");
        assert_eq!(json["encodedPreview"], "4c8:6f9");
        assert_eq!(json["decodeSuccess"], true);
    }

    #[test]
    fn encode_only_skips_decode() {
        let key = BigInt::from(17);
        let result = run_with_key(&Karatsuba::new(), "Hi", &key, TestType::Encode).unwrap();
        assert_eq!(result.mode, TestType::Encode);
        assert_eq!(result.encoded_preview, "4c8:6f9");
        assert_eq!(result.decoded_preview, "");
        assert_eq!(result.decode_time_ms, 0.0);
        assert!(result.decode_success);
        assert!((result.total_time_ms - result.encode_time_ms).abs() < f64::EPSILON);
    }

    #[test]
    fn decode_only_times_decode() {
        let key = BigInt::from(17);
        let result = run_with_key(&ToomCook3::new(), "Hi", &key, TestType::Decode).unwrap();
        assert_eq!(result.encode_time_ms, 0.0);
        assert_eq!(result.encoded_preview, "4c8:6f9");
        assert_eq!(result.decoded_preview, "Hi");
        assert!(result.decode_success);
        assert!((result.total_time_ms - result.decode_time_ms).abs() < f64::EPSILON);
    }

    #[test]
    fn decode_only_reports_mismatch() {
        // SSA re-multiplies on decode, so a non-unit key garbles the text
        let key = BigInt::from(3);
        let result =
            run_with_key(&SchonhageStrassen::new(), "Hello!", &key, TestType::Decode).unwrap();
        assert!(!result.decode_success);
    }

    #[test]
    fn test_type_defaults_to_both() {
        assert_eq!(TestType::default(), TestType::Both);
        assert_eq!(serde_json::to_value(TestType::Encode).unwrap(), "encode");
    }
}
