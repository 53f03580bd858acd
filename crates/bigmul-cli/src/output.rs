//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigInt;
use serde_json::{json, Value};

use bigmul_orchestration::BenchmarkReport;

/// Format a `BigInt` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigInt, verbose: bool) -> String {
    let s = value.to_string();
    let digits = s.trim_start_matches('-').len();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({digits} digits)", &s[..50], &s[s.len() - 50..])
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format fractional milliseconds as a duration.
#[must_use]
pub fn format_ms(ms: f64) -> String {
    format_duration(Duration::from_secs_f64(ms.max(0.0) / 1000.0))
}

/// Render benchmark reports as a pretty-printed JSON array.
///
/// Failed algorithms appear as `{"algorithm", "error"}` objects.
pub fn benchmarks_to_json(reports: &[BenchmarkReport]) -> serde_json::Result<String> {
    let entries = reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(result) => serde_json::to_value(result),
            Err(e) => Ok(json!({
                "algorithm": report.algorithm,
                "error": e.to_string(),
            })),
        })
        .collect::<serde_json::Result<Vec<Value>>>()?;
    serde_json::to_string_pretty(&entries)
}

/// Write text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
