//! Core orchestration: sequential benchmark runs and product cross-checks.

use std::sync::Arc;
use std::time::Instant;

use num_bigint::BigInt;
use tracing::{info, warn};

use bigmul_core::{Algorithm, CodecError, Multiplier, TestType};

use crate::interfaces::{BenchmarkReport, ProductResult};

/// Benchmark every algorithm on `data`, one after another.
///
/// A failing algorithm is recorded in its report and does not stop the others.
pub fn run_benchmarks(
    algorithms: &[Arc<dyn Algorithm>],
    data: &str,
    mode: TestType,
) -> Vec<BenchmarkReport> {
    algorithms
        .iter()
        .map(|algorithm| {
            let outcome = algorithm.benchmark(data, mode);
            match &outcome {
                Ok(result) => info!(
                    algorithm = algorithm.name(),
                    total_ms = result.total_time_ms,
                    decode_success = result.decode_success,
                    "benchmark complete"
                ),
                Err(e) => warn!(algorithm = algorithm.name(), error = %e, "benchmark failed"),
            }
            BenchmarkReport {
                algorithm: algorithm.name().to_string(),
                outcome,
            }
        })
        .collect()
}

/// Multiply `x` by `y` with every algorithm.
pub fn multiply_all(algorithms: &[Arc<dyn Algorithm>], x: &BigInt, y: &BigInt) -> Vec<ProductResult> {
    algorithms
        .iter()
        .map(|algorithm| {
            let start = Instant::now();
            let outcome = algorithm.multiply(x, y);
            let duration = start.elapsed();
            if let Err(e) = &outcome {
                warn!(algorithm = algorithm.name(), error = %e, "multiplication failed");
            }
            ProductResult {
                algorithm: algorithm.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that every successful product agrees.
pub fn analyze_products(results: &[ProductResult]) -> Result<(), CodecError> {
    let mut products = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = products.next() else {
        return Err(CodecError::Calculation("no valid results".into()));
    };

    if products.any(|p| p != first) {
        return Err(CodecError::Mismatch);
    }
    Ok(())
}
