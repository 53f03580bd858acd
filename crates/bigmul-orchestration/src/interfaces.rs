//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigInt;

use bigmul_core::{BenchmarkResult, CodecError, KeyPair};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the product of one algorithm.
    fn present_product(&self, result: &ProductResult);

    /// Present the outcome of a product cross-check.
    fn present_agreement(&self, results: &[ProductResult], outcome: &Result<(), CodecError>);

    /// Present a generated key pair.
    fn present_keys(&self, algorithm: &str, keys: &KeyPair);

    /// Present one benchmark record per algorithm.
    fn present_benchmarks(&self, reports: &[BenchmarkReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct ProductResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<BigInt, CodecError>,
    /// Multiplication duration.
    pub duration: Duration,
}

/// Benchmark outcome for one algorithm.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Algorithm name.
    pub algorithm: String,
    /// The benchmark record or a structured error.
    pub outcome: Result<BenchmarkResult, CodecError>,
}

impl BenchmarkReport {
    /// Whether the benchmark completed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_result() {
        let result = ProductResult {
            algorithm: "Karatsuba".into(),
            outcome: Ok(BigInt::from(7_006_652)),
            duration: Duration::from_millis(1),
        };
        assert_eq!(result.algorithm, "Karatsuba");
        assert!(result.outcome.is_ok());
    }

    #[test]
    fn failed_report() {
        let report = BenchmarkReport {
            algorithm: "Schönhage-Strassen".into(),
            outcome: Err(CodecError::InvalidOperand("zero key".into())),
        };
        assert!(!report.is_ok());
    }
}
