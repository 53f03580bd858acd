//! CLI result presenter.

use bigmul_core::{CodecError, KeyPair};
use bigmul_orchestration::interfaces::{BenchmarkReport, ProductResult, ResultPresenter};

use crate::output::{format_duration, format_ms, format_result};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

/// Names of the algorithms whose decoded text did not start with the input.
fn decode_mismatches(reports: &[BenchmarkReport]) -> Vec<&'static str> {
    reports
        .iter()
        .filter_map(|report| report.outcome.as_ref().ok())
        .filter(|r| !r.decode_success)
        .map(|r| r.algorithm_name)
        .collect()
}

impl ResultPresenter for CLIResultPresenter {
    fn present_product(&self, result: &ProductResult) {
        match &result.outcome {
            Ok(product) if self.quiet => println!("{product}"),
            Ok(product) => {
                println!("Algorithm: {}", result.algorithm);
                println!("Duration: {}", format_duration(result.duration));
                if self.verbose {
                    println!("Product bits: {}", product.bits());
                }
                println!("Product = {}", format_result(product, self.verbose));
            }
            Err(e) => self.present_error(&format!("{}: {e}", result.algorithm)),
        }
    }

    fn present_agreement(&self, results: &[ProductResult], outcome: &Result<(), CodecError>) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
        match outcome {
            Ok(()) => ui::print_success("all products agree"),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn present_keys(&self, algorithm: &str, keys: &KeyPair) {
        if self.quiet {
            println!("{} {}", keys.public_key, keys.private_key);
            return;
        }
        println!("Algorithm: {algorithm}");
        println!("Public key:  {}", keys.public_key);
        println!("Private key: {}", keys.private_key);
    }

    fn present_benchmarks(&self, reports: &[BenchmarkReport]) {
        if self.quiet {
            for report in reports {
                match &report.outcome {
                    Ok(r) => println!("{}\t{:.3}", report.algorithm, r.total_time_ms),
                    Err(e) => println!("{}\terror: {e}", report.algorithm),
                }
            }
            return;
        }

        ui::print_header("Benchmark Results");
        println!(
            "  {:<30} {:>10} {:>10} {:>10} {:>10}  {:<10} {}",
            "Algorithm", "Encode", "Decode", "Total", "Memory", "Security", "Decode OK"
        );
        println!("{:-<104}", "");
        for report in reports {
            match &report.outcome {
                Ok(r) => {
                    println!(
                        "  {:<30} {:>10} {:>10} {:>10} {:>8.4}MB  {:<10} {}",
                        r.algorithm_name,
                        format_ms(r.encode_time_ms),
                        format_ms(r.decode_time_ms),
                        format_ms(r.total_time_ms),
                        r.memory_estimate_mb,
                        r.security_level,
                        if r.decode_success { "yes" } else { "no" },
                    );
                    if self.verbose {
                        println!("      time:  {}", r.time_complexity);
                        println!("      space: {}", r.space_complexity);
                        println!("      {}", r.description);
                        println!("      encoded: {}", r.encoded_preview);
                        println!("      decoded: {}", r.decoded_preview);
                    }
                }
                Err(e) => println!("  {:<30} ERROR: {e}", report.algorithm),
            }
        }
        for name in decode_mismatches(reports) {
            ui::print_warning(&format!("{name}: decoded text does not match the input"));
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
