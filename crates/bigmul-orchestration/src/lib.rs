//! # bigmul-orchestration
//!
//! Batch benchmarks, algorithm selection, and cross-algorithm product checks.

pub mod algorithm_selection;
pub mod interfaces;
pub mod orchestrator;
pub mod payload;

pub use algorithm_selection::get_algorithms_to_run;
pub use interfaces::{BenchmarkReport, ProductResult, ResultPresenter};
pub use orchestrator::{analyze_products, multiply_all, run_benchmarks};
pub use payload::generate_random_data;
