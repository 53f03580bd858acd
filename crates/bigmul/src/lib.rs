//! BigMul library: application logic for the `bigmul` binary.

pub mod app;
pub mod config;
pub mod errors;
