//! # bigmul-ntt
//!
//! Schönhage-Strassen style multiplication of big unsigned integers.
//! Operands are split into bit limbs, convolved through a number-theoretic
//! transform modulo `2^k + 1`, and recombined with carry propagation.

pub mod error;
pub mod modular;
pub mod params;
pub mod poly;
pub mod ssa;
pub mod transform;

// Re-exports
pub use error::NttError;
pub use params::{select_params, RootSource, SsaParams, TransformParams};
pub use ssa::{mul, DIRECT_MUL_THRESHOLD, MIN_TRANSFORM_BITS};
pub use transform::{forward, inverse};
