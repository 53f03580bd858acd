//! Big-integer multiplication engine.
//!
//! Three multipliers (Karatsuba, Toom-Cook-3 and a number-theoretic-transform
//! Schönhage-Strassen), a keyed chunk codec built on them, key generation and
//! a per-algorithm benchmark. The codec is a demonstration of the
//! multipliers and provides no confidentiality.

pub mod algorithm;
pub mod benchmark;
pub mod codec;
pub mod constants;
pub mod digits;
pub mod karatsuba;
pub mod keys;
pub mod profile;
pub mod registry;
pub mod schonhage;
pub mod toom_cook;

pub use algorithm::{Algorithm, Chunking, CodecError, DecodeDirection, Multiplier};
pub use benchmark::{BenchmarkResult, TestType};
pub use codec::Timed;
pub use digits::parse_operand;
pub use karatsuba::Karatsuba;
pub use keys::KeyPair;
pub use profile::AlgorithmProfile;
pub use registry::{AlgorithmFactory, DefaultFactory};
pub use schonhage::SchonhageStrassen;
pub use toom_cook::ToomCook3;
