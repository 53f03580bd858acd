//! The capability interface shared by the three multipliers.
//!
//! `Multiplier` is the narrow multiply-only interface. `Algorithm` extends it
//! with the chunking and decode policy, key generation, the keyed codec and
//! the benchmark; its default methods route through [`crate::codec`] and
//! [`crate::benchmark`], so implementers only declare policy.
//!
//! Nothing here is a cipher. "Encode" multiplies chunks by a key and
//! "decode" inverts that (or not, see [`DecodeDirection`]); no
//! confidentiality is provided.

use num_bigint::BigInt;

use crate::benchmark::{self, BenchmarkResult, TestType};
use crate::codec::{self, Timed};
use crate::keys::KeyPair;
use crate::profile::AlgorithmProfile;

/// Error type for multiplication and codec operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Malformed operand or unusable key.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// A transform length or twiddle factor had no inverse.
    #[error("modular inverse of {value} does not exist modulo {modulus}")]
    ModularInverseUndefined {
        /// Value that could not be inverted.
        value: String,
        /// Modulus of the transform ring.
        modulus: String,
    },

    /// A token of the encoded text could not be parsed.
    #[error("malformed token '{token}': {reason}")]
    DecodeFormat {
        /// The offending token.
        token: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Configuration error, e.g. an unknown algorithm name.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Products from different algorithms don't match.
    #[error("product mismatch between algorithms")]
    Mismatch,
}

impl From<bigmul_ntt::NttError> for CodecError {
    fn from(err: bigmul_ntt::NttError) -> Self {
        match err {
            bigmul_ntt::NttError::ModularInverseUndefined { value, modulus } => {
                Self::ModularInverseUndefined {
                    value: value.to_string(),
                    modulus: modulus.to_string(),
                }
            }
        }
    }
}

/// How a payload is cut into chunks before multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunking {
    /// One byte per chunk.
    SingleByte,
    /// Four bytes per chunk, big-endian; a short final group is zero-padded.
    BigEndianWord,
}

impl Chunking {
    /// Bytes per chunk.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::SingleByte => 1,
            Self::BigEndianWord => 4,
        }
    }
}

/// How decode inverts the per-chunk multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeDirection {
    /// Truncating division by the key.
    Divide,
    /// Multiplication by the key again. Only recovers the payload when the
    /// key is `1` or `-1`.
    Remultiply,
}

/// Narrow interface for multiplication.
pub trait Multiplier: Send + Sync {
    /// Multiply two signed big integers.
    fn multiply(&self, x: &BigInt, y: &BigInt) -> Result<BigInt, CodecError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Full capability set: multiply, keyed codec, key generation, benchmark.
pub trait Algorithm: Multiplier {
    /// Static labels for this algorithm.
    fn profile(&self) -> &'static AlgorithmProfile;

    /// Chunking rule applied by `encode`.
    fn chunking(&self) -> Chunking;

    /// Per-chunk inversion applied by `decode`.
    fn decode_direction(&self) -> DecodeDirection;

    /// Draw a key pair from this algorithm's range.
    fn generate_key_pair(&self) -> KeyPair;

    /// Encode a byte payload as `:`-joined hex products.
    fn encode(&self, data: &[u8], key: &BigInt) -> Result<Timed<String>, CodecError> {
        codec::encode(self, data, key)
    }

    /// Decode `:`-joined hex products back into bytes.
    fn decode(&self, text: &str, key: &BigInt) -> Result<Timed<Vec<u8>>, CodecError> {
        codec::decode(self, text, key)
    }

    /// Encode UTF-8 text.
    fn encode_str(&self, text: &str, key: &BigInt) -> Result<Timed<String>, CodecError> {
        self.encode(text.as_bytes(), key)
    }

    /// Decode into text, replacing invalid UTF-8.
    fn decode_str(&self, text: &str, key: &BigInt) -> Result<Timed<String>, CodecError> {
        self.decode(text, key)
            .map(|timed| timed.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Encode then decode `data`, timing the phases `mode` selects.
    fn benchmark(&self, data: &str, mode: TestType) -> Result<BenchmarkResult, CodecError> {
        benchmark::run(self, data, mode)
    }
}
