//! Schönhage-Strassen multiplication, backed by `bigmul-ntt`.

use num_bigint::BigInt;

use crate::algorithm::{Algorithm, Chunking, CodecError, DecodeDirection, Multiplier};
use crate::constants::SSA_KEY_BITS;
use crate::digits::signed_product;
use crate::keys::KeyPair;
use crate::profile::{self, AlgorithmProfile};

/// Number-theoretic-transform multiplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchonhageStrassen;

impl SchonhageStrassen {
    /// Create a new Schönhage-Strassen multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for SchonhageStrassen {
    fn multiply(&self, x: &BigInt, y: &BigInt) -> Result<BigInt, CodecError> {
        signed_product(x, y, |a, b| Ok(bigmul_ntt::mul(a, b)?))
    }

    fn name(&self) -> &str {
        "Schönhage-Strassen"
    }
}

impl Algorithm for SchonhageStrassen {
    fn profile(&self) -> &'static AlgorithmProfile {
        &profile::SCHONHAGE_STRASSEN
    }

    fn chunking(&self) -> Chunking {
        Chunking::BigEndianWord
    }

    fn decode_direction(&self) -> DecodeDirection {
        DecodeDirection::Remultiply
    }

    fn generate_key_pair(&self) -> KeyPair {
        KeyPair::odd_with_bits(&SSA_KEY_BITS)
    }
}
