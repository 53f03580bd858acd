//! Karatsuba multiplication over decimal digit splits.
//!
//! Each level splits both operands at `10^m`, where `m` is half the longer
//! decimal length, and replaces four sub-products with three.

use num_bigint::{BigInt, BigUint};

use crate::algorithm::{Algorithm, Chunking, CodecError, DecodeDirection, Multiplier};
use crate::constants::{KARATSUBA_KEY_RANGE, KARATSUBA_THRESHOLD};
use crate::digits::{max_decimal_len, pow10, signed_product, split_at};
use crate::keys::KeyPair;
use crate::profile::{self, AlgorithmProfile};

/// Karatsuba multiplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Karatsuba;

impl Karatsuba {
    /// Create a new Karatsuba multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Multiply two magnitudes with Karatsuba recursion.
#[must_use]
pub fn karatsuba_mul(x: &BigUint, y: &BigUint) -> BigUint {
    let threshold = BigUint::from(KARATSUBA_THRESHOLD);
    if x < &threshold || y < &threshold {
        return x * y;
    }

    let m = max_decimal_len(x, y) / 2;
    let pow = pow10(m);

    let (a, b) = split_at(x, &pow);
    let (c, d) = split_at(y, &pow);

    let z0 = karatsuba_mul(&b, &d);
    let z2 = karatsuba_mul(&a, &c);
    let z1 = karatsuba_mul(&(&a + &b), &(&c + &d)) - &z0 - &z2;

    (z2 * &pow + z1) * &pow + z0
}

impl Multiplier for Karatsuba {
    fn multiply(&self, x: &BigInt, y: &BigInt) -> Result<BigInt, CodecError> {
        signed_product(x, y, |a, b| Ok(karatsuba_mul(a, b)))
    }

    fn name(&self) -> &str {
        "Karatsuba"
    }
}

impl Algorithm for Karatsuba {
    fn profile(&self) -> &'static AlgorithmProfile {
        &profile::KARATSUBA
    }

    fn chunking(&self) -> Chunking {
        Chunking::SingleByte
    }

    fn decode_direction(&self) -> DecodeDirection {
        DecodeDirection::Divide
    }

    fn generate_key_pair(&self) -> KeyPair {
        KeyPair::from_range(&KARATSUBA_KEY_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    fn mul(x: i64, y: i64) -> BigInt {
        Karatsuba::new()
            .multiply(&BigInt::from(x), &BigInt::from(y))
            .unwrap()
    }

    #[test]
    fn known_product() {
        assert_eq!(mul(1234, 5678), BigInt::from(7_006_652));
    }

    #[test]
    fn base_case_is_direct() {
        assert_eq!(mul(9, 123_456), BigInt::from(1_111_104));
        assert_eq!(mul(0, 99), BigInt::zero());
    }

    #[test]
    fn signs() {
        assert_eq!(mul(-1234, 5678), BigInt::from(-7_006_652));
        assert_eq!(mul(-1234, -5678), BigInt::from(7_006_652));
        assert_eq!(mul(1234, -5), BigInt::from(-6170));
    }

    #[test]
    fn unbalanced_lengths() {
        let x = pow10(57) - BigUint::one();
        let y = BigUint::from(12_345u32);
        assert_eq!(karatsuba_mul(&x, &y), &x * &y);
        assert_eq!(karatsuba_mul(&y, &x), &x * &y);
    }

    #[test]
    fn all_nines() {
        for digits in [2usize, 3, 7, 16, 33] {
            let x = pow10(digits) - BigUint::one();
            assert_eq!(karatsuba_mul(&x, &x), &x * &x, "{digits} digits");
        }
    }

    #[test]
    fn policy() {
        let k = Karatsuba::new();
        assert_eq!(k.chunking(), Chunking::SingleByte);
        assert_eq!(k.decode_direction(), DecodeDirection::Divide);
        assert_eq!(k.profile().security_level, "Medium");
    }
}
