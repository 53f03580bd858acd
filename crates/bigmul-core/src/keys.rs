//! Key pair generation.
//!
//! Keys come from the thread-local RNG and are not suitable for any
//! cryptographic purpose.

use std::ops::Range;

use num_bigint::BigInt;
use rand::Rng;

/// A public/private key pair. No relation between the two is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Key used to encode.
    pub public_key: BigInt,
    /// Key used to decode.
    pub private_key: BigInt,
}

impl KeyPair {
    /// Create a key pair from explicit values.
    #[must_use]
    pub fn new(public_key: BigInt, private_key: BigInt) -> Self {
        Self {
            public_key,
            private_key,
        }
    }

    /// Draw both keys independently and uniformly from `range`.
    #[must_use]
    pub fn from_range(range: &Range<u64>) -> Self {
        let mut rng = rand::rng();
        Self {
            public_key: BigInt::from(rng.random_range(range.clone())),
            private_key: BigInt::from(rng.random_range(range.clone())),
        }
    }

    /// Draw a bit width from `bits`, then an odd value below `2^width`.
    /// Both keys share that value.
    #[must_use]
    pub fn odd_with_bits(bits: &Range<u32>) -> Self {
        let mut rng = rand::rng();
        let width = rng.random_range(bits.clone());
        let value = BigInt::from(rng.random_range(0..1u64 << width) | 1);
        Self::new(value.clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;

    #[test]
    fn from_range_stays_in_range() {
        let range = 1000..11_000;
        for _ in 0..200 {
            let pair = KeyPair::from_range(&range);
            for key in [&pair.public_key, &pair.private_key] {
                assert!(*key >= BigInt::from(1000));
                assert!(*key < BigInt::from(11_000));
            }
        }
    }

    #[test]
    fn odd_with_bits_is_odd_and_shared() {
        for _ in 0..200 {
            let pair = KeyPair::odd_with_bits(&(20..30));
            assert_eq!(pair.public_key, pair.private_key);
            assert!(pair.public_key.is_odd());
            assert!(pair.public_key < BigInt::from(1u64 << 29));
        }
    }
}
