//! Transform errors.

use num_bigint::BigUint;

/// Error raised inside the transform path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NttError {
    /// The extended Euclidean algorithm found `gcd(value, modulus) != 1`.
    #[error("modular inverse of {value} does not exist modulo {modulus}")]
    ModularInverseUndefined {
        /// The value that could not be inverted.
        value: BigUint,
        /// The modulus of the ring.
        modulus: BigUint,
    },
}
