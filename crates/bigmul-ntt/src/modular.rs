//! Modular arithmetic over `Z/(2^k + 1)`.
//!
//! Exponentiation and inversion used to derive twiddle factors and the
//! inverse-transform scale.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::NttError;

/// The Fermat-form modulus `2^shift + 1`.
#[must_use]
pub fn fermat_modulus(shift: usize) -> BigUint {
    (BigUint::one() << shift) + BigUint::one()
}

/// Compute `base^exp mod modulus`.
#[must_use]
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }
    base.modpow(exp, modulus)
}

/// Inverse of `value` modulo `modulus` via the extended Euclidean algorithm.
///
/// Fails with [`NttError::ModularInverseUndefined`] when the two are not
/// coprime.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint, NttError> {
    let a = BigInt::from(value.clone());
    let m = BigInt::from(modulus.clone());
    let egcd = a.extended_gcd(&m);

    if !egcd.gcd.is_one() {
        return Err(NttError::ModularInverseUndefined {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    let (_, inverse) = egcd.x.mod_floor(&m).into_parts();
    Ok(inverse)
}

/// Inverse of `value` by Fermat's little theorem, `value^(modulus - 2)`.
///
/// Only correct when `modulus` is prime; the result is checked and the
/// extended Euclidean algorithm takes over when the shortcut does not hold.
pub fn fermat_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint, NttError> {
    let two = BigUint::from(2u32);
    if modulus > &two {
        let candidate = mod_pow(value, &(modulus - &two), modulus);
        if ((value * &candidate) % modulus).is_one() {
            return Ok(candidate);
        }
    }
    mod_inverse(value, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn fermat_modulus_values() {
        assert_eq!(fermat_modulus(8), big(257));
        assert_eq!(fermat_modulus(16), big(65_537));
    }

    #[test]
    fn mod_pow_small() {
        assert_eq!(mod_pow(&big(3), &big(4), &big(257)), big(81));
        assert_eq!(mod_pow(&big(3), &big(256), &big(257)), big(1));
        assert_eq!(mod_pow(&big(5), &big(3), &big(1)), big(0));
    }

    #[test]
    fn mod_inverse_prime_modulus() {
        let inv = mod_inverse(&big(4), &big(257)).unwrap();
        assert_eq!((big(4) * inv) % big(257), big(1));
    }

    #[test]
    fn mod_inverse_composite_modulus() {
        // 2^32 + 1 = 641 * 6700417
        let modulus = fermat_modulus(32);
        let inv = mod_inverse(&big(8), &modulus).unwrap();
        assert_eq!((big(8) * inv) % &modulus, big(1));
    }

    #[test]
    fn mod_inverse_not_coprime() {
        let err = mod_inverse(&big(6), &big(9)).unwrap_err();
        assert_eq!(
            err,
            NttError::ModularInverseUndefined {
                value: big(6),
                modulus: big(9),
            }
        );
    }

    #[test]
    fn mod_inverse_of_zero_fails() {
        assert!(mod_inverse(&big(0), &big(257)).is_err());
    }

    #[test]
    fn fermat_inverse_prime() {
        let inv = fermat_inverse(&big(3), &big(257)).unwrap();
        assert_eq!((big(3) * inv) % big(257), big(1));
    }

    #[test]
    fn fermat_inverse_falls_back_on_composite() {
        // 641 divides 2^32 + 1, so the Fermat shortcut is wrong for 3.
        let modulus = fermat_modulus(32);
        let inv = fermat_inverse(&big(3), &modulus).unwrap();
        assert_eq!((big(3) * inv) % &modulus, big(1));
    }
}
