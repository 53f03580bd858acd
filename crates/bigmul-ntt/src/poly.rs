//! Limb splitting, pointwise products and carry recombination.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Split `value` into `limbs` little-endian limbs of `limb_bits` bits.
///
/// Bits above `limbs * limb_bits` are dropped.
#[must_use]
pub fn split_limbs(value: &BigUint, limbs: usize, limb_bits: usize) -> Vec<BigUint> {
    let mask = limb_mask(limb_bits);
    let mut remaining = value.clone();
    let mut out = Vec::with_capacity(limbs);

    for _ in 0..limbs {
        out.push(&remaining & &mask);
        remaining >>= limb_bits;
    }
    out
}

/// Pointwise product of two transformed sequences modulo `modulus`.
#[must_use]
pub fn pointwise_multiply(a: &[BigUint], b: &[BigUint], modulus: &BigUint) -> Vec<BigUint> {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(ai, bi)| (ai * bi) % modulus)
        .collect()
}

/// Rebuild an integer from convolution coefficients.
///
/// Walks the coefficients left to right: adds the running carry, keeps the
/// low `limb_bits` bits at offset `i * limb_bits` and carries the rest.
#[must_use]
pub fn recombine(coeffs: &[BigUint], limb_bits: usize) -> BigUint {
    let mask = limb_mask(limb_bits);
    let mut result = BigUint::zero();
    let mut carry = BigUint::zero();

    for (i, coeff) in coeffs.iter().enumerate() {
        let value = coeff + &carry;
        carry = &value >> limb_bits;
        result |= (value & &mask) << (i * limb_bits);
    }

    if !carry.is_zero() {
        result |= carry << (coeffs.len() * limb_bits);
    }
    result
}

fn limb_mask(limb_bits: usize) -> BigUint {
    (BigUint::one() << limb_bits) - BigUint::one()
}
