//! Public multiplication API.
//!
//! Routes operands of at least [`DIRECT_MUL_THRESHOLD`] through the
//! transform pipeline and multiplies smaller ones directly.

use num_bigint::BigUint;
use tracing::debug;

use crate::error::NttError;
use crate::params::{select_params, SsaParams, TransformParams};
use crate::poly::{pointwise_multiply, recombine, split_limbs};
use crate::transform::{forward, inverse};

/// Operands below this magnitude are multiplied directly.
pub const DIRECT_MUL_THRESHOLD: u64 = 100_000;

/// Size parameters `n` at or below this are multiplied directly.
pub const MIN_TRANSFORM_BITS: usize = 64;

/// Multiply two `BigUint`s, using the transform for large operands.
#[allow(clippy::cast_possible_truncation)]
pub fn mul(a: &BigUint, b: &BigUint) -> Result<BigUint, NttError> {
    let threshold = BigUint::from(DIRECT_MUL_THRESHOLD);
    if a < &threshold || b < &threshold {
        return Ok(a * b);
    }

    let params = select_params(a.bits() as usize, b.bits() as usize);
    if params.n <= MIN_TRANSFORM_BITS {
        return Ok(a * b);
    }

    mul_with_params(a, b, &params)
}

/// Transform multiplication with explicit parameters.
///
/// Both operands must fit in `params.limbs * params.limb_bits` bits.
pub fn mul_with_params(a: &BigUint, b: &BigUint, params: &SsaParams) -> Result<BigUint, NttError> {
    let transform = TransformParams::new(params.shift, params.transform_len);
    debug!(
        n = params.n,
        limb_bits = params.limb_bits,
        shift = params.shift,
        len = params.transform_len,
        root = ?transform.root_source(),
        "ssa multiply"
    );

    let fa = forward(&split_limbs(a, params.limbs, params.limb_bits), &transform);
    let fb = forward(&split_limbs(b, params.limbs, params.limb_bits), &transform);

    let product = pointwise_multiply(&fa, &fb, transform.modulus());
    let coeffs = inverse(&product, &transform)?;

    Ok(recombine(&coeffs, params.limb_bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn below_threshold_is_direct() {
        let a = BigUint::from(99_999u64);
        let b = BigUint::from(10u64).pow(40);
        assert_eq!(mul(&a, &b).unwrap(), &a * &b);
    }

    #[test]
    fn small_n_is_direct() {
        let a = BigUint::from(123_456u64);
        let b = BigUint::from(654_321u64);
        assert_eq!(mul(&a, &b).unwrap(), BigUint::from(80_779_853_376u64));
    }

    #[test]
    fn zero_operand() {
        let a = BigUint::from(10u64).pow(50);
        assert_eq!(mul(&a, &BigUint::ZERO).unwrap(), BigUint::ZERO);
    }

    #[test]
    fn transform_correctness() {
        for &bit_size in &[128usize, 256, 512, 1024] {
            let a = (BigUint::one() << bit_size) - BigUint::one();
            let b = (BigUint::one() << bit_size) - BigUint::from(3u64);
            assert_eq!(
                mul(&a, &b).unwrap(),
                &a * &b,
                "transform multiply failed for {bit_size}-bit numbers"
            );
        }
    }

    #[test]
    fn transform_asymmetric() {
        let a = (BigUint::one() << 700) - BigUint::one();
        let b = BigUint::from(12_345_678u64);
        assert_eq!(mul(&a, &b).unwrap(), &a * &b);
    }

    #[test]
    fn explicit_params_on_small_ring() {
        // 40-bit operands forced through a 64-bit layout
        let a = BigUint::from(0xab_cdef_0123u64);
        let b = BigUint::from(0x12_3456_789au64);
        let params = select_params(40, 40);
        assert_eq!(mul_with_params(&a, &b, &params).unwrap(), &a * &b);
    }

    #[test]
    fn three_thousand_digit_square_is_fast() {
        // 10^3000 - 1 runs over the composite ring 2^32768 + 1
        let a = BigUint::from(10u64).pow(3000) - BigUint::one();
        let start = std::time::Instant::now();
        let product = mul(&a, &a).unwrap();
        assert_eq!(product, &a * &a);
        assert!(
            start.elapsed() < std::time::Duration::from_secs(10),
            "took {:?}",
            start.elapsed()
        );
    }
}
