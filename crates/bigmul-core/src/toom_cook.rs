//! Toom-Cook-3 multiplication.
//!
//! Operands are split into three decimal limbs, evaluated at `0, 1, -1, 2`
//! and infinity, multiplied pointwise (five recursive products) and
//! interpolated back. Evaluations at `-1` can be negative, so the recursion
//! works on signed values.

use num_bigint::{BigInt, BigUint, Sign};

use crate::algorithm::{Algorithm, Chunking, CodecError, DecodeDirection, Multiplier};
use crate::constants::{TOOM_COOK_KEY_RANGE, TOOM_COOK_THRESHOLD};
use crate::digits::{exact_div, max_decimal_len, pow10, split_at};
use crate::keys::KeyPair;
use crate::profile::{self, AlgorithmProfile};

/// Toom-Cook-3 multiplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToomCook3;

impl ToomCook3 {
    /// Create a new Toom-Cook-3 multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Multiply two signed integers with Toom-Cook-3 recursion.
#[must_use]
pub fn toom3_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let sign = x.sign() * y.sign();
    BigInt::from_biguint(sign, toom3_magnitude(x.magnitude(), y.magnitude()))
}

fn toom3_magnitude(x: &BigUint, y: &BigUint) -> BigUint {
    let threshold = BigUint::from(TOOM_COOK_THRESHOLD);
    if x < &threshold || y < &threshold {
        return x * y;
    }

    let m = max_decimal_len(x, y) / 3 + 1;
    let base = pow10(m);

    let p = evaluate(split3(x, &base));
    let q = evaluate(split3(y, &base));
    let r: [BigInt; 5] = std::array::from_fn(|i| toom3_mul(&p[i], &q[i]));

    let c = interpolate(r);

    let base = BigInt::from(base);
    let product = c
        .iter()
        .rev()
        .fold(BigInt::ZERO, |acc, coeff| acc * &base + coeff);
    debug_assert!(product.sign() != Sign::Minus, "negative product of magnitudes");
    product.into_parts().1
}

/// Split into `[x0, x1, x2]` with `x = x2·base² + x1·base + x0`.
fn split3(value: &BigUint, base: &BigUint) -> [BigInt; 3] {
    let (rest, x0) = split_at(value, base);
    let (x2, x1) = split_at(&rest, base);
    [x0.into(), x1.into(), x2.into()]
}

/// Values of `x2·t² + x1·t + x0` at `t = 0, 1, -1, 2, ∞`.
fn evaluate([x0, x1, x2]: [BigInt; 3]) -> [BigInt; 5] {
    let even = &x2 + &x0;
    [
        x0.clone(),
        &even + &x1,
        &even - &x1,
        (&x2 << 2) + (&x1 << 1) + &x0,
        x2,
    ]
}

/// Recover the five product coefficients, lowest first. Every division is exact.
fn interpolate([r0, r1, r2, r3, r4]: [BigInt; 5]) -> [BigInt; 5] {
    let t = exact_div(&(&r3 - &r2), 3);
    let u = exact_div(&(&r1 - &r2), 2);
    let w = &r2 - &r0;

    let c3 = exact_div(&(&t - &w), 2) - &u - (&r4 << 1);
    let c2 = &w + &u - &r4;
    let c1 = &u - &c3;

    [r0, c1, c2, c3, r4]
}

impl Multiplier for ToomCook3 {
    fn multiply(&self, x: &BigInt, y: &BigInt) -> Result<BigInt, CodecError> {
        Ok(toom3_mul(x, y))
    }

    fn name(&self) -> &str {
        "Toom-Cook-3"
    }
}

impl Algorithm for ToomCook3 {
    fn profile(&self) -> &'static AlgorithmProfile {
        &profile::TOOM_COOK
    }

    fn chunking(&self) -> Chunking {
        Chunking::SingleByte
    }

    fn decode_direction(&self) -> DecodeDirection {
        DecodeDirection::Divide
    }

    fn generate_key_pair(&self) -> KeyPair {
        KeyPair::from_range(&TOOM_COOK_KEY_RANGE)
    }
}
