//! Shared big-integer helpers: decimal lengths, decimal splits, exact
//! division, sign handling and operand parsing.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Num, Zero};

use crate::algorithm::CodecError;

/// Number of decimal digits in `value` (zero has one digit).
#[must_use]
pub fn decimal_len(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// Larger decimal length of two operands.
#[must_use]
pub fn max_decimal_len(x: &BigUint, y: &BigUint) -> usize {
    decimal_len(x).max(decimal_len(y))
}

/// `10^exp` as a `BigUint`.
#[must_use]
pub fn pow10(exp: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exp)
}

/// Split `value` into `(high, low)` with `value = high * base + low`.
#[must_use]
pub fn split_at(value: &BigUint, base: &BigUint) -> (BigUint, BigUint) {
    value.div_rem(base)
}

/// Divide `value` by `divisor`, which must divide it exactly.
///
/// A remainder means the caller's algebra is wrong, so it is asserted in
/// debug builds rather than rounded.
#[must_use]
pub fn exact_div(value: &BigInt, divisor: u32) -> BigInt {
    let divisor = BigInt::from(divisor);
    let (quotient, remainder) = value.div_rem(&divisor);
    debug_assert!(
        remainder.is_zero(),
        "inexact division: {value} / {divisor} leaves {remainder}"
    );
    quotient
}

/// Multiply the magnitudes of `x` and `y` with `mul` and apply the product sign.
pub fn signed_product<E>(
    x: &BigInt,
    y: &BigInt,
    mul: impl FnOnce(&BigUint, &BigUint) -> Result<BigUint, E>,
) -> Result<BigInt, E> {
    let sign = x.sign() * y.sign();
    let magnitude = mul(x.magnitude(), y.magnitude())?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Parse a signed decimal operand such as `-12345`.
pub fn parse_operand(text: &str) -> Result<BigInt, CodecError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidOperand(format!(
            "'{text}' is not a decimal integer"
        )));
    }
    BigInt::from_str_radix(trimmed, 10)
        .map_err(|e| CodecError::InvalidOperand(format!("'{text}': {e}")))
}
