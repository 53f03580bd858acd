//! Keyed chunk codec.
//!
//! `encode` cuts a payload into chunks, multiplies each chunk by the key with
//! the algorithm's own multiplier and joins the products as hex tokens.
//! `decode` parses the tokens, inverts the multiplication per the algorithm's
//! [`DecodeDirection`] and masks each chunk back into bytes.
//!
//! Chunks that leave the byte (or word) range after decoding are reduced
//! modulo `2^8` (or `2^32`), so a wrong key yields garbage rather than an
//! error.

use std::time::{Duration, Instant};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Num, Zero};
use tracing::debug;

use crate::algorithm::{Algorithm, Chunking, CodecError, DecodeDirection};
use crate::constants::CHUNK_SEPARATOR;

/// A value together with the wall-clock time it took to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    /// The produced value.
    pub value: T,
    /// Time spent producing it.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Run `f` and record how long it took.
    pub fn measure<E>(f: impl FnOnce() -> Result<T, E>) -> Result<Self, E> {
        let start = Instant::now();
        let value = f()?;
        Ok(Self {
            value,
            elapsed: start.elapsed(),
        })
    }

    /// Transform the value, keeping the timing.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Encode `data` with `key` using `algorithm`'s multiplier and chunking.
pub fn encode<A: Algorithm + ?Sized>(
    algorithm: &A,
    data: &[u8],
    key: &BigInt,
) -> Result<Timed<String>, CodecError> {
    Timed::measure(|| {
        let chunks = chunk(data, algorithm.chunking());
        debug!(
            algorithm = algorithm.name(),
            chunks = chunks.len(),
            "encoding"
        );
        let tokens = chunks
            .iter()
            .map(|c| algorithm.multiply(c, key).map(|p| format_hex(&p)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tokens.join(CHUNK_SEPARATOR.to_string().as_str()))
    })
}

/// Decode `text` with `key`, the inverse of [`encode`] for dividing algorithms.
pub fn decode<A: Algorithm + ?Sized>(
    algorithm: &A,
    text: &str,
    key: &BigInt,
) -> Result<Timed<Vec<u8>>, CodecError> {
    let direction = algorithm.decode_direction();
    if direction == DecodeDirection::Divide && key.is_zero() {
        return Err(CodecError::InvalidOperand(
            "decode key must be non-zero".into(),
        ));
    }

    Timed::measure(|| {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let values = text
            .split(CHUNK_SEPARATOR)
            .map(|token| {
                let value = parse_hex(token)?;
                match direction {
                    DecodeDirection::Divide => Ok(value / key),
                    DecodeDirection::Remultiply => algorithm.multiply(&value, key),
                }
            })
            .collect::<Result<Vec<_>, CodecError>>()?;
        debug!(
            algorithm = algorithm.name(),
            chunks = values.len(),
            "decoded"
        );
        Ok(unchunk(&values, algorithm.chunking()))
    })
}

/// Split `data` into chunk values.
///
/// Word chunking reads big-endian groups of four bytes; a short final group
/// is padded with zero bytes on the right.
#[must_use]
pub fn chunk(data: &[u8], chunking: Chunking) -> Vec<BigInt> {
    match chunking {
        Chunking::SingleByte => data.iter().map(|&b| BigInt::from(b)).collect(),
        Chunking::BigEndianWord => data
            .chunks(4)
            .map(|group| {
                let mut word = [0u8; 4];
                word[..group.len()].copy_from_slice(group);
                BigInt::from(u32::from_be_bytes(word))
            })
            .collect(),
    }
}

/// Reassemble bytes from chunk values, masking each into its chunk width.
///
/// Zero bytes at the end of the final word are treated as padding and
/// dropped.
#[must_use]
pub fn unchunk(values: &[BigInt], chunking: Chunking) -> Vec<u8> {
    let width = chunking.width();
    let modulus = BigInt::from(1u64) << (8 * width);
    let mut bytes = Vec::with_capacity(values.len() * width);

    for value in values {
        let masked = value.mod_floor(&modulus);
        let (_, digits) = masked.to_bytes_be();
        // `digits` has no leading zeros; left-pad to the chunk width
        let digits = if masked.is_zero() { Vec::new() } else { digits };
        bytes.resize(bytes.len() + width - digits.len(), 0);
        bytes.extend_from_slice(&digits);
    }

    if chunking == Chunking::BigEndianWord {
        let keep = bytes.len().saturating_sub(width);
        while bytes.len() > keep && bytes.last() == Some(&0) {
            bytes.pop();
        }
    }
    bytes
}

/// Lowercase hex, with a leading `-` for negative values.
#[must_use]
pub fn format_hex(value: &BigInt) -> String {
    value.to_str_radix(16)
}

/// Parse a token written by [`format_hex`].
pub fn parse_hex(token: &str) -> Result<BigInt, CodecError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() {
        return Err(CodecError::DecodeFormat {
            token: token.to_string(),
            reason: "empty token",
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::DecodeFormat {
            token: token.to_string(),
            reason: "not hexadecimal",
        });
    }
    let magnitude =
        BigUint::from_str_radix(digits, 16).map_err(|_| CodecError::DecodeFormat {
            token: token.to_string(),
            reason: "not hexadecimal",
        })?;
    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}
