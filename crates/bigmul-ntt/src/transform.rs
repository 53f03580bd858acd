//! Forward and inverse number-theoretic transform over `Z/(2^k + 1)`.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::NttError;
use crate::modular::{mod_inverse, mod_pow};
use crate::params::TransformParams;

/// Forward transform of `values`, zero-padded to `params.len()` points.
#[must_use]
pub fn forward(values: &[BigUint], params: &TransformParams) -> Vec<BigUint> {
    let mut data = pad(values, params);
    transform_in_place(&mut data, params.root(), params.modulus());
    data
}

/// Inverse transform, including the scale by `len^-1`.
///
/// The inverse twiddle comes from [`TransformParams::root_inverse`].
pub fn inverse(values: &[BigUint], params: &TransformParams) -> Result<Vec<BigUint>, NttError> {
    let modulus = params.modulus();
    let root_inv = params.root_inverse()?;
    let scale = mod_inverse(&BigUint::from(params.len()), modulus)?;

    let mut data = pad(values, params);
    transform_in_place(&mut data, &root_inv, modulus);
    for elem in &mut data {
        *elem = (&*elem * &scale) % modulus;
    }
    Ok(data)
}

fn pad(values: &[BigUint], params: &TransformParams) -> Vec<BigUint> {
    assert!(
        values.len() <= params.len(),
        "{} values do not fit a transform of length {}",
        values.len(),
        params.len()
    );
    let modulus = params.modulus();
    let mut data: Vec<BigUint> = values.iter().map(|v| v % modulus).collect();
    data.resize(params.len(), BigUint::ZERO);
    data
}

/// Iterative Cooley-Tukey butterflies after a bit-reversal permutation.
fn transform_in_place(data: &mut [BigUint], root: &BigUint, modulus: &BigUint) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    bit_reverse_permutation(data);

    let mut size = 2;
    while size <= n {
        let half = size / 2;
        // Twiddle step for this level: root^(n / size)
        let step = mod_pow(root, &BigUint::from(n / size), modulus);

        for start in (0..n).step_by(size) {
            let mut w = BigUint::one();
            for j in start..start + half {
                let t = (&w * &data[j + half]) % modulus;
                let u = std::mem::take(&mut data[j]);
                data[j + half] = (&u + modulus - &t) % modulus;
                data[j] = (u + t) % modulus;
                w = (w * &step) % modulus;
            }
        }
        size *= 2;
    }
}

/// Bit-reversal permutation.
pub fn bit_reverse_permutation<T>(data: &mut [T]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
