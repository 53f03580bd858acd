//! Parameter selection for the transform.
//!
//! `SsaParams` fixes the limb layout of a multiplication; `TransformParams`
//! fixes the ring `Z/(2^shift + 1)`, the transform length and the root of
//! unity used for the butterflies.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::NttError;
use crate::modular::{fermat_inverse, fermat_modulus, mod_inverse, mod_pow};

/// Fixed primitive root candidate for the transform ring.
pub const PRIMITIVE_ROOT: u32 = 3;

/// Limb layout for one Schönhage-Strassen multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsaParams {
    /// Next power of two >= the larger operand bit length.
    pub n: usize,
    /// Bits per limb (`n / 2`).
    pub limb_bits: usize,
    /// Limbs per operand (`ceil(n / limb_bits)`).
    pub limbs: usize,
    /// Modulus exponent `k`: next power of two >= `2n`.
    pub shift: usize,
    /// Transform length, large enough to hold the acyclic product.
    pub transform_len: usize,
}

/// Select limb and modulus parameters for operands of the given bit lengths.
#[must_use]
pub fn select_params(a_bits: usize, b_bits: usize) -> SsaParams {
    let max_bits = a_bits.max(b_bits).max(1);
    let n = max_bits.next_power_of_two();
    let limb_bits = (n >> 1).max(1);
    let shift = (2 * n).next_power_of_two();
    let limbs = n.div_ceil(limb_bits);
    let transform_len = (2 * limbs).next_power_of_two();

    SsaParams {
        n,
        limb_bits,
        limbs,
        shift,
        transform_len,
    }
}

/// Exponents `k` for which `2^k + 1` is prime.
const FERMAT_PRIME_SHIFTS: [usize; 5] = [1, 2, 4, 8, 16];

/// Where the root of unity of a [`TransformParams`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `3^((modulus - 1) / len)` on a prime ring, verified to be a principal root.
    Fixed,
    /// `2^(2k / len)`, used on composite rings and when the fixed root fails.
    PowerOfTwo,
    /// `3^((modulus - 1) / len)` kept without a successful verification.
    Unverified,
}

/// Ring and root of unity for one transform length.
#[derive(Debug, Clone)]
pub struct TransformParams {
    shift: usize,
    len: usize,
    modulus: BigUint,
    root: BigUint,
    source: RootSource,
}

impl TransformParams {
    /// Build parameters for a transform of `len` points over `Z/(2^shift + 1)`.
    ///
    /// `len` must be a power of two dividing `2^shift`.
    #[must_use]
    pub fn new(shift: usize, len: usize) -> Self {
        assert!(len.is_power_of_two(), "transform length must be a power of two");
        assert!(
            (len.trailing_zeros() as usize) <= shift,
            "transform length must divide 2^shift"
        );

        let modulus = fermat_modulus(shift);
        let (root, source) = if FERMAT_PRIME_SHIFTS.contains(&shift) {
            let candidate = fixed_root(len, &modulus);
            if is_principal_root(&candidate, len, &modulus) {
                (candidate, RootSource::Fixed)
            } else if (2 * shift) % len == 0 {
                tracing::debug!(shift, len, "fixed root rejected, using power of two");
                (power_of_two_root(shift, len, &modulus), RootSource::PowerOfTwo)
            } else {
                (candidate, RootSource::Unverified)
            }
        } else if (2 * shift) % len == 0 {
            (power_of_two_root(shift, len, &modulus), RootSource::PowerOfTwo)
        } else {
            tracing::warn!(shift, len, "no verified root of unity for this ring");
            (fixed_root(len, &modulus), RootSource::Unverified)
        };

        Self {
            shift,
            len,
            modulus,
            root,
            source,
        }
    }

    /// Modulus exponent `k`.
    #[must_use]
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Transform length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the transform has no points; `new` only builds lengths of at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The modulus `2^shift + 1`.
    #[must_use]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Root of unity of order `len`.
    #[must_use]
    pub fn root(&self) -> &BigUint {
        &self.root
    }

    /// How the root was obtained.
    #[must_use]
    pub fn root_source(&self) -> RootSource {
        self.source
    }

    /// Inverse of [`root`](Self::root) modulo `2^shift + 1`.
    ///
    /// A power-of-two root is inverted in closed form; the others go through
    /// [`fermat_inverse`] or the extended Euclidean algorithm.
    pub fn root_inverse(&self) -> Result<BigUint, NttError> {
        match self.source {
            RootSource::Fixed => fermat_inverse(&self.root, &self.modulus),
            // 2^(2k) = 1, so 2^e inverts to 2^(2k - e)
            RootSource::PowerOfTwo => {
                let exponent = 2 * self.shift - 2 * self.shift / self.len;
                Ok((BigUint::one() << exponent) % &self.modulus)
            }
            RootSource::Unverified => mod_inverse(&self.root, &self.modulus),
        }
    }
}

/// `3^((modulus - 1) / len)`.
fn fixed_root(len: usize, modulus: &BigUint) -> BigUint {
    let exponent = (modulus - BigUint::one()) / BigUint::from(len);
    mod_pow(&BigUint::from(PRIMITIVE_ROOT), &exponent, modulus)
}

/// `2^(2k / len)`, a principal `len`-th root of unity in every `2^k + 1` ring.
fn power_of_two_root(shift: usize, len: usize, modulus: &BigUint) -> BigUint {
    (BigUint::one() << (2 * shift / len)) % modulus
}

/// `root^(len/2) == -1` makes `root` a principal `len`-th root of unity.
fn is_principal_root(root: &BigUint, len: usize, modulus: &BigUint) -> bool {
    if len <= 1 {
        return true;
    }
    let half = BigUint::from(len / 2);
    mod_pow(root, &half, modulus) == modulus - BigUint::one()
}
