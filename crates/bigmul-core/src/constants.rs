//! Base-case thresholds, key ranges and exit codes.

/// Karatsuba multiplies directly when either magnitude is below this.
pub const KARATSUBA_THRESHOLD: u64 = 10;

/// Toom-Cook-3 multiplies directly when either magnitude is below this.
pub const TOOM_COOK_THRESHOLD: u64 = 1000;

/// Schönhage-Strassen multiplies directly when either magnitude is below this.
pub const SSA_THRESHOLD: u64 = bigmul_ntt::DIRECT_MUL_THRESHOLD;

/// Karatsuba keys are drawn from `[1000, 11000)`.
pub const KARATSUBA_KEY_RANGE: std::ops::Range<u64> = 1000..11_000;

/// Toom-Cook-3 keys are drawn from `[10000, 110000)`.
pub const TOOM_COOK_KEY_RANGE: std::ops::Range<u64> = 10_000..110_000;

/// Schönhage-Strassen keys have a bit width drawn from `[20, 30)`.
pub const SSA_KEY_BITS: std::ops::Range<u32> = 20..30;

/// Separator between encoded chunks.
pub const CHUNK_SEPARATOR: char = ':';

/// Characters kept in benchmark previews before `...` is appended.
pub const PREVIEW_LEN: usize = 100;

/// Exit codes for the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm products did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Malformed encoded input.
    pub const ERROR_DECODE: i32 = 5;
}
