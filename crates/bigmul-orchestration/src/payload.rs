//! Random benchmark payloads.

use rand::Rng;

/// Characters random payloads are drawn from.
pub const PAYLOAD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Generate `size` random ASCII characters from [`PAYLOAD_CHARSET`].
#[must_use]
pub fn generate_random_data(size: usize) -> String {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| char::from(PAYLOAD_CHARSET[rng.random_range(0..PAYLOAD_CHARSET.len())]))
        .collect()
}
