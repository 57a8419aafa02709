//! Random key strings over an alphabet.
//!
//! Every generator takes the randomness source as `rng: &mut impl Rng`, so
//! callers choose between the thread RNG and a seeded `StdRng`.

use crate::alphabet::Alphabet;

use rand::Rng;

/// Shortest password [`random_password`] produces.
pub const MIN_PASSWORD_LEN: usize = 4;
/// Longest password [`random_password`] produces.
pub const MAX_PASSWORD_LEN: usize = 10;

/// A key of `len` symbols drawn uniformly from `alphabet`.
pub fn random_key(alphabet: &Alphabet, len: usize, rng: &mut impl Rng) -> String {
    (0..len)
        .map(|_| alphabet.symbols()[rng.random_range(0..alphabet.len())])
        .collect()
}

/// A password of random length in `MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN`.
pub fn random_password(alphabet: &Alphabet, rng: &mut impl Rng) -> String {
    let len = rng.random_range(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN);
    random_key(alphabet, len, rng)
}
