//! # Hill cipher
//!
//! Polygraphic substitution: the message is cut into blocks of `k` symbols and
//! every block, read as a column vector of alphabet indices, is multiplied by
//! a `k×k` key matrix modulo the alphabet size. Deciphering multiplies by the
//! modular inverse of the key matrix.

pub mod params;

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::errors::HillCryptoError;
use crate::keygen::random_key;
use crate::ring::matrix_ops::{determinant_mod, matrix_inverse, matrix_vector_mul};
use crate::ring::{Matrix, Ring};

pub use params::HillParams;

use rand::Rng;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
pub struct HillCipher {
    alphabet: Alphabet,
    params: HillParams,
    key: String,
    key_matrix: Matrix,
}

impl HillCipher {
    /// Creates a cipher with default parameters for keys of length `key_length`.
    ///
    /// Without a `key`, one is drawn from the thread RNG until its matrix is
    /// invertible mod `m`.
    ///
    /// # Errors
    ///
    /// * `InvalidKey` if `key_length` is not a perfect square, or the key has the
    ///   wrong length, contains a symbol outside the alphabet, or is not invertible.
    /// * `KeyGenerationExhausted` if no invertible key was found.
    pub fn try_with(
        alphabet: Alphabet,
        key_length: usize,
        key: Option<&str>,
    ) -> Result<Self, HillCryptoError> {
        let params = HillParams::try_with(key_length)?;
        Self::with_params(alphabet, params, key, &mut rand::rng())
    }

    /// Creates a cipher with explicit parameters and randomness source.
    pub fn with_params(
        alphabet: Alphabet,
        params: HillParams,
        key: Option<&str>,
        rng: &mut impl Rng,
    ) -> Result<Self, HillCryptoError> {
        params.validate()?;

        let (key, key_matrix) = match key {
            Some(key) => {
                let key_matrix = build_key_matrix(&alphabet, key, params.block_size())?;
                check_supplied_key(&alphabet, &params, &key_matrix)?;
                (key.to_string(), key_matrix)
            }
            None => generate_key(&alphabet, &params, rng)?,
        };

        Ok(Self {
            alphabet,
            params,
            key,
            key_matrix,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn key_matrix(&self) -> &Matrix {
        &self.key_matrix
    }

    pub fn params(&self) -> &HillParams {
        &self.params
    }

    /// Number of symbols per block, `k`.
    pub fn block_size(&self) -> usize {
        self.params.block_size()
    }

    /// Modular inverse of the key matrix; computed on every call, never cached.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverse` for a non-invertible key, which can
    /// only have been accepted with `strict_keys` disabled.
    pub fn inverse_key_matrix(&self) -> Result<Matrix, HillCryptoError> {
        matrix_inverse(&self.key_matrix, self.alphabet.ring())
    }

    /// Applies `matrix` to every block of `text`.
    ///
    /// Whitespace outside the alphabet is dropped, the remaining symbols are
    /// padded with the alphabet's first symbol to a multiple of `k`, and each
    /// block `v` becomes `matrix · v mod m`. Padding is never removed.
    fn transform(&self, matrix: &Matrix, text: &str) -> Result<String, HillCryptoError> {
        let k = self.block_size();
        let ring = self.alphabet.ring();

        let mut indices = self.alphabet.encode(
            text.chars()
                .filter(|&c| !c.is_whitespace() || self.alphabet.contains(c)),
        )?;
        let padding = indices.len().next_multiple_of(k) - indices.len();
        // index 0 is alphabet.first()
        indices.extend(std::iter::repeat_n(0, padding));

        let mut output = String::with_capacity(indices.len());
        for block in indices.chunks_exact(k) {
            let transformed = matrix_vector_mul(matrix, &block.to_vec(), ring)?;
            output.push_str(&self.alphabet.decode(&transformed));
        }

        trace!(blocks = indices.len() / k, padding, "transformed text");
        Ok(output)
    }
}

impl Cipher for HillCipher {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn cipher(&self, message: &str) -> Result<String, HillCryptoError> {
        self.transform(&self.key_matrix, message)
    }

    fn decipher(&self, ciphered: &str) -> Result<String, HillCryptoError> {
        let inverse = self.inverse_key_matrix()?;
        self.transform(&inverse, ciphered)
    }
}

/// Reshapes `key` row-major into a `k×k` matrix of alphabet indices.
pub fn build_key_matrix(
    alphabet: &Alphabet,
    key: &str,
    block_size: usize,
) -> Result<Matrix, HillCryptoError> {
    let key_len = key.chars().count();
    if block_size == 0 || key_len != block_size * block_size {
        return Err(HillCryptoError::InvalidKey(format!(
            "key has {} symbols, expected {}",
            key_len,
            block_size * block_size
        )));
    }

    let indices = alphabet.encode(key.chars()).map_err(|e| match e {
        HillCryptoError::SymbolNotFound(c) => {
            HillCryptoError::InvalidKey(format!("key symbol {:?} is not in the alphabet", c))
        }
        other => other,
    })?;

    Ok(indices.chunks(block_size).map(<[i64]>::to_vec).collect())
}

/// Whether the matrix has an inverse mod `m`, i.e. `gcd(det, m) == 1`.
pub fn is_invertible(key_matrix: &Matrix, ring: &Ring) -> Result<bool, HillCryptoError> {
    Ok(ring.is_unit(determinant_mod(key_matrix, ring)?))
}

fn check_supplied_key(
    alphabet: &Alphabet,
    params: &HillParams,
    key_matrix: &Matrix,
) -> Result<(), HillCryptoError> {
    if is_invertible(key_matrix, alphabet.ring())? {
        return Ok(());
    }

    if params.strict_keys {
        return Err(HillCryptoError::InvalidKey(format!(
            "key matrix is not invertible mod {}",
            alphabet.len()
        )));
    }

    warn!(
        modulus = alphabet.len(),
        "accepting a key whose matrix is not invertible; decipher will fail"
    );
    Ok(())
}

/// Draws random keys until one yields an invertible matrix, at most
/// `params.max_key_attempts` times.
fn generate_key(
    alphabet: &Alphabet,
    params: &HillParams,
    rng: &mut impl Rng,
) -> Result<(String, Matrix), HillCryptoError> {
    let ring = alphabet.ring();

    for attempt in 1..=params.max_key_attempts {
        let key = random_key(alphabet, params.key_length, rng);
        let key_matrix = build_key_matrix(alphabet, &key, params.block_size())?;
        let det = determinant_mod(&key_matrix, ring)?;

        if ring.is_unit(det) {
            debug!(attempt, key_length = params.key_length, "generated invertible key");
            return Ok((key, key_matrix));
        }
        trace!(attempt, det, "singular key matrix, drawing again");
    }

    Err(HillCryptoError::KeyGenerationExhausted(
        params.max_key_attempts,
    ))
}
