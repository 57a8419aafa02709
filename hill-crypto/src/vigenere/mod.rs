//! # Vigenère cipher
//!
//! Adds a repeating password stream to the message, symbol by symbol, modulo
//! the alphabet size. Positions are preserved; nothing is stripped or padded.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::errors::HillCryptoError;
use crate::keygen::random_password;
use crate::ring::Vector;
use crate::ring::matrix_ops::{vector_add, vector_sub};

use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Vigenere {
    alphabet: Alphabet,
    password: String,
    shifts: Vector,
}

impl Vigenere {
    /// Creates a cipher; without a `password` a random one is drawn from the thread RNG.
    pub fn try_with(alphabet: Alphabet, password: Option<&str>) -> Result<Self, HillCryptoError> {
        Self::with_rng(alphabet, password, &mut rand::rng())
    }

    pub fn with_rng(
        alphabet: Alphabet,
        password: Option<&str>,
        rng: &mut impl Rng,
    ) -> Result<Self, HillCryptoError> {
        let password = match password {
            Some(password) => password.to_string(),
            None => {
                let generated = random_password(&alphabet, rng);
                debug!(len = generated.chars().count(), "generated Vigenère password");
                generated
            }
        };

        if password.is_empty() {
            return Err(HillCryptoError::InvalidKey(
                "password must not be empty".to_string(),
            ));
        }

        let shifts = alphabet.encode(password.chars()).map_err(|e| match e {
            HillCryptoError::SymbolNotFound(c) => HillCryptoError::InvalidKey(format!(
                "password symbol {:?} is not in the alphabet",
                c
            )),
            other => other,
        })?;

        Ok(Self {
            alphabet,
            password,
            shifts,
        })
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// The password shifts repeated to `len` entries.
    fn key_stream(&self, len: usize) -> Vector {
        self.shifts.iter().copied().cycle().take(len).collect()
    }
}

impl Cipher for Vigenere {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn cipher(&self, message: &str) -> Result<String, HillCryptoError> {
        let plain = self.alphabet.encode(message.chars())?;
        let shifted = vector_add(&plain, &self.key_stream(plain.len()), self.alphabet.ring())?;
        Ok(self.alphabet.decode(&shifted))
    }

    fn decipher(&self, ciphered: &str) -> Result<String, HillCryptoError> {
        let encoded = self.alphabet.encode(ciphered.chars())?;
        let plain = vector_sub(&encoded, &self.key_stream(encoded.len()), self.alphabet.ring())?;
        Ok(self.alphabet.decode(&plain))
    }
}
