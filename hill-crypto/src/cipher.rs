use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;

/// A symmetric classical cipher over an [`Alphabet`].
pub trait Cipher {
    fn alphabet(&self) -> &Alphabet;

    /// Enciphers `message`; fails with `SymbolNotFound` on symbols outside the alphabet.
    fn cipher(&self, message: &str) -> Result<String, HillCryptoError>;

    fn decipher(&self, ciphered: &str) -> Result<String, HillCryptoError>;
}
