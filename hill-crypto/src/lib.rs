//! # Hill Crypto
//!
//! Classical polygraphic ciphers over arbitrary alphabets, built on exact
//! modular linear algebra: the Hill cipher and its Vigenère sibling.
//!
//! ```
//! use hill_crypto::{Cipher, HillCipher};
//! use hill_crypto::preset::alphabets::LATIN_UPPERCASE;
//!
//! let hill = HillCipher::try_with(LATIN_UPPERCASE.clone(), 4, Some("HILL")).unwrap();
//! assert_eq!(hill.cipher("HELP").unwrap(), "DRPA");
//! assert_eq!(hill.decipher("DRPA").unwrap(), "HELP");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod errors;
pub mod hill;
pub mod keygen;
pub mod preset;
pub mod ring;
pub mod vigenere;

pub use alphabet::Alphabet;
pub use cipher::Cipher;
pub use errors::HillCryptoError;
pub use hill::{HillCipher, HillParams};
pub use vigenere::Vigenere;
