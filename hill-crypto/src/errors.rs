#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// The key cannot be used: bad length, unknown symbol, or a key matrix
    /// that is not invertible modulo the alphabet size.
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    /// A message character that is not part of the alphabet.
    #[error("Symbol {0:?} not found in alphabet")]
    SymbolNotFound(char),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Could not find an invertible key matrix after {0} attempts")]
    KeyGenerationExhausted(usize),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
