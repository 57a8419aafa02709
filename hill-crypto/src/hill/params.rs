use crate::errors::HillCryptoError;

use num_integer::Roots;

use serde::{Deserialize, Serialize};

/// Upper bound on random key draws before giving up.
pub const DEFAULT_MAX_KEY_ATTEMPTS: usize = 10_000;

fn default_max_key_attempts() -> usize {
    DEFAULT_MAX_KEY_ATTEMPTS
}

fn default_strict_keys() -> bool {
    true
}

/// Parameters of a Hill cipher instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillParams {
    /// Key length `n`; must be a perfect square `k²`, where `k` is the block size.
    pub key_length: usize,
    /// Random keys drawn before key generation fails with `KeyGenerationExhausted`.
    #[serde(default = "default_max_key_attempts")]
    pub max_key_attempts: usize,
    /// Reject caller-supplied keys whose matrix is not invertible mod `m`.
    /// When false such keys are accepted and only `decipher` fails.
    #[serde(default = "default_strict_keys")]
    pub strict_keys: bool,
}

impl HillParams {
    /// Creates parameters for keys of length `key_length` with default settings.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidKey` if `key_length` is zero or not a perfect square.
    pub fn try_with(key_length: usize) -> Result<Self, HillCryptoError> {
        let params = Self {
            key_length,
            max_key_attempts: DEFAULT_MAX_KEY_ATTEMPTS,
            strict_keys: true,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_max_key_attempts(mut self, attempts: usize) -> Result<Self, HillCryptoError> {
        self.max_key_attempts = attempts;
        self.validate()?;
        Ok(self)
    }

    pub fn with_strict_keys(mut self, strict: bool) -> Self {
        self.strict_keys = strict;
        self
    }

    /// Side length `k` of the key matrix, `k = √n`.
    pub fn block_size(&self) -> usize {
        self.key_length.sqrt()
    }

    pub fn validate(&self) -> Result<(), HillCryptoError> {
        if self.key_length == 0 {
            return Err(HillCryptoError::InvalidKey(
                "key length must be > 0".to_string(),
            ));
        }

        let k = self.block_size();
        if k * k != self.key_length {
            return Err(HillCryptoError::InvalidKey(format!(
                "key length {} is not a perfect square",
                self.key_length
            )));
        }

        if self.max_key_attempts == 0 {
            return Err(HillCryptoError::InvalidParameters(
                "max_key_attempts must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates parameters; missing optional fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_squares_accepted() -> Result<(), HillCryptoError> {
        assert_eq!(HillParams::try_with(1)?.block_size(), 1);
        assert_eq!(HillParams::try_with(4)?.block_size(), 2);
        assert_eq!(HillParams::try_with(9)?.block_size(), 3);
        assert_eq!(HillParams::try_with(144)?.block_size(), 12);
        Ok(())
    }

    #[test]
    fn test_non_squares_rejected() {
        for n in [0, 2, 3, 5, 8, 10, 15, 17] {
            assert!(
                matches!(HillParams::try_with(n), Err(HillCryptoError::InvalidKey(_))),
                "n = {} should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_builders() -> Result<(), HillCryptoError> {
        let params = HillParams::try_with(4)?
            .with_max_key_attempts(3)?
            .with_strict_keys(false);
        assert_eq!(params.max_key_attempts, 3);
        assert!(!params.strict_keys);
        assert!(HillParams::try_with(4)?.with_max_key_attempts(0).is_err());
        Ok(())
    }

    #[test]
    fn test_json_roundtrip_and_defaults() -> Result<(), HillCryptoError> {
        let params = HillParams::try_with(9)?.with_strict_keys(false);
        assert_eq!(HillParams::from_json(&params.to_json()?)?, params);

        let minimal = HillParams::from_json(r#"{"key_length": 4}"#)?;
        assert_eq!(minimal.max_key_attempts, DEFAULT_MAX_KEY_ATTEMPTS);
        assert!(minimal.strict_keys);
        Ok(())
    }

    #[test]
    fn test_json_is_validated() {
        assert!(matches!(
            HillParams::from_json(r#"{"key_length": 5}"#),
            Err(HillCryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            HillParams::from_json("{"),
            Err(HillCryptoError::SerializationError(_))
        ));
    }
}
