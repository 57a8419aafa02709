//! Modular arithmetic over Z_m, where m is the alphabet size.

use crate::errors::HillCryptoError;

use super::extended_gcd;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCryptoError> {
        if modulus <= 1 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus {} does not fit in i64",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(54), 2);
    /// assert_eq!(ring.normalize(-11), 15);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Reduces an arbitrary-precision integer into `[0, modulus - 1]`.
    ///
    /// Used for exact determinants, which can outgrow `i64` before reduction.
    pub fn normalize_big(&self, value: &BigInt) -> i64 {
        let m = BigInt::from(self.modulus);
        // mod_floor keeps the sign of the divisor, so the result is in [0, m)
        value
            .mod_floor(&m)
            .to_i64()
            .unwrap_or_default()
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;
        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.sub(3, 5), 25);
    /// assert_eq!(ring.sub(-2, 3), 22);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.add(a, self.neg(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(6, 7), 16); // 42 mod 26
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;
        (product % self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return 0;
        }
        self.modulus as i64 - a_norm
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm; the Bézout coefficient is
    /// normalized into `[0, modulus)` since it is frequently negative.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverse` if the inverse does not exist,
    /// which includes `a ≡ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(15).unwrap(), 7); // 15 * 7 = 105 = 1 mod 26
    /// assert_eq!(ring.inv(-11).unwrap(), 7); // -11 = 15 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(2).is_err()); // gcd(2, 26) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCryptoError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }

    /// Whether `a` is a unit of the ring, i.e. has a multiplicative inverse.
    pub fn is_unit(&self, a: i64) -> bool {
        self.inv(a).is_ok()
    }
}
