use crate::alphabet::Alphabet;

use lazy_static::lazy_static;

/// The 26 letters `A..=Z`.
pub const LATIN_UPPERCASE_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// The 27 letters of the Spanish alphabet, with `Ñ` after `N`.
pub const SPANISH_UPPERCASE_SYMBOLS: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

lazy_static! {
    /// Uppercase Latin alphabet, m = 26.
    pub static ref LATIN_UPPERCASE: Alphabet = Alphabet::try_from_str(LATIN_UPPERCASE_SYMBOLS)
        .unwrap_or_else(|e| panic!("preset alphabet is valid: {}", e));

    /// Uppercase Spanish alphabet, m = 27.
    pub static ref SPANISH_UPPERCASE: Alphabet = Alphabet::try_from_str(SPANISH_UPPERCASE_SYMBOLS)
        .unwrap_or_else(|e| panic!("preset alphabet is valid: {}", e));
}
