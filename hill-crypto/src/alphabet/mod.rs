//! # Alphabet
//!
//! An ordered, duplicate-free symbol set. Its size is the modulus for all
//! cipher arithmetic and its order fixes the symbol ↔ index bijection.

use crate::errors::HillCryptoError;
use crate::ring::{Ring, Vector};

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    ring: Ring,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// * `InvalidAlphabet` if the alphabet is empty or repeats a symbol.
    /// * `InvalidModulus` if it has a single symbol.
    pub fn try_from_str(symbols: &str) -> Result<Self, HillCryptoError> {
        Self::try_from_symbols(symbols.chars().collect())
    }

    pub fn try_from_symbols(symbols: Vec<char>) -> Result<Self, HillCryptoError> {
        if symbols.is_empty() {
            return Err(HillCryptoError::InvalidAlphabet(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i).is_some() {
                return Err(HillCryptoError::InvalidAlphabet(format!(
                    "symbol {:?} appears more than once",
                    symbol
                )));
            }
        }

        let ring = Ring::try_with(symbols.len() as u64)?;

        Ok(Self {
            symbols,
            index,
            ring,
        })
    }

    /// Number of symbols, i.e. the modulus `m`.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The ring Z_m with `m = len()`.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The first symbol, used as block padding.
    pub fn first(&self) -> char {
        self.symbols[0]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Symbol at `index`, which is reduced mod `m` first.
    pub fn symbol_at(&self, index: i64) -> char {
        self.symbols[self.ring.normalize(index) as usize]
    }

    /// Maps every symbol to its index.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::SymbolNotFound` on the first character outside the alphabet.
    pub fn encode<I>(&self, text: I) -> Result<Vector, HillCryptoError>
    where
        I: IntoIterator<Item = char>,
    {
        text.into_iter()
            .map(|c| {
                self.index_of(c)
                    .map(|i| i as i64)
                    .ok_or(HillCryptoError::SymbolNotFound(c))
            })
            .collect()
    }

    /// Maps indices back to symbols.
    pub fn decode(&self, indices: &[i64]) -> String {
        indices.iter().map(|&i| self.symbol_at(i)).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
