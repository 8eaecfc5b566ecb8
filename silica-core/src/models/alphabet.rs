use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::{DNA4_SYMBOLS, DNA_SYMBOLS};
use crate::errors::{Result, SequenceError};

///
/// An ordered set of uppercase ASCII symbols that a sequence may be drawn from.
///
/// Symbols are kept in ascending byte order, so iterating an alphabet is stable
/// from run to run. Membership checks go through a 256-entry lookup table.
///
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: Vec<u8>,
    members: [bool; 256],
}

impl Alphabet {
    ///
    /// Build an alphabet from a list of symbols.
    ///
    /// Lowercase letters are folded to uppercase and duplicates are dropped.
    ///
    /// # Arguments
    /// - symbols: the symbols, e.g. `"ACGT"`
    ///
    /// # Errors
    /// `InvalidSymbol` for anything that is not an ASCII letter, `EmptyAlphabet`
    /// if no symbols are given.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut members = [false; 256];

        for (position, symbol) in symbols.chars().enumerate() {
            if !symbol.is_ascii_alphabetic() {
                return Err(SequenceError::InvalidSymbol { symbol, position });
            }
            members[symbol.to_ascii_uppercase() as usize] = true;
        }

        let symbols: Vec<u8> = (0u8..=255).filter(|&b| members[b as usize]).collect();
        if symbols.is_empty() {
            return Err(SequenceError::EmptyAlphabet);
        }

        Ok(Alphabet { symbols, members })
    }

    /// The genomic alphabet `{A, C, G, T, N}`.
    pub fn dna() -> Self {
        Self::from_static(DNA_SYMBOLS)
    }

    /// The unambiguous nucleotide alphabet `{A, C, G, T}`.
    pub fn dna4() -> Self {
        Self::from_static(DNA4_SYMBOLS)
    }

    fn from_static(symbols: &'static str) -> Self {
        let mut members = [false; 256];
        for b in symbols.bytes() {
            members[b as usize] = true;
        }
        let symbols: Vec<u8> = (0u8..=255).filter(|&b| members[b as usize]).collect();
        Alphabet { symbols, members }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.members[symbol as usize]
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols.iter().copied()
    }

    ///
    /// Check that every symbol of a sequence belongs to this alphabet.
    ///
    /// The check is case-sensitive: `"acgt"` is not valid over `{A, C, G, T}`.
    ///
    /// # Errors
    /// `InvalidSymbol` naming the first offending symbol and its 0-based position.
    pub fn validate(&self, sequence: &str) -> Result<()> {
        match sequence
            .chars()
            .enumerate()
            .find(|(_, c)| !(c.is_ascii() && self.contains(*c as u8)))
        {
            Some((position, symbol)) => Err(SequenceError::InvalidSymbol { symbol, position }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.symbols {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({})", self)
    }
}

impl FromStr for Alphabet {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self> {
        Alphabet::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(value: Alphabet) -> Self {
        value.to_string()
    }
}
