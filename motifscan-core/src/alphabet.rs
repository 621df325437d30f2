use std::fmt::Display;

use crate::consts::DNA_ALPHABET;
use crate::errors::AlphabetError;

/// One of the four canonical DNA bases.
///
/// The discriminant is the row index of the base in probability and score matrices,
/// following the order of [DNA_ALPHABET].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Row index of this base in a 4 x L matrix.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn as_char(self) -> char {
        DNA_ALPHABET[self.index()]
    }

    /// Watson-Crick partner: `A <-> T`, `C <-> G`.
    #[inline]
    pub fn complement(self) -> Nucleotide {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::T => Nucleotide::A,
        }
    }

    ///
    /// Parse a base, accepting lower case input as well.
    ///
    /// Soft-masked genome sequence is lower case, so sequence readers go through here
    /// rather than the strict `TryFrom<char>` conversion.
    ///
    pub fn from_char_ignore_case(symbol: char) -> Option<Nucleotide> {
        Nucleotide::try_from(symbol.to_ascii_uppercase()).ok()
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = AlphabetError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(AlphabetError::InvalidSymbol {
                symbol,
                position: 0,
            }),
        }
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = AlphabetError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Nucleotide::try_from(byte as char)
    }
}

impl From<Nucleotide> for char {
    fn from(base: Nucleotide) -> Self {
        base.as_char()
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

///
/// Complement a single base.
///
/// Only `A`, `C`, `G` and `T` are accepted; `N`, IUPAC codes and lower case
/// symbols are rejected with [AlphabetError::InvalidSymbol].
///
pub fn complement(base: char) -> Result<char, AlphabetError> {
    Ok(Nucleotide::try_from(base)?.complement().as_char())
}

///
/// Reverse complement a sequence of canonical bases.
///
/// Fails on the first symbol outside the alphabet, reporting its position in the
/// input (not in the reversed output).
///
/// # Arguments
/// - sequence: forward strand sequence, upper case `ACGT` only
///
pub fn reverse_complement(sequence: &str) -> Result<String, AlphabetError> {
    let bases = parse_strict(sequence)?;
    Ok(bases.iter().rev().map(|b| b.complement().as_char()).collect())
}

/// Reverse complement an already validated sequence.
pub fn reverse_complement_bases(bases: &[Nucleotide]) -> Vec<Nucleotide> {
    bases.iter().rev().map(|b| b.complement()).collect()
}

///
/// Parse sequence text into bases, normalizing lower case symbols.
///
/// # Arguments
/// - sequence: sequence text, `ACGTacgt` only
///
pub fn parse_sequence(sequence: &str) -> Result<Vec<Nucleotide>, AlphabetError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Nucleotide::from_char_ignore_case(symbol)
                .ok_or(AlphabetError::InvalidSymbol { symbol, position })
        })
        .collect()
}

fn parse_strict(sequence: &str) -> Result<Vec<Nucleotide>, AlphabetError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Nucleotide::try_from(symbol)
                .map_err(|_| AlphabetError::InvalidSymbol { symbol, position })
        })
        .collect()
}
