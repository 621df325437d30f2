use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlphabetError {
    #[error("Invalid nucleotide '{symbol}' at position {position}: expected one of A, C, G, T")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Invalid strand '{0}': expected '+' or '-'")]
    InvalidStrand(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("log2 is undefined for non-positive value {0}")]
    Domain(f64),

    #[error("Probability matrix rows must have equal, non-zero lengths, got {0:?}")]
    MatrixShape([usize; 4]),

    #[error("Probability {value} at row {row}, column {column} is outside [0, 1]")]
    ProbabilityRange { row: usize, column: usize, value: f64 },

    #[error("Window of length {found} can't be scored by a motif of length {expected}")]
    WindowLength { expected: usize, found: usize },

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}
