use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Invalid error budget: {0}. The budget must be a non-negative 32-bit integer")]
    InvalidBudget(i64),

    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Invalid PCR product: {0}")]
    InvalidPcrProduct(String),
}

/// Result type alias for silica-core operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
