use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrdkeyError {
    #[error("Ordering violation: {lower:?} >= {upper:?}")]
    OrderingViolation { lower: String, upper: String },

    #[error("Trailing zero digit in key: {0:?}")]
    TrailingZeroViolation(String),

    #[error("Key {key:?} contains digit {digit:?} outside the alphabet")]
    InvalidDigit { key: String, digit: char },

    #[error("Empty key")]
    EmptyKey,

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Config read error: {0}")]
    ConfigRead(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),
}
