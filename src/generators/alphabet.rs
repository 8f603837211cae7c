use std::fmt;
use std::str::FromStr;

use crate::error::OrdkeyError;

/// Code of the lowest digit in the default alphabet (`' '`).
pub const ZERO: u8 = 32;

/// One past the code of the highest digit in the default alphabet (`'~' + 1`).
pub const UPPER_LIMIT: u8 = 127;

/// A contiguous range of ASCII codes `[zero, upper_limit)` used as key digits.
///
/// Keys built from an alphabet compare correctly under plain byte (and
/// therefore `str`) ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    zero: u8,
    upper_limit: u8,
}

impl Alphabet {
    /// The 95 printable ASCII characters, space through tilde.
    pub const BASE95: Alphabet = Alphabet {
        zero: ZERO,
        upper_limit: UPPER_LIMIT,
    };

    /// The decimal digits `0` through `9`.
    pub const BASE10: Alphabet = Alphabet {
        zero: b'0',
        upper_limit: b'9' + 1,
    };

    pub fn new(zero: u8, upper_limit: u8) -> Result<Self, OrdkeyError> {
        if upper_limit > 128 {
            return Err(OrdkeyError::InvalidAlphabet(format!(
                "upper limit {upper_limit} is outside the ASCII range"
            )));
        }
        if upper_limit < zero || upper_limit - zero < 2 {
            return Err(OrdkeyError::InvalidAlphabet(format!(
                "range {zero}..{upper_limit} must hold at least two digits"
            )));
        }
        Ok(Self { zero, upper_limit })
    }

    pub fn zero(&self) -> u8 {
        self.zero
    }

    pub fn upper_limit(&self) -> u8 {
        self.upper_limit
    }

    pub fn zero_digit(&self) -> char {
        char::from(self.zero)
    }

    /// Number of digits in the alphabet.
    pub fn len(&self) -> usize {
        usize::from(self.upper_limit - self.zero)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, digit: u8) -> bool {
        (self.zero..self.upper_limit).contains(&digit)
    }

    /// Midpoint of two digit codes, rounding half up.
    ///
    /// `upper` may be `upper_limit` itself, standing in for "no upper digit".
    pub fn midpoint(&self, lower: u8, upper: u8) -> u8 {
        ((u16::from(lower) + u16::from(upper) + 1) / 2) as u8
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BASE95
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BASE95 => write!(f, "base95"),
            Self::BASE10 => write!(f, "base10"),
            _ => write!(f, "{}..{}", self.zero, self.upper_limit),
        }
    }
}

impl FromStr for Alphabet {
    type Err = OrdkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "base95" => Ok(Self::BASE95),
            "base10" => Ok(Self::BASE10),
            range => {
                let (start, end) = range.split_once("..").ok_or_else(|| {
                    OrdkeyError::InvalidAlphabet(format!(
                        "expected base10, base95 or <start>..<end>, got {range:?}"
                    ))
                })?;
                let parse = |code: &str| {
                    code.trim().parse::<u8>().map_err(|e| {
                        OrdkeyError::InvalidAlphabet(format!("bad digit code {code:?}: {e}"))
                    })
                };
                Self::new(parse(start)?, parse(end)?)
            }
        }
    }
}
