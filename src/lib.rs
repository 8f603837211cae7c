//! Fractional order keys: strings that sort in list order, so any item can be
//! moved by giving it one new key between its new neighbours.

pub mod commands;
pub mod config;
pub mod error;
pub mod generators;

pub use error::OrdkeyError;
pub use generators::{
    Alphabet, Bound, KeyGenerator, MidpointGenerator, UPPER_LIMIT, ZERO, generate,
};
