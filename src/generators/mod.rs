pub mod alphabet;
pub mod bound;
pub mod midpoint;
pub mod sequence;
pub mod traits;

pub use alphabet::{Alphabet, UPPER_LIMIT, ZERO};
pub use bound::Bound;
pub use midpoint::{MidpointGenerator, generate};
pub use sequence::{KeyWalk, check_ascending, keys_after, keys_before, keys_between};
pub use traits::KeyGenerator;

#[cfg(test)]
pub use traits::MockKeyGenerator;
