use crate::error::OrdkeyError;
use crate::generators::bound::Bound;

#[cfg_attr(test, mockall::automock)]
pub trait KeyGenerator: Send + Sync {
    /// Returns a key strictly between `lower` and `upper`.
    fn between(&self, lower: &Bound, upper: &Bound) -> Result<String, OrdkeyError>;

    /// Checks that `key` is a canonical, non-empty key of this generator's alphabet.
    fn validate(&self, key: &str) -> Result<(), OrdkeyError>;
}
