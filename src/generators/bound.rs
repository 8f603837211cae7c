/// One end of the interval a new key is generated in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Bound {
    /// Open end: start of the list as a lower bound, end of the list as an upper bound.
    #[default]
    Unbounded,
    Key(String),
}

impl Bound {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Unbounded => None,
            Self::Key(key) => Some(key),
        }
    }
}

impl From<Option<&str>> for Bound {
    fn from(key: Option<&str>) -> Self {
        key.map_or(Self::Unbounded, Self::key)
    }
}
