//! Map keys: the string-or-integer key domain.

use core::fmt;

/// A map key.
///
/// [`VMap`](crate::VMap) keys are either integers or strings, matching the
/// key domain of an ordered hashtable. Two keys are equal only when they
/// have the same kind and value: `VKey::Int(1)` and `VKey::Str("1".into())`
/// address different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VKey {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl VKey {
    /// Returns the integer for integer keys.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            VKey::Int(index) => Some(*index),
            VKey::Str(_) => None,
        }
    }

    /// Returns the string for string keys.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VKey::Int(_) => None,
            VKey::Str(name) => Some(name),
        }
    }

    /// Returns `true` for integer keys.
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, VKey::Int(_))
    }

    /// Returns `true` for string keys.
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, VKey::Str(_))
    }
}

impl fmt::Display for VKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VKey::Int(index) => write!(f, "{index}"),
            VKey::Str(name) => f.write_str(name),
        }
    }
}

impl From<i64> for VKey {
    fn from(index: i64) -> Self {
        VKey::Int(index)
    }
}

impl From<i32> for VKey {
    fn from(index: i32) -> Self {
        VKey::Int(index.into())
    }
}

impl From<usize> for VKey {
    fn from(index: usize) -> Self {
        VKey::Int(index as i64)
    }
}

impl From<&str> for VKey {
    fn from(name: &str) -> Self {
        VKey::Str(name.to_owned())
    }
}

impl From<String> for VKey {
    fn from(name: String) -> Self {
        VKey::Str(name)
    }
}

impl From<&VKey> for VKey {
    fn from(key: &VKey) -> Self {
        key.clone()
    }
}
