//! Recursive map merging.

use core::fmt;

use burrow_value::{VKey, VMap, Value};

/// Error returned by [`merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeError {
    /// Fewer than two maps were supplied.
    NotEnoughArguments {
        /// How many maps the caller supplied.
        given: usize,
    },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::NotEnoughArguments { given } => {
                write!(f, "merge requires at least two maps, got {given}")
            }
        }
    }
}

impl core::error::Error for MergeError {}

/// Merges two or more maps into one, recursively.
///
/// Later maps win: a string-keyed entry overwrites an earlier entry of the
/// same key, except that two map values merge recursively. Integer-keyed
/// entries whose key already exists in the result are appended at the next
/// free integer key instead of overwriting; integer keys not yet present
/// are kept as-is.
///
/// The inputs are not modified; the result is a new map.
///
/// # Errors
///
/// [`MergeError::NotEnoughArguments`] when `maps` has fewer than two
/// elements.
pub fn merge(maps: &[VMap]) -> Result<VMap, MergeError> {
    if maps.len() < 2 {
        return Err(MergeError::NotEnoughArguments { given: maps.len() });
    }
    let mut result = maps[0].clone();
    for next in &maps[1..] {
        merge_into(&mut result, next);
    }
    Ok(result)
}

fn merge_into(result: &mut VMap, next: &VMap) {
    for (key, value) in next.iter() {
        match key {
            VKey::Int(index) => {
                if result.contains_key(*index) {
                    result.push(value.clone());
                } else {
                    result.insert(*index, value.clone());
                }
            }
            VKey::Str(_) => {
                let deep = matches!(value, Value::Map(_))
                    && matches!(result.get(key), Some(Value::Map(_)));
                if deep {
                    if let (Some(Value::Map(existing)), Value::Map(incoming)) =
                        (result.get_mut(key), value)
                    {
                        merge_into(existing, incoming);
                    }
                } else {
                    result.insert(key, value.clone());
                }
            }
        }
    }
}
