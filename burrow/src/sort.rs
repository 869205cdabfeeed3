//! Stable multi-key sorting.

use core::cmp::Ordering;
use core::fmt;

use burrow_value::{VKey, VMap, Value};

use crate::collect::get_column;
use crate::select::Selector;

/// Sort direction for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Comparison flag for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortFlag {
    /// Compare with the runtime's type-juggling rules: numbers (and
    /// numeric strings) numerically, other strings ordinally, booleans
    /// and null by truthiness, maps by entry count.
    #[default]
    Regular,
    /// Coerce both sides to floats.
    Numeric,
    /// Coerce both sides to strings and compare ordinally.
    Str {
        /// Fold ASCII case before comparing.
        case_insensitive: bool,
    },
    /// Natural order: runs of digits compare by numeric value, so
    /// `"item9"` sorts before `"item10"`.
    Natural {
        /// Fold ASCII case before comparing.
        case_insensitive: bool,
    },
}

impl SortFlag {
    fn compare(self, a: &Value, b: &Value) -> Ordering {
        match self {
            SortFlag::Regular => compare_regular(a, b),
            SortFlag::Numeric => compare_floats(a.to_float_lossy(), b.to_float_lossy()),
            SortFlag::Str { case_insensitive } => {
                let (a, b) = (a.to_text(), b.to_text());
                if case_insensitive {
                    compare_ignore_case(&a, &b)
                } else {
                    a.cmp(&b)
                }
            }
            SortFlag::Natural { case_insensitive } => {
                compare_natural(&a.to_text(), &b.to_text(), case_insensitive)
            }
        }
    }
}

/// A per-key parameter: one value broadcast to every key, or one per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerKey<T> {
    /// The same value for every key.
    Same(T),
    /// One value per key; the length must match the key count.
    Each(Vec<T>),
}

impl<T: Clone> PerKey<T> {
    fn spread(&self, keys: usize) -> Result<Vec<T>, usize> {
        match self {
            PerKey::Same(value) => Ok(vec![value.clone(); keys]),
            PerKey::Each(values) if values.len() == keys => Ok(values.clone()),
            PerKey::Each(values) => Err(values.len()),
        }
    }
}

impl<T> From<T> for PerKey<T> {
    fn from(value: T) -> Self {
        PerKey::Same(value)
    }
}

impl<T> From<Vec<T>> for PerKey<T> {
    fn from(values: Vec<T>) -> Self {
        PerKey::Each(values)
    }
}

/// Error returned by [`multisort`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MultisortError {
    /// The direction list length differs from the key count.
    DirectionCount {
        /// Number of sort keys.
        keys: usize,
        /// Number of directions supplied.
        given: usize,
    },
    /// The flag list length differs from the key count.
    FlagCount {
        /// Number of sort keys.
        keys: usize,
        /// Number of flags supplied.
        given: usize,
    },
}

impl fmt::Display for MultisortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultisortError::DirectionCount { keys, given } => {
                write!(f, "{given} directions supplied for {keys} sort keys")
            }
            MultisortError::FlagCount { keys, given } => {
                write!(f, "{given} flags supplied for {keys} sort keys")
            }
        }
    }
}

impl core::error::Error for MultisortError {}

/// Sorts the map's elements in place by one or more keys.
///
/// Each key addresses a comparison value within every element (via
/// [`get_column`]); keys are applied left to right as successive
/// tie-breakers, each with its own direction and comparison flag. The sort
/// is stable: elements that compare equal on every key keep their relative
/// order. Afterwards string keys keep their association while integer keys
/// are renumbered sequentially in the new order.
///
/// A call with no keys or no elements returns immediately without
/// validating the per-key parameters.
///
/// # Errors
///
/// [`MultisortError::DirectionCount`] / [`MultisortError::FlagCount`] when
/// a [`PerKey::Each`] list length differs from `keys.len()`; the map is
/// left untouched.
pub fn multisort(
    array: &mut VMap,
    keys: &[Selector],
    directions: PerKey<SortDirection>,
    flags: PerKey<SortFlag>,
) -> Result<(), MultisortError> {
    if keys.is_empty() || array.is_empty() {
        return Ok(());
    }
    let count = keys.len();
    let directions = directions
        .spread(count)
        .map_err(|given| MultisortError::DirectionCount { keys: count, given })?;
    let flags = flags
        .spread(count)
        .map_err(|given| MultisortError::FlagCount { keys: count, given })?;

    log::trace!("multisort: {count} keys over {} elements", array.len());

    let columns: Vec<Vec<Value>> = keys
        .iter()
        .map(|key| get_column(array, key, false).into_values().collect())
        .collect();

    let mut order: Vec<usize> = (0..array.len()).collect();
    order.sort_by(|&a, &b| {
        for ((column, direction), flag) in columns.iter().zip(&directions).zip(&flags) {
            let ordering = flag.compare(&column[a], &column[b]);
            if ordering != Ordering::Equal {
                return direction.apply(ordering);
            }
        }
        Ordering::Equal
    });

    let mut slots: Vec<Option<(VKey, Value)>> =
        core::mem::take(array).into_iter().map(Some).collect();
    let mut sorted = VMap::with_capacity(slots.len());
    for position in order {
        if let Some((key, value)) = slots[position].take() {
            match key {
                VKey::Int(_) => {
                    sorted.push(value);
                }
                VKey::Str(_) => {
                    sorted.insert(key, value);
                }
            }
        }
    }
    *array = sorted;
    Ok(())
}

/// Type-juggling comparison, used by [`SortFlag::Regular`].
fn compare_regular(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Record(_), Value::Record(_)) => Ordering::Equal,
        (Value::Record(_), _) => Ordering::Greater,
        (_, Value::Record(_)) => Ordering::Less,
        (Value::Map(x), Value::Map(y)) => x.len().cmp(&y.len()),
        (Value::Map(_), _) => Ordering::Greater,
        (_, Value::Map(_)) => Ordering::Less,
        (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
            a.is_truthy().cmp(&b.is_truthy())
        }
        (Value::Str(x), Value::Str(y)) => match (numeric(x), numeric(y)) {
            (Some(x), Some(y)) => compare_floats(x, y),
            _ => x.cmp(y),
        },
        // Remaining combinations involve at least one number: compare
        // numerically, coercing strings.
        _ => compare_floats(a.to_float_lossy(), b.to_float_lossy()),
    }
}

/// A string that is numeric in its entirety, as a float.
fn numeric(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || text.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    text.parse().ok()
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

/// Natural-order comparison: digit runs compare by numeric value, other
/// bytes ordinally.
fn compare_natural(a: &str, b: &str, case_insensitive: bool) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let ordering = compare_digit_runs(digit_run(a, &mut i), digit_run(b, &mut j));
            if ordering != Ordering::Equal {
                return ordering;
            }
        } else {
            let (x, y) = if case_insensitive {
                (a[i].to_ascii_lowercase(), b[j].to_ascii_lowercase())
            } else {
                (a[i], b[j])
            };
            if x != y {
                return x.cmp(&y);
            }
            i += 1;
            j += 1;
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run<'a>(bytes: &'a [u8], at: &mut usize) -> &'a [u8] {
    let start = *at;
    while *at < bytes.len() && bytes[*at].is_ascii_digit() {
        *at += 1;
    }
    &bytes[start..*at]
}

fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = &a[a.iter().take_while(|&&d| d == b'0').count()..];
    let b = &b[b.iter().take_while(|&&d| d == b'0').count()..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
