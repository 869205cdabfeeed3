//! Dot-path resolution against nested values.

use burrow_value::{VKey, VMap, Value};

use crate::select::Selector;

/// Retrieves the value addressed by `key` from an element, or `default`.
///
/// A string key may be a dot path: `"x.y.z"` resolves
/// `source[x][y][z]`, reading record fields where the intermediate value is
/// a record. Resolution stops at the first segment that is neither a map
/// entry nor a record field, yielding `default` — never an error.
///
/// A map element literally keyed `"x.y.z"` takes precedence over the
/// nested resolution `x -> y -> z`. Map segments that miss as string keys
/// fall back to an integer-key lookup, so `"items.1"` reaches into lists.
///
/// A [`Selector::With`] key short-circuits: the function is invoked with
/// `(source, default)` and its result returned as-is.
pub fn get_value(source: &Value, key: &Selector, default: &Value) -> Value {
    let path = match key {
        Selector::With(f) => return f(source, default),
        Selector::Path(path) => path.as_str(),
    };

    // The whole path as a literal key wins over decomposition.
    if let Value::Map(map) = source
        && let Some(found) = entry(map, path)
    {
        return found.clone();
    }

    let resolved;
    let (parent, leaf) = match path.rfind('.') {
        Some(dot) => {
            resolved = get_value(source, &Selector::path(&path[..dot]), default);
            (&resolved, &path[dot + 1..])
        }
        None => (source, path),
    };

    match parent {
        Value::Record(record) => record.read(leaf).unwrap_or_else(|| default.clone()),
        Value::Map(map) => entry(map, leaf).cloned().unwrap_or_else(|| default.clone()),
        _ => default.clone(),
    }
}

/// Removes the entry for `key` from the map and returns its value, or
/// `default` if the key is absent. Single-segment only: a dot in `key` is
/// part of the key, not a path. The remaining entries keep their order.
pub fn remove(map: &mut VMap, key: impl Into<VKey>, default: Value) -> Value {
    match map.remove(key) {
        Some(value) => value,
        None => default,
    }
}

/// Whether the map contains `key`, optionally ignoring ASCII case.
///
/// The case-insensitive scan compares ordinally (no locale rules) and
/// matches integer keys through their decimal rendering; the first match
/// wins.
pub fn key_exists(key: &str, map: &VMap, case_sensitive: bool) -> bool {
    if case_sensitive {
        return entry(map, key).is_some();
    }
    map.keys().any(|existing| match existing {
        VKey::Str(name) => name.eq_ignore_ascii_case(key),
        VKey::Int(index) => index.to_string() == key,
    })
}

/// Map lookup for one path segment: the string key first, then the segment
/// reinterpreted as an integer key.
fn entry<'a>(map: &'a VMap, segment: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(segment) {
        return Some(value);
    }
    segment.parse::<i64>().ok().and_then(|index| map.get(index))
}
