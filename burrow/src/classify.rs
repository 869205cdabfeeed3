//! Shape classifiers for maps.

use burrow_value::{VKey, VMap};

/// Whether the map is associative.
///
/// With `all_strings`, every key must be a string; otherwise one string key
/// suffices. An empty map is never associative.
pub fn is_associative(map: &VMap, all_strings: bool) -> bool {
    if map.is_empty() {
        return false;
    }
    if all_strings {
        map.keys().all(VKey::is_str)
    } else {
        map.keys().any(VKey::is_str)
    }
}

/// Whether the map is indexed (all keys integers).
///
/// With `consecutive`, the keys must additionally form the set
/// `0..len` — in any order. An empty map is always indexed.
pub fn is_indexed(map: &VMap, consecutive: bool) -> bool {
    if map.is_empty() {
        return true;
    }
    if !consecutive {
        return map.keys().all(VKey::is_int);
    }
    let mut indices = Vec::with_capacity(map.len());
    for key in map.keys() {
        match key {
            VKey::Int(index) => indices.push(*index),
            VKey::Str(_) => return false,
        }
    }
    indices.sort_unstable();
    indices.into_iter().eq(0..map.len() as i64)
}
