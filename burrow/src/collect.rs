//! Builders that reshape sequences of elements.

use burrow_value::{VMap, Value};

use crate::path::get_value;
use crate::select::Selector;

/// Indexes elements by a derived key.
///
/// Each element's key is resolved through `key`; elements whose derived
/// key has no key form (null, maps, records) are dropped. Later elements
/// overwrite earlier ones on duplicate keys.
pub fn index(array: &VMap, key: &Selector) -> VMap {
    let mut result = VMap::new();
    for element in array.values() {
        if let Some(derived) = get_value(element, key, &Value::Null).to_key() {
            result.insert(derived, element.clone());
        }
    }
    result
}

/// Projects one field across a sequence.
///
/// With `keep_keys` the result retains each element's original key;
/// otherwise values are appended fresh from index zero. Elements missing
/// the field project null.
pub fn get_column(array: &VMap, name: &Selector, keep_keys: bool) -> VMap {
    let mut result = VMap::with_capacity(array.len());
    for (key, element) in array.iter() {
        let value = get_value(element, name, &Value::Null);
        if keep_keys {
            result.insert(key, value);
        } else {
            result.push(value);
        }
    }
    result
}

/// Builds a key-value map from a sequence of elements.
///
/// For each element, `from` derives the key and `to` the value; duplicate
/// keys are last-write-wins. With `group`, the result is two-level:
/// group key to a map of key-value pairs. Elements whose derived key (or
/// group key) has no key form are dropped.
pub fn map(array: &VMap, from: &Selector, to: &Selector, group: Option<&Selector>) -> VMap {
    let mut result = VMap::new();
    for element in array.values() {
        let Some(key) = get_value(element, from, &Value::Null).to_key() else {
            continue;
        };
        let value = get_value(element, to, &Value::Null);
        match group {
            None => {
                result.insert(key, value);
            }
            Some(group) => {
                let Some(group_key) = get_value(element, group, &Value::Null).to_key() else {
                    continue;
                };
                if !matches!(result.get(&group_key), Some(Value::Map(_))) {
                    result.insert(&group_key, VMap::new());
                }
                if let Some(Value::Map(bucket)) = result.get_mut(group_key) {
                    bucket.insert(key, value);
                }
            }
        }
    }
    result
}
