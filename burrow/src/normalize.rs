//! Object/array normalization.

use indexmap::IndexMap;

use burrow_value::{VMap, Value};

use crate::fields::{FieldDef, FieldSpec};
use crate::path::get_value;
use crate::select::Selector;

/// Per-type field specs, keyed by [`Record::type_name`](burrow_value::Record::type_name).
///
/// Controls how [`to_array`] exports records of each type; types without an
/// entry (or with an empty one) fall back to their own conversion.
pub type TypeFields = IndexMap<String, FieldSpec>;

/// Converts a value into a map of plain values.
///
/// - A map is returned as-is; when `recursive`, every element that is
///   itself a map or record is replaced by its own conversion.
/// - A record with a non-empty spec under its type name in `specs` exports
///   the specified fields: a named definition resolves through
///   [`get_value`] (so dotted paths reach into nested values), a transform
///   runs with `(field_name, record)`. Other records export through their
///   self-describing conversion when present, else their public fields.
///   Either way the resulting map is converted again when `recursive`.
/// - Any other value wraps as a single-element sequence `[0 => value]`.
///
/// Nothing here fails; unsupported shapes degrade to a best-effort map.
pub fn to_array(value: &Value, specs: &TypeFields, recursive: bool) -> VMap {
    match value {
        Value::Map(map) => {
            let mut result = map.clone();
            if recursive {
                for (_, element) in result.iter_mut() {
                    if element.is_map() || element.is_record() {
                        *element = Value::Map(to_array(element, specs, true));
                    }
                }
            }
            result
        }
        Value::Record(record) => {
            log::trace!("normalizing record of type {}", record.type_name());
            if let Some(spec) = specs.get(record.type_name())
                && !spec.is_empty()
            {
                let mut result = VMap::with_capacity(spec.len());
                for (name, def) in spec.iter() {
                    let resolved = match def {
                        FieldDef::Prop(prop) => {
                            get_value(value, &Selector::path(prop), &Value::Null)
                        }
                        FieldDef::With(transform) => transform(name, &**record),
                    };
                    result.insert(name, resolved);
                }
                return if recursive {
                    to_array(&Value::Map(result), specs, true)
                } else {
                    result
                };
            }
            let exported = match record.as_map() {
                Some(map) => map,
                None => record.entries().into_iter().collect(),
            };
            if recursive {
                to_array(&Value::Map(exported), specs, true)
            } else {
                exported
            }
        }
        scalar => {
            let mut result = VMap::with_capacity(1);
            result.push(scalar.clone());
            result
        }
    }
}
