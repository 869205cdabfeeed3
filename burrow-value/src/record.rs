//! Structured records: the object side of the value model.

use crate::map::VMap;
use crate::value::Value;

/// A structured object exposing named fields.
///
/// `Record` is a capability surface checked structurally: every record can
/// be read field-by-field and exported wholesale, while the self-describing
/// conversion is optional and absent by default. Types that also implement
/// the field-resolution trait typically route [`as_map`](Record::as_map)
/// through their declared field list so that generic normalization picks up
/// the declared export rather than the raw member dump.
pub trait Record {
    /// The concrete type name, used to look up per-type field specs.
    fn type_name(&self) -> &str;

    /// Reads one field by name. `None` when the record has no such field.
    fn read(&self, field: &str) -> Option<Value>;

    /// Exports every public field in declaration order.
    fn entries(&self) -> Vec<(String, Value)>;

    /// Self-describing conversion, for types that define their own export.
    fn as_map(&self) -> Option<VMap> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Point {
        x: i64,
        y: i64,
    }

    impl Record for Point {
        fn type_name(&self) -> &str {
            "Point"
        }

        fn read(&self, field: &str) -> Option<Value> {
            match field {
                "x" => Some(Value::Int(self.x)),
                "y" => Some(Value::Int(self.y)),
                _ => None,
            }
        }

        fn entries(&self) -> Vec<(String, Value)> {
            vec![
                ("x".to_owned(), Value::Int(self.x)),
                ("y".to_owned(), Value::Int(self.y)),
            ]
        }
    }

    #[test]
    fn records_compare_by_identity() {
        let point = Rc::new(Point { x: 1, y: 2 });
        let same = Value::Record(point.clone());
        let other = Value::record(Point { x: 1, y: 2 });
        assert_eq!(same, Value::Record(point));
        assert_ne!(same, other);
    }

    #[test]
    fn as_map_defaults_to_absent() {
        assert!(Point { x: 0, y: 0 }.as_map().is_none());
    }
}
