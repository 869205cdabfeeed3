//! Declared-field export for records.

use core::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use indexmap::IndexMap;

use burrow_value::{Record, VMap, Value};

use crate::normalize::{TypeFields, to_array};

/// Transform signature for computed fields: `(field_name, record) -> value`.
pub type TransformFn = dyn Fn(&str, &dyn Record) -> Value;

/// How one exported field obtains its value.
#[derive(Clone)]
pub enum FieldDef {
    /// Read the named property; inside [`to_array`] a dotted name reaches
    /// into nested values.
    Prop(String),
    /// Compute the value with a transform function.
    With(Rc<TransformFn>),
}

impl Debug for FieldDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldDef::Prop(prop) => f.debug_tuple("Prop").field(prop).finish(),
            FieldDef::With(_) => f.write_str("With(..)"),
        }
    }
}

/// An ordered set of exportable fields: output name to definition.
///
/// Bare declarations — where the output name doubles as the property
/// name — are normalized at construction, so every entry carries an
/// explicit definition.
///
/// ```
/// use burrow::{FieldSpec, Record, Value};
///
/// let spec = FieldSpec::new()
///     .field("email")
///     .renamed("firstName", "first_name")
///     .with("fullName", |_, user| {
///         let first = user.read("first_name").unwrap_or(Value::Null);
///         let last = user.read("last_name").unwrap_or(Value::Null);
///         Value::from(format!("{} {}", first.to_text(), last.to_text()))
///     });
/// assert_eq!(spec.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldSpec {
    entries: IndexMap<String, FieldDef>,
}

impl FieldSpec {
    /// An empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field whose output name doubles as the property name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let def = FieldDef::Prop(name.clone());
        self.entries.insert(name, def);
        self
    }

    /// Declares a field read from a differently named property (or a
    /// dotted path).
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>, prop: impl Into<String>) -> Self {
        self.entries.insert(name.into(), FieldDef::Prop(prop.into()));
        self
    }

    /// Declares a computed field.
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<String>,
        transform: impl Fn(&str, &dyn Record) -> Value + 'static,
    ) -> Self {
        self.entries
            .insert(name.into(), FieldDef::With(Rc::new(transform)));
        self
    }

    /// Inserts a definition, overwriting a same-named field in place.
    pub fn insert(&mut self, name: impl Into<String>, def: FieldDef) {
        self.entries.insert(name.into(), def);
    }

    /// The definition for `name`, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.entries.get(name)
    }

    /// Whether `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates declarations in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }
}

/// Records that export a declared, whitelisted set of fields.
///
/// [`fields`](Arrayable::fields) lists the default export;
/// [`extra_fields`](Arrayable::extra_fields) lists fields exported only on
/// request. The provided [`to_array`](Arrayable::to_array) resolves the
/// caller's request against both lists and assembles the output map.
pub trait Arrayable: Record {
    /// Fields exported when the caller requests none explicitly.
    ///
    /// Defaults to every public field, exported under its own name.
    fn fields(&self) -> FieldSpec {
        self.entries()
            .into_iter()
            .fold(FieldSpec::new(), |spec, (name, _)| spec.field(name))
    }

    /// Fields exported only when named in the caller's expand set.
    fn extra_fields(&self) -> FieldSpec {
        FieldSpec::new()
    }

    /// Link map attached to the export as `_links`, for linkable types.
    /// The map is already serialized; computing it is the record's
    /// business.
    fn links(&self) -> Option<VMap> {
        None
    }

    /// Determines which fields the export will contain.
    ///
    /// A declared field is kept iff `fields` is empty or names it. Extra
    /// fields named in `expand` are appended afterwards (overwriting a
    /// same-named declared field); with an empty `expand` the extra list
    /// is not consulted at all. Matching is exact and case-sensitive.
    fn resolve_fields(&self, fields: &[&str], expand: &[&str]) -> FieldSpec {
        let mut result = FieldSpec::new();
        for (name, def) in self.fields().iter() {
            if fields.is_empty() || fields.contains(&name) {
                result.insert(name, def.clone());
            }
        }
        if expand.is_empty() {
            return result;
        }
        for (name, def) in self.extra_fields().iter() {
            if expand.contains(&name) {
                result.insert(name, def.clone());
            }
        }
        result
    }

    /// Converts the record into a map of its resolved fields.
    ///
    /// Values come from a direct property read for named definitions, or
    /// from the transform for computed ones; a missing property exports
    /// null. Linkable records gain a `_links` entry. When `recursive`, the
    /// assembled map is passed through [`to_array`](crate::to_array) so
    /// embedded maps and records flatten too.
    fn to_array(&self, fields: &[&str], expand: &[&str], recursive: bool) -> VMap
    where
        Self: Sized,
    {
        let mut data = VMap::new();
        for (name, def) in self.resolve_fields(fields, expand).iter() {
            let value = match def {
                FieldDef::Prop(prop) => self.read(prop).unwrap_or(Value::Null),
                FieldDef::With(transform) => transform(name, self),
            };
            data.insert(name, value);
        }
        if let Some(links) = self.links() {
            data.insert("_links", links);
        }
        if recursive {
            to_array(&Value::Map(data), &TypeFields::new(), true)
        } else {
            data
        }
    }
}
