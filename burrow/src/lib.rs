//! Nested-key operations over [`burrow_value`] maps: dot-path lookup,
//! recursive merge, indexing and column extraction, stable multi-key
//! sorting, HTML entity coding, shape classifiers, and declared-field
//! export for records.
//!
//! # Overview
//!
//! Every keyed operation takes a [`Selector`]: a dotted key path such as
//! `"address.street"`, or an opaque function computing the value from an
//! element. Lookups never fail — a path that cannot be resolved yields the
//! caller-supplied default. The only errors in this crate are call-shape
//! errors: [`merge`] with fewer than two maps, and [`multisort`] with
//! per-key parameter lists whose length does not match the key list.
//!
//! # Example
//!
//! ```
//! use burrow::{Selector, Value, get_value, index, vlist, vmap};
//!
//! let users = vlist![
//!     vmap! { "id" => "17", "name" => "ada" },
//!     vmap! { "id" => "23", "name" => "grace" },
//! ];
//!
//! let by_id = index(&users, &Selector::from("id"));
//! let name = get_value(&Value::Map(by_id), &"23.name".into(), &Value::Null);
//! assert_eq!(name, Value::from("grace"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod collect;
pub mod fields;
pub mod html;
pub mod merge;
pub mod normalize;
pub mod path;
pub mod select;
pub mod sort;

pub use burrow_value::{Record, VKey, VMap, Value, vlist, vmap};

pub use classify::{is_associative, is_indexed};
pub use collect::{get_column, index, map};
pub use fields::{Arrayable, FieldDef, FieldSpec, TransformFn};
pub use html::{Charset, html_decode, html_encode};
pub use merge::{MergeError, merge};
pub use normalize::{TypeFields, to_array};
pub use path::{get_value, key_exists, remove};
pub use select::{Selector, SelectorFn};
pub use sort::{MultisortError, PerKey, SortDirection, SortFlag, multisort};
