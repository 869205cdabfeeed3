//! `burrow-value` provides the dynamic value model for the burrow toolkit:
//! insertion-ordered maps keyed by integers or strings, structured records,
//! and scalars.
//!
//! # Overview
//!
//! - [`Value`] is the value type: null, booleans, integers, floats, strings,
//!   maps, and records.
//! - [`VMap`] is an ordered map of [`VKey`]s to [`Value`]s. Appending with
//!   [`VMap::push`] assigns the next free integer key, so a `VMap` doubles
//!   as a sequence.
//! - [`Record`] is the capability trait for structured objects: property
//!   access, public-member export, and an optional self-describing
//!   conversion.
//!
//! # Example
//!
//! ```
//! use burrow_value::{Value, vlist, vmap};
//!
//! let post = vmap! {
//!     "title" => "hello",
//!     "tags" => vlist!["a", "b"],
//! };
//! assert_eq!(post.get("title"), Some(&Value::from("hello")));
//! assert_eq!(post["tags"][1], Value::from("b"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod macros;

mod key;
pub use key::VKey;

mod map;
pub use map::VMap;

mod value;
pub use value::Value;

mod record;
pub use record::Record;
