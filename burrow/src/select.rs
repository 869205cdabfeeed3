//! Key selectors: a dotted path or an opaque selector function.

use core::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use burrow_value::Value;

/// Selector function signature: `(source, default) -> value`.
pub type SelectorFn = dyn Fn(&Value, &Value) -> Value;

/// Addresses a value within an element.
///
/// Either a dot-delimited key path resolved by
/// [`get_value`](crate::get_value), or an opaque function invoked with the
/// element and the default value. Selector functions run synchronously on
/// the calling thread; whatever they panic with propagates unchanged.
#[derive(Clone)]
pub enum Selector {
    /// A dot-delimited key path.
    Path(String),
    /// A selector function.
    With(Rc<SelectorFn>),
}

impl Selector {
    /// A path selector.
    pub fn path(path: impl Into<String>) -> Self {
        Selector::Path(path.into())
    }

    /// A function selector.
    pub fn with(f: impl Fn(&Value, &Value) -> Value + 'static) -> Self {
        Selector::With(Rc::new(f))
    }
}

impl From<&str> for Selector {
    fn from(path: &str) -> Self {
        Selector::Path(path.to_owned())
    }
}

impl From<String> for Selector {
    fn from(path: String) -> Self {
        Selector::Path(path)
    }
}

impl Debug for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Selector::With(_) => f.write_str("With(..)"),
        }
    }
}
