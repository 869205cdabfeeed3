//! Construction macros for maps and lists.

/// Creates a [`VMap`](crate::VMap) from `key => value` pairs.
///
/// Keys accept anything convertible to a [`VKey`](crate::VKey), values
/// anything convertible to a [`Value`](crate::Value).
///
/// ```
/// use burrow_value::vmap;
///
/// let user = vmap! {
///     "id" => 7,
///     "name" => "ada",
/// };
/// assert_eq!(user.len(), 2);
/// ```
#[macro_export]
macro_rules! vmap {
    () => { $crate::VMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::VMap::new();
        $( map.insert($key, $crate::Value::from($value)); )+
        map
    }};
}

/// Creates a list-shaped [`VMap`](crate::VMap): values appended at
/// consecutive integer keys starting from zero.
///
/// ```
/// use burrow_value::{Value, vlist};
///
/// let tags = vlist!["a", "b"];
/// assert_eq!(tags.get(1), Some(&Value::from("b")));
/// ```
#[macro_export]
macro_rules! vlist {
    () => { $crate::VMap::new() };
    ($($value:expr),+ $(,)?) => {{
        let mut map = $crate::VMap::new();
        $( map.push($crate::Value::from($value)); )+
        map
    }};
}
