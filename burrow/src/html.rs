//! HTML entity coding over nested maps.

use burrow_value::{VKey, VMap, Value};

/// Character set of the strings passed to [`html_encode`].
///
/// Carried as an explicit per-call parameter rather than read from any
/// ambient application configuration. Both supported charsets share the
/// same escape set; native strings hold valid text in either, so no
/// substitution pass is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8.
    #[default]
    Utf8,
    /// ISO-8859-1.
    Latin1,
}

/// Encodes HTML special characters throughout a map.
///
/// String values are escaped (`& < > " '`, quote style included); map
/// values recurse with the same `values_only` and `charset`; other values
/// pass through unchanged. Unless `values_only`, string keys are escaped
/// too. Returns a new map.
pub fn html_encode(data: &VMap, values_only: bool, charset: Charset) -> VMap {
    let mut result = VMap::with_capacity(data.len());
    for (key, value) in data.iter() {
        let key = match key {
            VKey::Str(name) if !values_only => VKey::Str(escape(name)),
            other => other.clone(),
        };
        let value = match value {
            Value::Str(text) => Value::Str(escape(text)),
            Value::Map(map) => Value::Map(html_encode(map, values_only, charset)),
            other => other.clone(),
        };
        result.insert(key, value);
    }
    result
}

/// Decodes HTML entities throughout a map: the inverse of [`html_encode`].
///
/// Unless `values_only`, string keys are decoded too. Returns a new map.
pub fn html_decode(data: &VMap, values_only: bool) -> VMap {
    let mut result = VMap::with_capacity(data.len());
    for (key, value) in data.iter() {
        let key = match key {
            VKey::Str(name) if !values_only => VKey::Str(unescape(name)),
            other => other.clone(),
        };
        let value = match value {
            Value::Str(text) => Value::Str(unescape(text)),
            Value::Map(map) => Value::Map(html_decode(map, values_only)),
            other => other.clone(),
        };
        result.insert(key, value);
    }
    result
}

const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#039;", '\''),
    ("&#39;", '\''),
];

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(position) = rest.find('&') {
        out.push_str(&rest[..position]);
        rest = &rest[position..];
        match ENTITIES
            .iter()
            .copied()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, decoded)) => {
                out.push(decoded);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
