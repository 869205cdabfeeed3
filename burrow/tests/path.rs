//! Tests for dot-path resolution, removal, and key existence.

use burrow::{Record, Selector, VKey, Value, get_value, key_exists, remove, vlist, vmap};

const MISSING: Value = Value::Int(-1);

#[test]
fn plain_key() {
    let map = Value::Map(vmap! { "username" => "ada" });
    assert_eq!(get_value(&map, &"username".into(), &MISSING), Value::from("ada"));
}

#[test]
fn nested_path() {
    let map = Value::Map(vmap! {
        "address" => vmap! { "street" => "Baker St", "no" => 221 },
    });
    assert_eq!(
        get_value(&map, &"address.street".into(), &MISSING),
        Value::from("Baker St")
    );
    assert_eq!(
        get_value(&map, &"address.city".into(), &MISSING),
        MISSING
    );
}

#[test]
fn literal_dotted_key_wins_over_decomposition() {
    let map = Value::Map(vmap! {
        "a.b" => 1,
        "a" => vmap! { "b" => 2 },
    });
    assert_eq!(get_value(&map, &"a.b".into(), &MISSING), Value::Int(1));
}

#[test]
fn non_map_midway_yields_default() {
    let map = Value::Map(vmap! { "a" => 5 });
    assert_eq!(get_value(&map, &"a.b".into(), &MISSING), MISSING);
}

#[test]
fn three_levels_deep() {
    let map = Value::Map(vmap! {
        "x" => vmap! { "y" => vmap! { "z" => "deep" } },
    });
    assert_eq!(get_value(&map, &"x.y.z".into(), &MISSING), Value::from("deep"));
}

#[test]
fn integer_segment_reaches_into_lists() {
    let map = Value::Map(vmap! { "items" => vlist![10, 20, 30] });
    assert_eq!(get_value(&map, &"items.1".into(), &MISSING), Value::Int(20));
    assert_eq!(get_value(&map, &"items.9".into(), &MISSING), MISSING);
}

#[test]
fn selector_function_short_circuits() {
    let map = Value::Map(vmap! { "first" => "Ada", "last" => "Lovelace" });
    let full_name = Selector::with(|source, _default| {
        let first = get_value(source, &"first".into(), &Value::Null);
        let last = get_value(source, &"last".into(), &Value::Null);
        Value::from(format!("{} {}", first.to_text(), last.to_text()))
    });
    assert_eq!(get_value(&map, &full_name, &MISSING), Value::from("Ada Lovelace"));
}

#[test]
fn selector_function_receives_the_default() {
    let passthrough = Selector::with(|_source, default| default.clone());
    assert_eq!(get_value(&Value::Null, &passthrough, &MISSING), MISSING);
}

#[test]
fn missing_head_resolves_against_the_default() {
    // The head segment resolves to the default, and the leaf lookup then
    // runs against that value.
    let map = Value::Map(vmap! {});
    let default = Value::Map(vmap! { "b" => 9 });
    assert_eq!(get_value(&map, &"a.b".into(), &default), Value::Int(9));
}

struct Account {
    owner: String,
    balance: i64,
}

impl Record for Account {
    fn type_name(&self) -> &str {
        "Account"
    }

    fn read(&self, field: &str) -> Option<Value> {
        match field {
            "owner" => Some(Value::from(self.owner.as_str())),
            "balance" => Some(Value::Int(self.balance)),
            _ => None,
        }
    }

    fn entries(&self) -> Vec<(String, Value)> {
        vec![
            ("owner".to_owned(), Value::from(self.owner.as_str())),
            ("balance".to_owned(), Value::Int(self.balance)),
        ]
    }
}

#[test]
fn record_field_read() {
    let account = Value::record(Account {
        owner: "ada".to_owned(),
        balance: 42,
    });
    assert_eq!(get_value(&account, &"owner".into(), &MISSING), Value::from("ada"));
    assert_eq!(get_value(&account, &"missing".into(), &MISSING), MISSING);
}

#[test]
fn record_behind_a_path() {
    let map = Value::Map(vmap! {
        "account" => Value::record(Account {
            owner: "grace".to_owned(),
            balance: 7,
        }),
    });
    assert_eq!(
        get_value(&map, &"account.balance".into(), &MISSING),
        Value::Int(7)
    );
}

#[test]
fn remove_returns_the_value_and_mutates() {
    let mut map = vmap! { "type" => "A", "options" => vlist![1, 2] };
    assert_eq!(remove(&mut map, "type", Value::Null), Value::from("A"));
    assert_eq!(map, vmap! { "options" => vlist![1, 2] });
    assert_eq!(remove(&mut map, "type", Value::Null), Value::Null);
}

#[test]
fn remove_does_not_split_dotted_keys() {
    let mut map = vmap! { "a" => vmap! { "b" => 1 } };
    assert_eq!(remove(&mut map, "a.b", MISSING), MISSING);
    assert!(map.contains_key("a"));
}

#[test]
fn remove_preserves_remaining_order() {
    let mut map = vmap! { "a" => 1, "b" => 2, "c" => 3 };
    remove(&mut map, "b", Value::Null);
    let keys: Vec<VKey> = map.keys().cloned().collect();
    assert_eq!(keys, vec![VKey::from("a"), VKey::from("c")]);
}

#[test]
fn key_exists_case_sensitivity() {
    let map = vmap! { "Name" => 1, "AGE" => 2 };
    assert!(key_exists("Name", &map, true));
    assert!(!key_exists("name", &map, true));
    assert!(key_exists("name", &map, false));
    assert!(key_exists("age", &map, false));
    assert!(!key_exists("mail", &map, false));
}

#[test]
fn key_exists_matches_integer_keys() {
    let map = vlist!["zero", "one"];
    assert!(key_exists("1", &map, true));
    assert!(key_exists("1", &map, false));
    assert!(!key_exists("2", &map, false));
}
