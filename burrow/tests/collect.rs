//! Tests for the index / column / map builders.

use burrow::{Selector, VKey, Value, get_column, index, map, vlist, vmap};

fn users() -> burrow::VMap {
    vlist![
        vmap! { "id" => "123", "name" => "aaa", "class" => "x" },
        vmap! { "id" => "124", "name" => "bbb", "class" => "x" },
        vmap! { "id" => "345", "name" => "ccc", "class" => "y" },
    ]
}

#[test]
fn index_by_field() {
    let rows = vlist![
        vmap! { "id" => "123", "data" => "abc" },
        vmap! { "id" => "345", "data" => "def" },
    ];
    let indexed = index(&rows, &"id".into());
    assert_eq!(
        indexed,
        vmap! {
            "123" => vmap! { "id" => "123", "data" => "abc" },
            "345" => vmap! { "id" => "345", "data" => "def" },
        }
    );
}

#[test]
fn index_drops_unkeyable_elements() {
    let rows = vlist![
        vmap! { "id" => "a" },
        vmap! { "other" => 1 },
        vmap! { "id" => Value::Null },
    ];
    let indexed = index(&rows, &"id".into());
    assert_eq!(indexed, vmap! { "a" => vmap! { "id" => "a" } });
}

#[test]
fn index_last_duplicate_wins() {
    let rows = vlist![
        vmap! { "id" => "a", "v" => 1 },
        vmap! { "id" => "a", "v" => 2 },
    ];
    let indexed = index(&rows, &"id".into());
    assert_eq!(indexed, vmap! { "a" => vmap! { "id" => "a", "v" => 2 } });
}

#[test]
fn index_by_selector_function() {
    let rows = vlist![vmap! { "id" => 7 }, vmap! { "id" => 8 }];
    let doubled = Selector::with(|element, _| {
        let id = element
            .as_map()
            .and_then(|map| map.get("id"))
            .and_then(Value::as_int)
            .unwrap_or(0);
        Value::Int(id * 2)
    });
    let indexed = index(&rows, &doubled);
    assert_eq!(indexed.len(), 2);
    assert!(indexed.contains_key(14));
    assert!(indexed.contains_key(16));
}

#[test]
fn column_keeps_keys_by_default() {
    let rows = vlist![vmap! { "id" => 1 }, vmap! { "id" => 2 }];
    let column = get_column(&rows, &"id".into(), true);
    assert_eq!(column, vmap! { 0 => 1, 1 => 2 });
}

#[test]
fn column_without_keys_reindexes() {
    let rows = vmap! {
        "first" => vmap! { "id" => 1 },
        "second" => vmap! { "id" => 2 },
    };
    let column = get_column(&rows, &"id".into(), false);
    assert_eq!(column, vlist![1, 2]);

    let kept = get_column(&rows, &"id".into(), true);
    assert_eq!(kept, vmap! { "first" => 1, "second" => 2 });
}

#[test]
fn column_of_missing_field_is_null() {
    let rows = vlist![vmap! { "id" => 1 }, vmap! { "other" => 2 }];
    let column = get_column(&rows, &"id".into(), false);
    assert_eq!(column, vlist![Value::Int(1), Value::Null]);
}

#[test]
fn map_builds_flat_pairs() {
    let mapped = map(&users(), &"id".into(), &"name".into(), None);
    assert_eq!(
        mapped,
        vmap! { "123" => "aaa", "124" => "bbb", "345" => "ccc" }
    );
}

#[test]
fn map_groups_into_two_levels() {
    let mapped = map(
        &users(),
        &"id".into(),
        &"name".into(),
        Some(&"class".into()),
    );
    assert_eq!(
        mapped,
        vmap! {
            "x" => vmap! { "123" => "aaa", "124" => "bbb" },
            "y" => vmap! { "345" => "ccc" },
        }
    );
}

#[test]
fn map_last_write_wins_on_duplicate_keys() {
    let rows = vlist![
        vmap! { "k" => "a", "v" => 1 },
        vmap! { "k" => "a", "v" => 2 },
    ];
    let mapped = map(&rows, &"k".into(), &"v".into(), None);
    assert_eq!(mapped, vmap! { "a" => 2 });
}

#[test]
fn map_drops_elements_without_a_key() {
    let rows = vlist![
        vmap! { "k" => "a", "v" => 1 },
        vmap! { "v" => 2 },
    ];
    let mapped = map(&rows, &"k".into(), &"v".into(), None);
    assert_eq!(mapped, vmap! { "a" => 1 });
}

#[test]
fn integer_derived_keys_stay_integers() {
    let rows = vlist![vmap! { "id" => 5, "v" => "x" }];
    let mapped = map(&rows, &"id".into(), &"v".into(), None);
    assert_eq!(mapped.get(5), Some(&Value::from("x")));
    assert_eq!(mapped.get("5"), None);
    let keys: Vec<VKey> = mapped.keys().cloned().collect();
    assert_eq!(keys, vec![VKey::Int(5)]);
}
