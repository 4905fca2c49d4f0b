//! Integration tests for the public API.
//!
//! These exercise `ArrayMap` and `Cursor` together through the exported
//! surface only.

use arraymap_core::{ArrayMap, Cursor, Error, IntoIndex};
use pretty_assertions::assert_eq;

#[test]
fn test_double_ended_queue_usage() {
    let mut map = ArrayMap::new();
    map.push("b").push("c").unshift("a");

    assert_eq!(map.shift(), Some("a"));
    assert_eq!(map.pop(), Some("c"));

    // Index 0 was never written, so the next shift finds nothing there.
    assert_eq!(map.shift(), None);
    assert_eq!(map.shift(), Some("b"));
    assert!(map.is_empty());
}

#[test]
fn test_forward_and_reverse_cursors() {
    let mut map = ArrayMap::new();
    map.set(-2, 'a').unwrap();
    map.set(2, 'e').unwrap();
    map.insert(0, 'c');

    let mut forward = map.iterator();
    let mut collected = Vec::new();
    while forward.has_next() {
        if let Some(value) = forward.next() {
            collected.push(*value);
        }
    }
    assert_eq!(collected, vec!['a', 'c', 'e']);
    assert!(!forward.has_next());

    let mut reverse = map.reverse_iterator();
    assert_eq!(reverse.next(), Some(&'e'));
    assert_eq!(reverse.next(), None);
    assert_eq!(reverse.next(), Some(&'c'));
}

#[test]
fn test_cursor_survives_clear() {
    let mut map: ArrayMap<u32> = (1..=3).collect();
    let cursor = map.iterator();
    map.clear();

    let snapshot: Vec<Option<u32>> = cursor.into_iter().collect();
    assert_eq!(snapshot, vec![None, Some(1), Some(2), Some(3)]);
    assert!(map.is_empty());
}

#[test]
fn test_user_supplied_indices() {
    let inputs = ["3", "-1", "oops", "10 apples"];
    let mut map = ArrayMap::new();
    let mut errors = Vec::new();

    for (n, input) in inputs.iter().enumerate() {
        if let Err(err) = map.set(*input, n) {
            errors.push(err);
        }
    }

    assert_eq!(
        errors,
        vec![Error::InvalidIndex {
            input: "oops".to_string()
        }]
    );
    assert_eq!(map.entries().collect::<Vec<_>>(), vec![(-1, &1), (3, &0), (10, &3)]);
    assert_eq!((map.lower_bound(), map.upper_bound()), (-1, 10));
}

#[test]
fn test_explicit_empty_marker() {
    // An explicit "empty" value is distinct from an absent slot when the
    // element type carries it.
    let mut map: ArrayMap<Option<&str>> = ArrayMap::new();
    map.push(None).push(Some("x"));

    assert!(map.has(1));
    assert_eq!(map.get(1), Some(&None));
    assert!(!map.has(0));
    assert_eq!(map.first(), Some(&None));
}

#[test]
fn test_into_index_is_public() {
    struct Row(u16);

    impl IntoIndex for Row {
        fn into_index(self) -> arraymap_core::Result<i64> {
            Ok(i64::from(self.0) - 100)
        }
    }

    let mut map = ArrayMap::new();
    map.set(Row(98), "two below").unwrap();
    assert_eq!(map.get(-2), Some(&"two below"));
    assert_eq!(map.lower_bound(), -2);
}

#[test]
fn test_cursor_from_plain_values() {
    let mut cursor = Cursor::from(vec![10, 20, 30]);
    assert!(cursor.has_next());
    assert_eq!(cursor.next(), Some(&10));
    assert_eq!(cursor.next(), Some(&20));
    assert_eq!(cursor.next(), Some(&30));
    assert!(!cursor.has_next());
}
