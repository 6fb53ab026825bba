use std::cmp::Ordering;
use std::collections::BTreeSet;

use xkey_core::Key;

fn key(text: &str) -> Key {
    Key::parse(text).expect("test key should parse")
}

#[test]
fn test_array_index_order() {
    assert!(key("a[1]") < key("a[2]"));
    assert!(key("a[2].b") < key("a[10].a"));
}

#[test]
fn test_wildcard_before_index_and_range() {
    assert!(key("a[*]") < key("a[1]"));
    assert!(key("a[*]") < key("a[0..n]"));
    assert_eq!(key("a[*].b").cmp(&key("a[*].b")), Ordering::Equal);
    assert!(key("a[*].b") < key("a[*].c"));
}

#[test]
fn test_ranges_before_absolute() {
    assert!(key("a[1..5]") < key("a[1]"));
    assert!(key("a[9..n]") < key("a[0]"));
}

#[test]
fn test_ranges_by_lower_then_upper() {
    assert!(key("a[1..5]") < key("a[2..3]"));
    assert!(key("a[1..5]") < key("a[1..6]"));
    assert!(key("a[1..5]") < key("a[1..n]"));
    assert_eq!(key("a[1..n]").cmp(&key("a[1..n]")), Ordering::Equal);
}

#[test]
fn test_plain_before_array_and_prefix_first() {
    assert!(key("a") < key("a[1]"));
    assert!(key("a") < key("a.b"));
    assert!(key("a.b") < key("a.b.c"));
}

#[test]
fn test_names_compare_case_sensitively() {
    // uppercase sorts before lowercase
    assert!(key("B") < key("a"));
    assert!(key("Audio") < key("audio"));
}

#[test]
fn test_equal_keys_may_order_apart() {
    let upper = key("Audio.Volume");
    let lower = key("audio.volume");
    assert_eq!(upper, lower);
    assert_ne!(upper.cmp(&lower), Ordering::Equal);

    let set: BTreeSet<Key> = [upper, lower].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_sorted_listing() {
    let mut keys = vec![
        key("a[2]"),
        key("a.b"),
        key("a[1..3]"),
        key("a"),
        key("a[*]"),
        key("a[1]"),
    ];
    keys.sort();
    let sorted: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["a", "a.b", "a[*]", "a[1..3]", "a[1]", "a[2]"]);
}

#[test]
fn test_closed_and_open_ranges_interleave_by_lower_bound() {
    assert!(key("a[1..9]") < key("a[2..n]"));
    assert!(key("a[2..9]") < key("a[2..n]"));
    assert!(key("a[2..n]") > key("a[2..4294967295]"));
    assert!(key("a[2..n]") < key("a[3..4]"));
    assert!(key("a[2..n]") < key("a[3..n]"));
    assert_eq!(key("a[3..n]").cmp(&key("a[2..9]")), Ordering::Greater);
}
