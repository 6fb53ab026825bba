use xkey_core::{ErrorKind, Key, KeyError, parse};

fn key(text: &str) -> Key {
    parse(text).expect("test key should parse")
}

fn parse_error(text: &str) -> xkey_core::ParseError {
    match parse(text) {
        Err(KeyError::Parse(error)) => error,
        other => panic!("expected a parse error for '{text}', got {other:?}"),
    }
}

#[test]
fn test_canonical_round_trip() {
    for text in [
        "a",
        "*",
        "_",
        "Audio.Input[1].Volume",
        "Audio.Input[*].Volume",
        "a[1..5].b[0..n]",
        "a.*.c",
        "Peripherals.ConnectedDevice[12].RoomAnalytics.AmbientTemperature",
        "x9_Y.Z_0[4294967295]",
    ] {
        assert_eq!(key(text).to_string(), text);
    }
}

#[test]
fn test_segments_and_arrays() {
    let parsed = key("Audio.Input[1..n].*");
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed.segments()[0].name(), "Audio");
    let array = parsed.segments()[1].array().expect("Input is an array");
    assert!(array.is_unbounded_range());
    assert_eq!(array.lower_bound().expect("range has a lower bound"), 1);
    assert!(parsed.last_segment().is_segment_wildcard());
}

#[test]
fn test_leading_zeros_normalize() {
    assert_eq!(key("a[007]").to_string(), "a[7]");
}

#[test]
fn test_rejects_malformed_keys() {
    for text in [
        "", ".", "a..b", ".a", "a.", "*[1]", "a[", "a[1", "a[]", "a[x]", "a[1..]", "a[1.5]",
        "a[1...5]", "1a", "a-b", "a b", "a[1]b", "a[1][2]", "a[*..5]", "**", "a.*b",
    ] {
        let error = parse(text).expect_err("malformed key should fail");
        assert_eq!(error.kind(), ErrorKind::Parse, "unexpected error for '{text}'");
    }
}

#[test]
fn test_double_dot_position_and_expected() {
    let error = parse_error("a..b");
    assert_eq!(error.input(), "a..b");
    assert_eq!(error.position(), 2);
    assert_eq!(error.found(), Some('.'));
    assert!(error.accepts('_'));
    assert!(error.accepts('q'));
    assert!(error.accepts('Q'));
    assert!(error.accepts('*'));
    assert!(!error.accepts('.'));
    assert!(!error.accepts('1'));
    assert_eq!(
        error.to_string(),
        "Failed to parse 'a..b'. Illegal character '.' at position 2. \
         Expected to be '_' or 'a-z' or 'A-Z' or '*'."
    );
}

#[test]
fn test_empty_input_reports_end_of_string() {
    let error = parse_error("");
    assert_eq!(error.position(), 0);
    assert_eq!(error.found(), None);
    assert!(error.to_string().contains("Unexpected end of string at position 0"));
}

#[test]
fn test_wildcard_cannot_take_array() {
    let error = parse_error("*[1]");
    assert_eq!(error.position(), 1);
    assert_eq!(error.found(), Some('['));
    assert!(error.accepts('.'));
    assert!(!error.accepts('['));
}

#[test]
fn test_unterminated_array_expects_bracket_or_digit() {
    let error = parse_error("a[12");
    assert_eq!(error.position(), 4);
    assert_eq!(error.found(), None);
    assert!(error.accepts(']'));
    assert!(error.accepts('7'));
    assert!(error.accepts('.'));
}

#[test]
fn test_reversed_range_is_validation_error() {
    let error = parse("a[5..1]").expect_err("reversed range should fail");
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(error.to_string().contains("a[5..1]"));
    assert!(parse("a[5..5]").is_ok());
}

#[test]
fn test_bound_overflow_is_validation_error() {
    let error = parse("a[4294967296]").expect_err("overflowing bound should fail");
    assert_eq!(error.kind(), ErrorKind::Validation);
    let error = parse("a[1..99999999999]").expect_err("overflowing upper bound should fail");
    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[test]
fn test_conversions() {
    let from_str: Key = "Standby.State".parse().expect("FromStr should parse");
    let try_from = Key::try_from("Standby.State").expect("TryFrom<&str> should parse");
    let try_from_string =
        Key::try_from(String::from("Standby.State")).expect("TryFrom<String> should parse");
    assert_eq!(from_str, try_from);
    assert_eq!(try_from, try_from_string);
    assert!(Key::try_from("Standby..State").is_err());
}

#[test]
fn test_serde_as_string() {
    let parsed = key("Audio.Input[1..n].Level");
    let json = serde_json::to_string(&parsed).expect("key should serialize");
    assert_eq!(json, "\"Audio.Input[1..n].Level\"");
    let back: Key = serde_json::from_str(&json).expect("key should deserialize");
    assert_eq!(back, parsed);
    assert!(serde_json::from_str::<Key>("\"a..b\"").is_err());
    assert!(serde_json::from_str::<Key>("42").is_err());
}

#[test]
fn test_absolute_and_wildcard_predicates() {
    assert!(key("a.b[3].c").is_absolute());
    assert!(!key("a.b[3].c").is_wildcard());
    assert!(!key("a.b[1..3]").is_absolute());
    assert!(!key("a.b[1..3]").is_wildcard());
    assert!(key("a.b[*]").is_wildcard());
    assert!(key("a.*").is_wildcard());
    assert!(!key("a.*").is_absolute());
}
