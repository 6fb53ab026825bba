use serde_json::json;
use xkey_core::{AccessKeys, Key};

fn key(text: &str) -> Key {
    Key::parse(text).expect("test key should parse")
}

fn grants() -> AccessKeys {
    AccessKeys::builder()
        .allow_commands([key("Audio.Volume.Set"), key("Dial")])
        .allow_statuses([key("Audio.*"), key("Peripherals.ConnectedDevice[*].RoomAnalytics.*")])
        .allow_events([key("UserInterface.Extensions.*")])
        .build()
}

#[test]
fn test_permits_by_enclosure() {
    let access = grants();
    assert!(access.permits_command(&key("Dial")));
    assert!(!access.permits_command(&key("Dial.Number")));
    assert!(access.permits_status(&key("Audio.Input[1].Level")));
    assert!(access.permits_status(&key("Peripherals.ConnectedDevice[4].RoomAnalytics.AmbientTemperature")));
    assert!(!access.permits_status(&key("Standby.State")));
    assert!(access.permits_event(&key("UserInterface.Extensions.Widget.Action")));
    assert!(!access.permits_event(&key("BootEvent")));
}

#[test]
fn test_kinds_are_independent() {
    let access = grants();
    assert!(!access.permits_status(&key("Dial")));
    assert!(!access.permits_command(&key("Audio.Input[1].Level")));
}

#[test]
fn test_no_access() {
    let access = AccessKeys::no_access();
    assert!(access.is_empty());
    assert!(!access.permits_command(&key("Dial")));
    assert!(!access.permits_status(&key("Standby.State")));
    assert_eq!(access.to_string(), "{commands=[], statuses=[], events=[]}");
}

#[test]
fn test_builder_deduplicates() {
    let access = AccessKeys::builder()
        .allow_statuses([key("Audio.*"), key("audio.*")])
        .allow_statuses([key("Audio.*")])
        .build();
    assert_eq!(access.statuses().len(), 1);
}

#[test]
fn test_display_sorted() {
    let access = AccessKeys::builder()
        .allow_statuses([key("Standby.State"), key("Audio.*")])
        .allow_commands([key("Dial")])
        .build();
    assert_eq!(
        access.to_string(),
        "{commands=[Dial], statuses=[Audio.*, Standby.State], events=[]}"
    );
}

#[test]
fn test_serde_round_trip() {
    let access = grants();
    let json = serde_json::to_value(&access).expect("grants should serialize");
    assert_eq!(json["commands"].as_array().map(Vec::len), Some(2));
    let back: AccessKeys = serde_json::from_value(json).expect("grants should deserialize");
    assert_eq!(back, access);
}

#[test]
fn test_deserialize_missing_kinds() {
    let access: AccessKeys = serde_json::from_value(json!({"statuses": ["Standby.State"]}))
        .expect("missing kinds default to empty");
    assert!(access.commands().is_empty());
    assert!(access.events().is_empty());
    assert!(access.permits_status(&key("Standby.State")));

    assert!(serde_json::from_value::<AccessKeys>(json!({"commands": ["a..b"]})).is_err());
}
