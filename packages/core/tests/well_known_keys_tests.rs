use xkey_core::keys::{events, status};
use xkey_core::Key;

fn key(text: &str) -> Key {
    Key::parse(text).expect("test key should parse")
}

#[test]
fn test_status_keys() {
    assert_eq!(status::STANDBY_STATE.to_string(), "Standby.State");
    assert_eq!(
        status::PRESENTATION_SENDING_MODE.to_string(),
        "Conference.Presentation.LocalInstance[*].SendingMode"
    );
    assert_eq!(
        status::ROOM_ANALYTICS_REVERB_TIME.to_string(),
        "RoomAnalytics.ReverberationTime.Middle.RT60"
    );
    assert!(status::ROOM_ANALYTICS_TEMPERATURE.is_absolute());
    assert!(status::PERIPHERALS_AIR_QUALITY.is_wildcard());
}

#[test]
fn test_event_keys() {
    assert_eq!(events::BOOT_EVENT.to_string(), "BootEvent");
    assert_eq!(
        events::UI_EXTENSIONS_WIDGET_ACTION.to_string(),
        "UserInterface.Extensions.Widget.Action"
    );
    assert!(events::UI_ASSISTANT_NOTIFICATION.is_absolute());
}

#[test]
fn test_peripheral_keys_enclosed_by_patterns() {
    let temperature = status::peripherals_temperature_key(3);
    assert_eq!(
        temperature.to_string(),
        "Peripherals.ConnectedDevice[3].RoomAnalytics.AmbientTemperature"
    );
    assert!(status::PERIPHERALS_TEMPERATURE.encloses(&temperature));
    assert!(status::PERIPHERALS_HUMIDITY.encloses(&status::peripherals_humidity_key(3)));
    assert!(status::PERIPHERALS_AIR_QUALITY.encloses(&status::peripherals_air_quality_key(7)));
    assert!(!status::PERIPHERALS_HUMIDITY.encloses(&temperature));
}

#[test]
fn test_peripheral_device_id() {
    assert_eq!(
        status::peripheral_device_id_from(&status::peripherals_air_quality_key(12)),
        Some(12)
    );
    assert_eq!(
        status::peripheral_device_id_from(&key("Peripherals.ConnectedDevice[4].Name")),
        Some(4)
    );
    assert_eq!(status::peripheral_device_id_from(&key("Peripherals.ConnectedDevice[0].Name")), None);
    assert_eq!(status::peripheral_device_id_from(&key("Peripherals.ConnectedDevice[4]")), None);
    assert_eq!(status::peripheral_device_id_from(&key("Standby.State")), None);
    assert_eq!(
        status::peripheral_device_id_from(&key("Peripherals.ConnectedDevice[2..3].Name")),
        None
    );
}
