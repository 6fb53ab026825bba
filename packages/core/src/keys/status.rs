//! Status keys
//!
//! `PERIPHERALS_*` patterns cover every connected device; the
//! `peripherals_*_key` helpers build the absolute key for one device.

use lazy_static::lazy_static;

use crate::key::Key;

const CONNECTED_DEVICE_SEGMENT: &str = "ConnectedDevice";

lazy_static! {
    pub static ref STANDBY_STATE: Key = well_known("Standby.State");
    pub static ref NUMBER_OF_ACTIVE_CALLS: Key = well_known("SystemUnit.State.NumberOfActiveCalls");
    pub static ref PRESENTATION_SENDING_MODE: Key =
        well_known("Conference.Presentation.LocalInstance[*].SendingMode");
    pub static ref BOOKINGS_AVAILABILITY_STATUS: Key = well_known("Bookings.Availability.Status");
    pub static ref HOTDESKING_STATUS: Key =
        well_known("Webex.DevicePersonalization.Hotdesking.SessionStatus");
    pub static ref ROOM_ANALYTICS_CLOSE_PROXIMITY: Key =
        well_known("RoomAnalytics.Engagement.CloseProximity");
    pub static ref ROOM_ANALYTICS_PEOPLE_PRESENCE: Key = well_known("RoomAnalytics.PeoplePresence");
    pub static ref ROOM_ANALYTICS_PEOPLE_COUNT: Key = well_known("RoomAnalytics.PeopleCount.Current");
    pub static ref ROOM_ANALYTICS_AMBIENT_NOISE: Key = well_known("RoomAnalytics.AmbientNoise.Level.A");
    pub static ref ROOM_ANALYTICS_TEMPERATURE: Key = well_known("RoomAnalytics.AmbientTemperature");
    pub static ref ROOM_ANALYTICS_REVERB_TIME: Key =
        well_known("RoomAnalytics.ReverberationTime.Middle.RT60");
    pub static ref ROOM_ANALYTICS_SOUND_LEVEL: Key = well_known("RoomAnalytics.Sound.Level.A");
    pub static ref ROOM_ANALYTICS_HUMIDITY: Key = well_known("RoomAnalytics.RelativeHumidity");
    pub static ref PERIPHERALS_TEMPERATURE: Key =
        well_known("Peripherals.ConnectedDevice[*].RoomAnalytics.AmbientTemperature");
    pub static ref PERIPHERALS_HUMIDITY: Key =
        well_known("Peripherals.ConnectedDevice[*].RoomAnalytics.RelativeHumidity");
    pub static ref PERIPHERALS_AIR_QUALITY: Key =
        well_known("Peripherals.ConnectedDevice[*].RoomAnalytics.AirQuality.Index");
    static ref ANY_PERIPHERAL: Key = well_known("Peripherals.ConnectedDevice[1..n].*");
}

fn well_known(text: &str) -> Key {
    Key::parse(text).expect("well-known key should always parse")
}

/// Device id of a key below `Peripherals.ConnectedDevice[id]`
///
/// Returns `None` for keys outside a single connected device.
#[must_use]
pub fn peripheral_device_id_from(key: &Key) -> Option<u32> {
    if !ANY_PERIPHERAL.encloses(key) {
        return None;
    }
    key.array_index_of(CONNECTED_DEVICE_SEGMENT).ok()
}

/// `Peripherals.ConnectedDevice[id].RoomAnalytics.AmbientTemperature`
#[must_use]
pub fn peripherals_temperature_key(id: u32) -> Key {
    peripheral_key(id, &["RoomAnalytics", "AmbientTemperature"])
}

/// `Peripherals.ConnectedDevice[id].RoomAnalytics.RelativeHumidity`
#[must_use]
pub fn peripherals_humidity_key(id: u32) -> Key {
    peripheral_key(id, &["RoomAnalytics", "RelativeHumidity"])
}

/// `Peripherals.ConnectedDevice[id].RoomAnalytics.AirQuality.Index`
#[must_use]
pub fn peripherals_air_quality_key(id: u32) -> Key {
    peripheral_key(id, &["RoomAnalytics", "AirQuality", "Index"])
}

fn peripheral_key(id: u32, path: &[&str]) -> Key {
    well_known(&format!(
        "Peripherals.{CONNECTED_DEVICE_SEGMENT}[{id}].{}",
        path.join(".")
    ))
}
