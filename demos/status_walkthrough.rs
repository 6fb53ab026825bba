//! Walkthrough of reading a device status snapshot
//!
//! Run with `cargo run -p xkey --example status_walkthrough`.

use serde::Deserialize;
use serde_json::json;
use xkey::{AccessKeys, KeyBuilder, StatusView, keys, parse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RoomAnalytics {
    ambient_temperature: f64,
    relative_humidity: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let status = StatusView::from_flat_json(&json!({
        "Standby.State": "Off",
        "Peripherals.ConnectedDevice[1].RoomAnalytics.AmbientTemperature": 21.5,
        "Peripherals.ConnectedDevice[1].RoomAnalytics.RelativeHumidity": 41,
        "Peripherals.ConnectedDevice[2].RoomAnalytics.AmbientTemperature": 23.0,
        "Peripherals.ConnectedDevice[2].RoomAnalytics.RelativeHumidity": 38,
    }))?;

    let standby: Option<String> = status.get(&keys::status::STANDBY_STATE)?;
    println!("Standby: {standby:?}");

    for id in [1, 2] {
        let analytics = KeyBuilder::new("Peripherals")
            .child("ConnectedDevice")
            .index(id)
            .child("RoomAnalytics")
            .build()?;
        let room: Option<RoomAnalytics> = status.get(&analytics)?;
        println!("Device {id}: {room:?}");
    }

    let devices = status.list(&parse("Peripherals.ConnectedDevice[*]")?)?;
    println!("Devices: {}", devices.map_or(0, |d| d.len()));

    let access = AccessKeys::builder()
        .allow_statuses([parse("Standby.*")?])
        .build();
    println!("Grants {access} expose {} entries", status.permitted(&access).len());

    println!("Tree: {}", serde_json::to_string_pretty(&status.tree()?)?);
    Ok(())
}
