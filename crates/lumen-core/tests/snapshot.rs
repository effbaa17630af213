//! Device snapshot serialization tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use lumen_core::{DeviceSnapshot, Light};

#[test]
fn parse_snapshot_full() {
    let s = r#"{
        "device": {
            "display_name": "test",
            "firmware_version": "1.0.0",
            "serial_number": "1111"
        },
        "lights": [
            { "on": true, "brightness": 20, "temperature": 4200 },
            {}
        ]
    }"#;

    let snap: DeviceSnapshot = serde_json::from_str(s).unwrap();
    assert_eq!(snap.device.serial_number, "1111");
    assert_eq!(snap.lights.len(), 2);
    assert_eq!(
        snap.lights[0],
        Light {
            on: true,
            brightness: 20,
            temperature: 4200
        }
    );
    // A light with no fields decodes to the all-off state.
    assert_eq!(snap.lights[1], Light::default());
}

#[test]
fn empty_light_list_is_valid() {
    let snap: DeviceSnapshot =
        serde_json::from_str(r#"{ "device": {"display_name":"d","firmware_version":"f","serial_number":"s"}, "lights": [] }"#)
            .unwrap();
    assert!(snap.lights.is_empty());
}
