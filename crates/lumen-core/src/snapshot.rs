//! Device snapshot types.
//!
//! One [`DeviceSnapshot`] is the full state of a single accessory as fetched at
//! one point in time. Snapshots are request-scoped: produced by the fetch
//! layer, consumed by the scrape translator, and dropped when the request
//! completes. The order of [`DeviceSnapshot::lights`] is the sole positional
//! identity of a light for the duration of one scrape.

use serde::{Deserialize, Serialize};

/// Accessory metadata. All fields are opaque strings reported by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub display_name: String,
    pub firmware_version: String,
    pub serial_number: String,
}

/// State of one controllable light on an accessory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    /// Whether the light is turned on.
    pub on: bool,
    /// Brightness percentage. Semantic range 0-100, not enforced here.
    pub brightness: i64,
    /// Color temperature in Kelvin. Not enforced here.
    pub temperature: i64,
}

/// Aggregate of device metadata and the ordered list of its lights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub device: Device,
    pub lights: Vec<Light>,
}
