//! Device fetch capability.
//!
//! The scrape handler talks to accessories only through the [`Fetcher`] trait,
//! so tests can supply a deterministic stand-in without network I/O.
//! [`HttpFetcher`] is the production implementation speaking the accessory's
//! HTTP JSON protocol.

use async_trait::async_trait;
use serde::Deserialize;

use lumen_core::error::{LumenError, Result};
use lumen_core::{Device, DeviceSnapshot, Endpoint, Light};

/// Fetches one [`DeviceSnapshot`] from a canonical endpoint.
///
/// Implementations do not bound their own runtime: the caller wraps every
/// invocation in a deadline and surfaces any error as a request failure.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<DeviceSnapshot>;
}

/// Default fetcher using the accessory's HTTP API.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LumenError::Fetch(format!("request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(LumenError::Fetch(format!(
                "{url} returned {}",
                resp.status()
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| LumenError::Fetch(format!("invalid response body from {url}: {e}")))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<DeviceSnapshot> {
        let info: AccessoryInfo = self
            .get_json(&format!("{endpoint}/elgato/accessory-info"))
            .await?;
        let lights: LightsEnvelope = self.get_json(&format!("{endpoint}/elgato/lights")).await?;

        Ok(DeviceSnapshot {
            device: Device {
                display_name: info.display_name,
                firmware_version: info.firmware_version,
                serial_number: info.serial_number,
            },
            lights: lights.lights.into_iter().map(Light::from).collect(),
        })
    }
}

// --------------------
// Wire DTOs (accessory JSON)
// --------------------

/// `GET /elgato/accessory-info` body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessoryInfo {
    display_name: String,
    firmware_version: String,
    serial_number: String,
}

/// `GET /elgato/lights` body.
#[derive(Debug, Deserialize)]
struct LightsEnvelope {
    lights: Vec<LightDto>,
}

/// One light as reported on the wire. The on/off flag is an integer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LightDto {
    on: u8,
    brightness: i64,
    temperature: i64,
}

impl From<LightDto> for Light {
    fn from(dto: LightDto) -> Self {
        Light {
            on: dto.on != 0,
            brightness: dto.brightness,
            temperature: dto.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accessory_info() {
        let s = r#"{
            "productName": "Key Light",
            "hardwareBoardType": 53,
            "firmwareBuildNumber": 192,
            "firmwareVersion": "1.0.3",
            "serialNumber": "CW16K1A01234",
            "displayName": "Desk Light",
            "features": ["lights"]
        }"#;

        let info: AccessoryInfo = serde_json::from_str(s).unwrap();
        assert_eq!(info.display_name, "Desk Light");
        assert_eq!(info.firmware_version, "1.0.3");
        assert_eq!(info.serial_number, "CW16K1A01234");
    }

    #[test]
    fn parse_lights_envelope() {
        let s = r#"{
            "numberOfLights": 2,
            "lights": [
                { "on": 1, "brightness": 20, "temperature": 4200 },
                { "on": 0, "brightness": 0, "temperature": 0 }
            ]
        }"#;

        let body: LightsEnvelope = serde_json::from_str(s).unwrap();
        let lights: Vec<Light> = body.lights.into_iter().map(Light::from).collect();
        assert_eq!(
            lights[0],
            Light {
                on: true,
                brightness: 20,
                temperature: 4200
            }
        );
        assert!(!lights[1].on);
    }
}
