//! Scrape translation: one device snapshot onto the gauge schema.

use prometheus::{Encoder, TextEncoder};

use lumen_core::error::{LumenError, Result};
use lumen_core::DeviceSnapshot;

use super::schema::{DeviceMetrics, Gauge};

impl DeviceMetrics {
    /// Overwrite every gauge family with observations for this snapshot, and
    /// only this snapshot.
    ///
    /// Each family is reset before it is populated: the registry is reused
    /// across requests, and a previous target's series must not leak into the
    /// next response. Lights are labeled `light<i>` by their position in the
    /// snapshot's sequence; an empty sequence emits zero per-light rows.
    pub fn record_snapshot(&self, snapshot: &DeviceSnapshot) {
        let device = &snapshot.device;
        let serial = device.serial_number.as_str();

        for gauge in Gauge::ALL {
            let series = self.series(gauge);
            series.reset();

            match gauge {
                Gauge::Info => {
                    series
                        .with_label_values(&[
                            device.firmware_version.as_str(),
                            device.display_name.as_str(),
                            serial,
                        ])
                        .set(1.0);
                }
                Gauge::LightOn
                | Gauge::LightBrightnessPercent
                | Gauge::LightColorTemperatureKelvin => {
                    for (i, light) in snapshot.lights.iter().enumerate() {
                        let value = match gauge {
                            Gauge::LightOn => bool_value(light.on),
                            Gauge::LightBrightnessPercent => light.brightness as f64,
                            Gauge::LightColorTemperatureKelvin => light.temperature as f64,
                            // Outer arm admits only the per-light gauges.
                            Gauge::Info => unreachable!("per-light value for device-info gauge"),
                        };
                        let label = light_label(i);
                        series.with_label_values(&[label.as_str(), serial]).set(value);
                    }
                }
            }
        }
    }

    /// Render the registry's current values in the text exposition format.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .map_err(|e| LumenError::Internal(format!("metrics encoding failed: {e}")))?;
        String::from_utf8(buf)
            .map_err(|e| LumenError::Internal(format!("metrics encoding produced bad utf-8: {e}")))
    }
}

/// Synthetic per-scrape light identifier from the sequence position.
fn light_label(index: usize) -> String {
    format!("light{index}")
}

fn bool_value(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use lumen_core::{Device, DeviceSnapshot, Light};

    use super::super::schema::DeviceMetrics;

    fn snapshot(serial: &str, lights: Vec<Light>) -> DeviceSnapshot {
        DeviceSnapshot {
            device: Device {
                display_name: "test".into(),
                firmware_version: "1.0.0".into(),
                serial_number: serial.into(),
            },
            lights,
        }
    }

    fn count_lines(body: &str, prefix: &str) -> usize {
        body.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn one_row_per_light_per_gauge() {
        let metrics = DeviceMetrics::new().unwrap();
        metrics.record_snapshot(&snapshot("1111", vec![Light::default(); 3]));
        let body = metrics.render().unwrap();

        assert_eq!(count_lines(&body, "lumen_info{"), 1);
        assert_eq!(count_lines(&body, "lumen_light_on{"), 3);
        assert_eq!(count_lines(&body, "lumen_light_brightness_percent{"), 3);
        assert_eq!(count_lines(&body, "lumen_light_color_temperature_kelvin{"), 3);
    }

    #[test]
    fn zero_lights_emit_zero_rows() {
        let metrics = DeviceMetrics::new().unwrap();
        metrics.record_snapshot(&snapshot("1111", Vec::new()));
        let body = metrics.render().unwrap();

        assert_eq!(count_lines(&body, "lumen_info{"), 1);
        assert_eq!(count_lines(&body, "lumen_light_on{"), 0);
        assert_eq!(count_lines(&body, "lumen_light_brightness_percent{"), 0);
        assert_eq!(count_lines(&body, "lumen_light_color_temperature_kelvin{"), 0);
    }

    #[test]
    fn lights_are_labeled_by_position() {
        let metrics = DeviceMetrics::new().unwrap();
        metrics.record_snapshot(&snapshot(
            "1111",
            vec![
                Light {
                    on: true,
                    brightness: 20,
                    temperature: 4200,
                },
                Light::default(),
            ],
        ));
        let body = metrics.render().unwrap();

        assert!(body.contains(r#"lumen_info{firmware="1.0.0",name="test",serial="1111"} 1"#));
        assert!(body.contains(r#"lumen_light_on{light="light0",serial="1111"} 1"#));
        assert!(body.contains(r#"lumen_light_brightness_percent{light="light0",serial="1111"} 20"#));
        assert!(
            body.contains(r#"lumen_light_color_temperature_kelvin{light="light0",serial="1111"} 4200"#)
        );
        assert!(body.contains(r#"lumen_light_on{light="light1",serial="1111"} 0"#));
        assert!(body.contains(r#"lumen_light_brightness_percent{light="light1",serial="1111"} 0"#));
    }

    #[test]
    fn previous_scrape_never_leaks() {
        let metrics = DeviceMetrics::new().unwrap();
        metrics.record_snapshot(&snapshot("1111", vec![Light::default(); 2]));
        metrics.record_snapshot(&snapshot("2222", vec![Light::default()]));
        let body = metrics.render().unwrap();

        assert!(!body.contains(r#"serial="1111""#));
        assert_eq!(count_lines(&body, "lumen_light_on{"), 1);
        assert!(body.contains(r#"lumen_light_on{light="light0",serial="2222"} 0"#));
    }
}
