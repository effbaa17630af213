//! The fixed gauge schema.

use prometheus::{GaugeVec, Opts, Registry};

use lumen_core::error::{LumenError, Result};

/// The closed set of gauge families exported per scrape.
///
/// One variant per declared series; the translator matches exhaustively on
/// this enum, so a variant without translation rules cannot compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauge {
    Info,
    LightOn,
    LightBrightnessPercent,
    LightColorTemperatureKelvin,
}

impl Gauge {
    pub const ALL: [Gauge; 4] = [
        Gauge::Info,
        Gauge::LightOn,
        Gauge::LightBrightnessPercent,
        Gauge::LightColorTemperatureKelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Gauge::Info => "lumen_info",
            Gauge::LightOn => "lumen_light_on",
            Gauge::LightBrightnessPercent => "lumen_light_brightness_percent",
            Gauge::LightColorTemperatureKelvin => "lumen_light_color_temperature_kelvin",
        }
    }

    fn help(self) -> &'static str {
        match self {
            Gauge::Info => "Metadata about a smart-light accessory.",
            Gauge::LightOn => {
                "Reports whether a given light on a device is turned on (0: off, 1: on)."
            }
            Gauge::LightBrightnessPercent => {
                "The brightness percentage of a given light on a device."
            }
            Gauge::LightColorTemperatureKelvin => {
                "The color temperature in Kelvin of a given light on a device."
            }
        }
    }

    fn label_names(self) -> &'static [&'static str] {
        match self {
            Gauge::Info => &["firmware", "name", "serial"],
            Gauge::LightOn | Gauge::LightBrightnessPercent | Gauge::LightColorTemperatureKelvin => {
                &["light", "serial"]
            }
        }
    }
}

/// The process-wide metric registry: one `GaugeVec` per [`Gauge`] variant.
///
/// Created exactly once at startup. Current values are shared mutable state
/// across all requests; see the scrape handler for the exclusivity contract.
pub struct DeviceMetrics {
    pub(crate) registry: Registry,
    info: GaugeVec,
    light_on: GaugeVec,
    brightness: GaugeVec,
    temperature: GaugeVec,
}

impl DeviceMetrics {
    /// Build the registry and register every family. Registering the same
    /// name twice is a startup error, surfaced as `Result` rather than a
    /// per-request condition.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let build = |gauge: Gauge| -> Result<GaugeVec> {
            let vec = GaugeVec::new(Opts::new(gauge.name(), gauge.help()), gauge.label_names())
                .map_err(|e| {
                    LumenError::Internal(format!("bad metric definition {}: {e}", gauge.name()))
                })?;
            registry.register(Box::new(vec.clone())).map_err(|e| {
                LumenError::Internal(format!("metric registration failed for {}: {e}", gauge.name()))
            })?;
            Ok(vec)
        };

        let info = build(Gauge::Info)?;
        let light_on = build(Gauge::LightOn)?;
        let brightness = build(Gauge::LightBrightnessPercent)?;
        let temperature = build(Gauge::LightColorTemperatureKelvin)?;

        Ok(Self {
            registry,
            info,
            light_on,
            brightness,
            temperature,
        })
    }

    pub(crate) fn series(&self, gauge: Gauge) -> &GaugeVec {
        match gauge {
            Gauge::Info => &self.info,
            Gauge::LightOn => &self.light_on,
            Gauge::LightBrightnessPercent => &self.brightness,
            Gauge::LightColorTemperatureKelvin => &self.temperature,
        }
    }
}
