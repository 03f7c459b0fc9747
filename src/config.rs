//! # Simulator Configuration
//!
//! Start-up configuration for a simulated board: log verbosity, whether the
//! port pins get their input/high preset, and an optional fixture of pins
//! placed in a known state before anything else runs.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [simulator]
//! preset_port_pins = true
//!
//! [[pins]]
//! name = "PA13"
//! mode = "output"
//! value = "low"
//!
//! [[pins]]
//! name = "gpio1p10"
//! pull = "up"
//! ```

// src/config.rs - Single configuration file
use crate::board::OrangePiOne;
use crate::error::GpioError;
use crate::gpio::{Level, Mode, PinStore, Pull, ORANGE_PI_ONE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid log level '{0}'")]
    LogLevel(String),
    #[error("Pin fixture error: {0}")]
    Gpio(#[from] GpioError),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub pins: Vec<PinFixture>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_preset_port_pins")]
    pub preset_port_pins: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            preset_port_pins: default_preset_port_pins(),
        }
    }
}

/// Pin state applied once at start-up. Unset fields are left alone.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PinFixture {
    pub name: String,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub pull: Option<Pull>,
    #[serde(default)]
    pub value: Option<Level>,
}

impl SimConfig {
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.logging.level.clone()))
    }

    /// Validate log level and fixture pin names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        for fixture in &self.pins {
            if ORANGE_PI_ONE.lookup(&fixture.name).is_none() {
                return Err(GpioError::UnknownPin(fixture.name.clone()).into());
            }
        }
        Ok(())
    }

    /// Fresh board with the preset and fixture applied.
    pub fn build_board(&self) -> Result<OrangePiOne, ConfigError> {
        self.validate()?;
        let mut store = if self.simulator.preset_port_pins {
            PinStore::with_defaults(ORANGE_PI_ONE)
        } else {
            PinStore::new(ORANGE_PI_ONE)
        };
        for fixture in &self.pins {
            let pin = ORANGE_PI_ONE
                .lookup(&fixture.name)
                .ok_or_else(|| GpioError::UnknownPin(fixture.name.clone()))?;
            if let Some(mode) = fixture.mode {
                store.configure(pin, mode)?;
            }
            if let Some(pull) = fixture.pull {
                store.set_pull(pin, pull)?;
            }
            if let Some(value) = fixture.value {
                store.write(pin, value)?;
            }
        }
        tracing::debug!("Applied {} pin fixtures", self.pins.len());
        Ok(OrangePiOne::from_store(store))
    }
}

fn default_level() -> String { "info".to_string() }
fn default_preset_port_pins() -> bool { true }

/// Load configuration from a TOML file at the given path.
pub fn load_config(path: &str) -> Result<SimConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::error!("Failed to parse config TOML: {}", e);
                Err(ConfigError::Toml(e))
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file '{}': {}", path, e);
            Err(ConfigError::Io(e))
        }
    }
}
