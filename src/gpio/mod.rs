// src/gpio/mod.rs - Pin feature types and the simulated pin store
pub mod pins;
pub mod store;

use crate::error::GpioError;
use serde::{Deserialize, Serialize};
use std::ops::Not;

pub use pins::{BoardLayout, PinId, PinTable, ORANGE_PI_ONE};
pub use store::PinStore;

/// Direction a pin is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Input,
    Output,
}

/// Passive bias resistor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Logical pin level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    High,
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

// Raw codes used by pyA20-style callers: INPUT=0, OUTPUT=1.
impl TryFrom<u8> for Mode {
    type Error = GpioError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Mode::Input),
            1 => Ok(Mode::Output),
            other => Err(GpioError::InvalidMode(other)),
        }
    }
}

// PULLNONE=0, PULLUP=1, PULLDOWN=2.
impl TryFrom<u8> for Pull {
    type Error = GpioError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Pull::None),
            1 => Ok(Pull::Up),
            2 => Ok(Pull::Down),
            other => Err(GpioError::InvalidPull(other)),
        }
    }
}

// LOW=0, HIGH=1.
impl TryFrom<u8> for Level {
    type Error = GpioError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            other => Err(GpioError::InvalidValue(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        match level {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

/// Recorded features of one pin. Each field stays `None` until set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PinRecord {
    pub mode: Option<Mode>,
    pub pull: Option<Pull>,
    pub value: Option<Level>,
}
