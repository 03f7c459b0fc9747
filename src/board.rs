//! # Orange Pi One pin manager
//!
//! Name-based access to the simulated GPIO of an Orange Pi One. Pins are
//! addressed either by SoC port (`PA13`, `STATUS_LED`) or by header connector
//! (`gpio1p8`, `LEDp2`); both names of a physical pin share one state entry.
//!
//! ## Example
//!
//! ```rust
//! use orangepi_gpio::board::OrangePiOne;
//!
//! let mut board = OrangePiOne::new();
//! board.turn_on("PA13").unwrap();
//! assert!(board.is_output("gpio1p8").unwrap());
//! assert!(board.is_high("PA13").unwrap());
//! ```
//!
//! Every operation resolves the name first and fails with
//! [`GpioError::UnknownPin`] before touching any state.

use crate::error::{GpioError, Result};
use crate::gpio::{BoardLayout, Level, Mode, PinId, PinStore, Pull, ORANGE_PI_ONE};
use std::fmt;

/// GPIO manager for one simulated board.
#[derive(Debug, Clone)]
pub struct OrangePiOne {
    store: PinStore,
}

impl Default for OrangePiOne {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrangePiOne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.store.layout().name)
    }
}

impl OrangePiOne {
    /// Board with the stock pin tables and every port pin preset to
    /// input / high.
    pub fn new() -> Self {
        Self::with_layout(ORANGE_PI_ONE)
    }

    pub fn with_layout(layout: BoardLayout) -> Self {
        Self::from_store(PinStore::with_defaults(layout))
    }

    /// Wraps an existing store, e.g. one built without the start-up preset.
    pub fn from_store(store: PinStore) -> Self {
        let board = Self { store };
        tracing::debug!("Instance of GPIO manager created: {}", board);
        board
    }

    pub fn layout(&self) -> &BoardLayout {
        self.store.layout()
    }

    pub fn store(&self) -> &PinStore {
        &self.store
    }

    /// Port names are consulted before connector names.
    pub fn resolve(&self, name: &str) -> Result<PinId> {
        self.store.layout().lookup(name).ok_or_else(|| {
            tracing::warn!("Unknown pin {}", name);
            GpioError::UnknownPin(name.to_string())
        })
    }

    fn drive(&mut self, name: &str, level: Level) -> Result<()> {
        let pin = self.resolve(name)?;
        self.store.configure(pin, Mode::Output)?;
        self.store.write(pin, level)
    }

    /// Output, high.
    pub fn turn_on(&mut self, name: &str) -> Result<()> {
        self.drive(name, Level::High)
    }

    /// Output, low.
    pub fn turn_off(&mut self, name: &str) -> Result<()> {
        self.drive(name, Level::Low)
    }

    /// Switches the pin to output and inverts its level. A pin that was
    /// never written counts as low and therefore ends up high.
    pub fn toggle(&mut self, name: &str) -> Result<Level> {
        let pin = self.resolve(name)?;
        let next = !self.store.read(pin)?.unwrap_or(Level::Low);
        self.store.configure(pin, Mode::Output)?;
        self.store.write(pin, next)?;
        Ok(next)
    }

    fn pull(&mut self, name: &str, pull: Pull) -> Result<()> {
        let pin = self.resolve(name)?;
        self.store.set_pull(pin, pull)
    }

    pub fn set_pullup(&mut self, name: &str) -> Result<()> {
        self.pull(name, Pull::Up)
    }

    pub fn set_pulldown(&mut self, name: &str) -> Result<()> {
        self.pull(name, Pull::Down)
    }

    pub fn clear_pull(&mut self, name: &str) -> Result<()> {
        self.pull(name, Pull::None)
    }

    /// Switches the pin to input and returns its level.
    pub fn read_as_input(&mut self, name: &str) -> Result<Option<Level>> {
        let pin = self.resolve(name)?;
        self.store.configure(pin, Mode::Input)?;
        self.store.read(pin)
    }

    /// Current level, mode untouched.
    pub fn peek(&self, name: &str) -> Result<Option<Level>> {
        let pin = self.resolve(name)?;
        self.store.read(pin)
    }

    pub fn mode(&self, name: &str) -> Result<Option<Mode>> {
        let pin = self.resolve(name)?;
        self.store.get_mode(pin)
    }

    pub fn pull_state(&self, name: &str) -> Result<Option<Pull>> {
        let pin = self.resolve(name)?;
        self.store.get_pull(pin)
    }

    pub fn is_high(&self, name: &str) -> Result<bool> {
        Ok(self.peek(name)? == Some(Level::High))
    }

    /// Negation of [`is_high`](Self::is_high), so an unwritten pin is low.
    pub fn is_low(&self, name: &str) -> Result<bool> {
        Ok(!self.is_high(name)?)
    }

    pub fn is_output(&self, name: &str) -> Result<bool> {
        Ok(self.mode(name)? == Some(Mode::Output))
    }

    pub fn is_input(&self, name: &str) -> Result<bool> {
        Ok(self.mode(name)? == Some(Mode::Input))
    }
}
