// src/gpio/store.rs - Simulated pin state store
use super::{BoardLayout, Level, Mode, PinId, PinRecord, Pull};
use crate::error::{GpioError, Result};
use std::collections::BTreeMap;

/// Per-pin feature table of one simulated board.
///
/// Records are created lazily by the mutators and never removed. Accessors
/// validate the pin but leave the table untouched, so a record exists only
/// once one of its features has been set. The store applies no policy: a
/// value may be written to a pin configured as input.
#[derive(Debug, Clone)]
pub struct PinStore {
    layout: BoardLayout,
    pins: BTreeMap<PinId, PinRecord>,
}

impl PinStore {
    /// Empty store without any records.
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            pins: BTreeMap::new(),
        }
    }

    /// Store with every port pin preset to input and high.
    pub fn with_defaults(layout: BoardLayout) -> Self {
        let mut store = Self::new(layout);
        store.init();
        store
    }

    /// Presets every port-namespace pin to `Input` / `High`. Pins only known
    /// through the connector table are left alone.
    pub fn init(&mut self) {
        let layout = self.layout;
        for pin in layout.port.ids() {
            let record = self.pins.entry(pin).or_default();
            record.mode = Some(Mode::Input);
            record.value = Some(Level::High);
        }
        tracing::debug!(
            "Pin store for {} initialized with {} port pins",
            layout.name,
            self.pins.len()
        );
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    fn check_pin(&self, pin: PinId) -> Result<()> {
        if self.layout.is_known(pin) {
            Ok(())
        } else {
            tracing::warn!("Unknown pin {}", pin);
            Err(GpioError::UnknownPinId(pin.0))
        }
    }

    fn record_mut(&mut self, pin: PinId) -> Result<&mut PinRecord> {
        self.check_pin(pin)?;
        Ok(self.pins.entry(pin).or_default())
    }

    pub fn configure(&mut self, pin: PinId, mode: Mode) -> Result<()> {
        self.record_mut(pin)?.mode = Some(mode);
        tracing::trace!("Pin {} mode -> {:?}", pin, mode);
        Ok(())
    }

    pub fn get_mode(&self, pin: PinId) -> Result<Option<Mode>> {
        Ok(self.record(pin)?.and_then(|record| record.mode))
    }

    pub fn set_pull(&mut self, pin: PinId, pull: Pull) -> Result<()> {
        self.record_mut(pin)?.pull = Some(pull);
        tracing::trace!("Pin {} pull -> {:?}", pin, pull);
        Ok(())
    }

    pub fn get_pull(&self, pin: PinId) -> Result<Option<Pull>> {
        Ok(self.record(pin)?.and_then(|record| record.pull))
    }

    pub fn write(&mut self, pin: PinId, value: Level) -> Result<()> {
        self.record_mut(pin)?.value = Some(value);
        tracing::trace!("Pin {} value -> {:?}", pin, value);
        Ok(())
    }

    pub fn read(&self, pin: PinId) -> Result<Option<Level>> {
        Ok(self.record(pin)?.and_then(|record| record.value))
    }

    /// Full record of a known pin, `None` if nothing was ever set on it.
    pub fn record(&self, pin: PinId) -> Result<Option<PinRecord>> {
        self.check_pin(pin)?;
        Ok(self.pins.get(&pin).copied())
    }

    /// Copy of every record, ordered by pin id.
    pub fn snapshot(&self) -> BTreeMap<PinId, PinRecord> {
        self.pins.clone()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
