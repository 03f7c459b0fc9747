// src/shared.rs - Board handle for callers on several threads
use crate::board::OrangePiOne;
use crate::error::{GpioError, Result};
use std::sync::{Arc, Mutex};

/// Cloneable handle to one simulated board.
///
/// Each call takes a single board-wide lock for its whole duration, so a
/// compound operation like `toggle` is never interleaved with another caller.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<OrangePiOne>>,
}

impl SharedBoard {
    pub fn new(board: OrangePiOne) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Runs `func` with exclusive access to the board.
    pub fn with<F, R>(&self, func: F) -> Result<R>
    where
        F: FnOnce(&mut OrangePiOne) -> Result<R>,
    {
        let mut guard = self.inner.lock().map_err(|_| {
            tracing::error!("GPIO board lock poisoned");
            GpioError::LockPoisoned
        })?;
        func(&mut guard)
    }

    pub fn turn_on(&self, name: &str) -> Result<()> {
        self.with(|board| board.turn_on(name))
    }

    pub fn turn_off(&self, name: &str) -> Result<()> {
        self.with(|board| board.turn_off(name))
    }

    pub fn toggle(&self, name: &str) -> Result<crate::gpio::Level> {
        self.with(|board| board.toggle(name))
    }

    pub fn is_high(&self, name: &str) -> Result<bool> {
        self.with(|board| board.is_high(name))
    }
}
