//! Name-based GPIO for the Orange Pi One, backed by an in-memory simulator.
//!
//! - [`gpio::PinStore`] holds mode, pull and value per numeric pin id.
//! - [`board::OrangePiOne`] resolves port (`PA13`) and connector (`gpio1p8`)
//!   names and layers the convenience operations on top.
//! - [`shared::SharedBoard`] wraps a board for callers on several threads.
//! - [`config`] loads the start-up configuration, [`script`] runs
//!   `ACTION=PIN` steps.
//!
//! Diagnostics go through `tracing`; installing a subscriber is up to the
//! application.

pub mod board;
pub mod config;
pub mod error;
pub mod gpio;
pub mod script;
pub mod shared;

pub use board::OrangePiOne;
pub use error::{GpioError, Result};
pub use gpio::{Level, Mode, PinId, PinRecord, PinStore, Pull};
pub use shared::SharedBoard;
