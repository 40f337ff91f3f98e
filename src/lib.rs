//! GPIO subsystem for the NXP S32K144.
//!
//! The crate is split into three layers:
//!
//! - [`hal`]: per-port operations on the memory-mapped PCC, PORT and GPIO
//!   register blocks, behind the [`hal::PortHal`] trait.
//! - [`driver`]: the pin-level driver interface. It decodes packed pin
//!   identifiers, validates them and forwards capability requests to the
//!   register layer.
//! - [`app`]: the application running on top of the driver, two debounced
//!   buttons selecting which of two LEDs blinks.
//!
//! In-memory fakes of the register layer, the driver and the delay source
//! live in `mock` (available in tests or with the `mock` feature).

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod app;
pub mod board;
pub mod delay;
pub mod driver;
pub mod error;
pub mod hal;
pub mod pin;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use driver::{Driver, GpioDriver};
pub use error::{GpioError, Result, StatusCode};
pub use pin::{Direction, EventTrigger, Level, OutputMode, PinId, Port, Pull};
