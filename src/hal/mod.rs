//! Register abstraction layer
//!
//! One operation per port-level concern. Every operation takes an explicit
//! `(port, pin)` pair and trusts its caller: the pin index must be below
//! [`PINS_PER_PORT`](crate::pin::PINS_PER_PORT). Range checking is the
//! driver's job.

pub mod s32k144;
pub mod wdog;

pub use s32k144::S32k144Ports;

use crate::pin::{Direction, Level, Port, Pull};

/// Port-level register operations.
///
/// # Invariants
///
/// - `pin < 32` for every call
/// - Read-modify-write operations preserve every bit they do not own
/// - `write_pin` and `toggle_pin` go through the set/clear/toggle
///   registers of `port`, never through a read-modify-write of the data
///   output register
pub trait PortHal {
    /// Enable the port clock gate, then route `pin` to the GPIO function.
    fn init_port(&mut self, port: Port, pin: u8);

    /// Set the direction bit of `pin` (`Output = 1`, `Input = 0`).
    fn set_direction(&mut self, port: Port, pin: u8, direction: Direction);

    /// Program the pull-enable/select pair of `pin`.
    ///
    /// `Pull::None` clears the pull-enable bit.
    fn set_pull_resistor(&mut self, port: Port, pin: u8, pull: Pull);

    /// Drive `pin` to `level` with a single set or clear register write.
    fn write_pin(&mut self, port: Port, pin: u8, level: Level);

    /// Invert the output of `pin` with a single toggle register write.
    fn toggle_pin(&mut self, port: Port, pin: u8);

    /// Read the data-input bit of `pin`.
    fn read_pin(&self, port: Port, pin: u8) -> Level;
}
