//! In-memory fakes for testing
//!
//! - [`MockPorts`]: register layer backed by plain words
//! - [`MockGpio`]: driver that records writes and serves injected inputs
//! - [`MockDelay`]: delay source that only accumulates simulated time
//!
//! Available during test builds and with the `mock` feature.

mod delay;
mod gpio;
mod ports;

pub use delay::MockDelay;
pub use gpio::MockGpio;
pub use ports::MockPorts;
