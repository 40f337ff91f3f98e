//! Pin identifiers and the enumerated pin modes.
//!
//! A [`PinId`] packs a port index and a pin index as `port << 8 | pin`.
//! Construction never validates: the driver decodes and range-checks the
//! identifier on every call, so any `u32` can be carried around safely.

use crate::error::{GpioError, Result};

/// Number of GPIO ports (PTA..PTE).
pub const PORT_COUNT: usize = 5;

/// Number of pins per port.
pub const PINS_PER_PORT: u8 = 32;

/// GPIO port of the S32K144.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl Port {
    pub const ALL: [Port; PORT_COUNT] = [Port::A, Port::B, Port::C, Port::D, Port::E];

    pub const fn from_index(index: u8) -> Option<Port> {
        match index {
            0 => Some(Port::A),
            1 => Some(Port::B),
            2 => Some(Port::C),
            3 => Some(Port::D),
            4 => Some(Port::E),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Opaque packed pin identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u32);

impl PinId {
    /// Pack `port` and `pin` into an identifier.
    pub const fn new(port: u8, pin: u8) -> Self {
        Self(((port as u32) << 8) | pin as u32)
    }

    pub const fn from_port(port: Port, pin: u8) -> Self {
        Self::new(port as u8, pin)
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Port byte of the identifier, bits 8..16.
    pub const fn port_index(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Pin byte of the identifier, bits 0..8.
    pub const fn pin_index(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Decode and range-check the identifier.
    ///
    /// # Errors
    ///
    /// Returns `GpioError::Pin` if the port index is not below
    /// [`PORT_COUNT`] or the pin index is not below [`PINS_PER_PORT`].
    pub fn locate(self) -> Result<(Port, u8)> {
        let pin = self.pin_index();
        match Port::from_index(self.port_index()) {
            Some(port) if pin < PINS_PER_PORT => Ok((port, pin)),
            _ => Err(GpioError::Pin),
        }
    }
}

impl From<u32> for PinId {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

/// Logic level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low = 0,
    High = 1,
}

impl Level {
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input = 0,
    Output = 1,
}

/// Output driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
    PushPull = 0,
    OpenDrain = 1,
}

/// Internal pull resistor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None = 0,
    Up = 1,
    Down = 2,
}

/// Edge that should raise a pin event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventTrigger {
    None = 0,
    RisingEdge = 1,
    FallingEdge = 2,
    EitherEdge = 3,
}

// Raw enumerant decoding, numbered like the CMSIS-Driver GPIO API. Unknown
// values are a parameter error.
macro_rules! raw_enum {
    ($ty:ident { $($raw:literal => $variant:ident),+ $(,)? }) => {
        impl TryFrom<u32> for $ty {
            type Error = GpioError;

            fn try_from(raw: u32) -> Result<Self> {
                match raw {
                    $($raw => Ok($ty::$variant),)+
                    _ => Err(GpioError::Parameter),
                }
            }
        }
    };
}

raw_enum!(Level { 0 => Low, 1 => High });
raw_enum!(Direction { 0 => Input, 1 => Output });
raw_enum!(OutputMode { 0 => PushPull, 1 => OpenDrain });
raw_enum!(Pull { 0 => None, 1 => Up, 2 => Down });
raw_enum!(EventTrigger { 0 => None, 1 => RisingEdge, 2 => FallingEdge, 3 => EitherEdge });
