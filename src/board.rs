//! S32K144EVB wiring.
//!
//! LEDs and buttons are active-low: an LED is off while its pin is high, a
//! button reads low while pressed (internal pull-up enabled).

use crate::pin::{Level, PinId, Port};

/// Core clock after reset (FIRC).
pub const CORE_CLOCK_HZ: u32 = 48_000_000;

/// Red channel of the RGB LED, PTD15.
pub const LED_RED: PinId = PinId::from_port(Port::D, 15);
/// Blue channel of the RGB LED, PTD0.
pub const LED_BLUE: PinId = PinId::from_port(Port::D, 0);
/// SW3, PTC13.
pub const BUTTON_0: PinId = PinId::from_port(Port::C, 13);
/// SW2, PTC12.
pub const BUTTON_1: PinId = PinId::from_port(Port::C, 12);

/// Pin level that turns an LED off.
pub const LED_OFF: Level = Level::High;

/// Level of a released button.
pub const BUTTON_RELEASED: Level = Level::High;

/// Half-period of the blink, in milliseconds.
pub const BLINK_HALF_PERIOD_MS: u32 = 100;

/// Consecutive disagreeing samples absorbed before the debounce filter
/// commits to a new state.
pub const DEBOUNCE_THRESHOLD: u8 = 2;
