//! Blocking LED blink.

use embedded_hal::delay::DelayNs;

use crate::driver::GpioDriver;
use crate::pin::{Level, PinId};

/// Drive `pin` high, hold, drive it low, hold.
///
/// Blocks for `2 * half_period_ms`. Nothing is sampled in the meantime, so
/// button activity during a blink is lost.
pub fn blink<D, T>(driver: &mut D, delay: &mut T, pin: PinId, half_period_ms: u32)
where
    D: GpioDriver + ?Sized,
    T: DelayNs + ?Sized,
{
    driver.set_output(pin, Level::High);
    delay.delay_ms(half_period_ms);
    driver.set_output(pin, Level::Low);
    delay.delay_ms(half_period_ms);
}
