//! Button-driven LED application.
//!
//! A polling loop calls [`LedFsm::update`] forever. Each call samples the
//! two buttons through the driver, debounces them, picks the LED mode and
//! drives the LEDs.

pub mod blink;
pub mod debounce;
pub mod led_fsm;

pub use blink::blink;
pub use debounce::Debounce;
pub use led_fsm::{LedFsm, LedMode};

use crate::board;
use crate::driver::GpioDriver;
use crate::error::Result;
use crate::pin::{Direction, Level, OutputMode, PinId, Pull};

/// Pins and timing of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Falling edge selects [`LedMode::BlinkPrimary`]; checked first.
    pub button_a: PinId,
    /// Falling edge selects [`LedMode::BlinkSecondary`].
    pub button_b: PinId,
    pub led_primary: PinId,
    pub led_secondary: PinId,
    /// Pin level that turns an LED off.
    pub led_off: Level,
    pub blink_half_period_ms: u32,
    pub debounce_threshold: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            button_a: board::BUTTON_0,
            button_b: board::BUTTON_1,
            led_primary: board::LED_BLUE,
            led_secondary: board::LED_RED,
            led_off: board::LED_OFF,
            blink_half_period_ms: board::BLINK_HALF_PERIOD_MS,
            debounce_threshold: board::DEBOUNCE_THRESHOLD,
        }
    }
}

/// Configure the buttons as pulled-up inputs and the LEDs as outputs
/// driven to the off level.
///
/// # Errors
///
/// Returns the first error reported by the driver; later pins are left
/// untouched.
pub fn configure<D: GpioDriver + ?Sized>(driver: &mut D, config: &AppConfig) -> Result<()> {
    for button in [config.button_a, config.button_b] {
        driver.setup(button, None)?;
        driver.set_direction(button, Direction::Input)?;
        driver.set_pull_resistor(button, Pull::Up)?;
    }

    for led in [config.led_primary, config.led_secondary] {
        driver.setup(led, None)?;
        // Latch the off level before the output driver is enabled.
        driver.set_output(led, config.led_off);
        driver.set_output_mode(led, OutputMode::PushPull)?;
        driver.set_direction(led, Direction::Output)?;
    }

    info!("app: buttons and LEDs configured");
    Ok(())
}
