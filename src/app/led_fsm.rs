//! LED mode state machine driven by two debounced buttons.

use embedded_hal::delay::DelayNs;

use super::AppConfig;
use super::blink::blink;
use super::debounce::Debounce;
use crate::board::BUTTON_RELEASED;
use crate::driver::GpioDriver;

/// Which LED is blinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    #[default]
    Idle = 0,
    BlinkPrimary = 1,
    BlinkSecondary = 2,
}

/// Application context: configuration, button filters and current mode.
///
/// Owned by the polling loop and passed the driver and delay source on each
/// [`update`](LedFsm::update), so independent instances never share state.
#[derive(Debug, Clone)]
pub struct LedFsm {
    config: AppConfig,
    mode: LedMode,
    button_a: Debounce,
    button_b: Debounce,
}

impl LedFsm {
    pub fn new(config: AppConfig) -> Self {
        Self {
            mode: LedMode::Idle,
            button_a: Debounce::with_threshold(BUTTON_RELEASED, config.debounce_threshold),
            button_b: Debounce::with_threshold(BUTTON_RELEASED, config.debounce_threshold),
            config,
        }
    }

    pub fn mode(&self) -> LedMode {
        self.mode
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn button_a(&self) -> &Debounce {
        &self.button_a
    }

    /// Run one polling cycle.
    ///
    /// Samples both buttons, feeds the filters, applies the highest
    /// priority edge (button A before button B) and then performs the
    /// action of the resulting mode. Blinking blocks for a full blink
    /// period.
    pub fn update<D, T>(&mut self, driver: &mut D, delay: &mut T) -> LedMode
    where
        D: GpioDriver + ?Sized,
        T: DelayNs + ?Sized,
    {
        self.button_a.update(driver.get_input(self.config.button_a));
        self.button_b.update(driver.get_input(self.config.button_b));

        let next = if self.button_a.falling_edge() {
            LedMode::BlinkPrimary
        } else if self.button_b.falling_edge() {
            LedMode::BlinkSecondary
        } else {
            self.mode
        };
        if next != self.mode {
            info!("led: {} -> {}", self.mode, next);
            self.mode = next;
        }

        self.run_action(driver, delay);
        self.mode
    }

    fn run_action<D, T>(&self, driver: &mut D, delay: &mut T)
    where
        D: GpioDriver + ?Sized,
        T: DelayNs + ?Sized,
    {
        let AppConfig {
            led_primary,
            led_secondary,
            led_off,
            blink_half_period_ms,
            ..
        } = self.config;

        match self.mode {
            LedMode::Idle => {
                driver.set_output(led_primary, led_off);
                driver.set_output(led_secondary, led_off);
            }
            LedMode::BlinkPrimary => {
                blink(driver, delay, led_primary, blink_half_period_ms);
                driver.set_output(led_secondary, led_off);
            }
            LedMode::BlinkSecondary => {
                blink(driver, delay, led_secondary, blink_half_period_ms);
                driver.set_output(led_primary, led_off);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockGpio};
    use crate::pin::Level;

    struct Bench {
        fsm: LedFsm,
        gpio: MockGpio,
        delay: MockDelay,
    }

    impl Bench {
        fn new() -> Self {
            let config = AppConfig::default();
            let mut gpio = MockGpio::new();
            gpio.set_input(config.button_a, Level::High);
            gpio.set_input(config.button_b, Level::High);
            Self {
                fsm: LedFsm::new(config),
                gpio,
                delay: MockDelay::new(),
            }
        }

        fn press_a(&mut self, pressed: bool) {
            let pin = self.fsm.config().button_a;
            self.gpio.set_input(pin, Level::from(!pressed));
        }

        fn press_b(&mut self, pressed: bool) {
            let pin = self.fsm.config().button_b;
            self.gpio.set_input(pin, Level::from(!pressed));
        }

        /// One poll. The write log only holds the writes of this poll.
        fn step(&mut self) -> LedMode {
            self.gpio.clear_writes();
            self.fsm.update(&mut self.gpio, &mut self.delay)
        }

        fn steps(&mut self, n: usize) -> LedMode {
            for _ in 1..n {
                self.step();
            }
            self.step()
        }
    }

    #[test]
    fn test_idle_turns_both_leds_off() {
        let mut bench = Bench::new();
        let config = *bench.fsm.config();

        assert_eq!(bench.step(), LedMode::Idle);
        assert_eq!(
            bench.gpio.writes(),
            &[(config.led_primary, Level::High), (config.led_secondary, Level::High)]
        );
        assert_eq!(bench.delay.elapsed_ns(), 0);
    }

    #[test]
    fn test_no_edges_hold_state() {
        let mut bench = Bench::new();
        assert_eq!(bench.steps(50), LedMode::Idle);
    }

    #[test]
    fn test_button_a_selects_primary() {
        let mut bench = Bench::new();
        bench.press_a(true);

        // Two disagreeing samples are absorbed
        assert_eq!(bench.steps(2), LedMode::Idle);

        assert_eq!(bench.step(), LedMode::BlinkPrimary);
        let config = *bench.fsm.config();
        assert_eq!(
            bench.gpio.writes(),
            &[
                (config.led_primary, Level::High),
                (config.led_primary, Level::Low),
                (config.led_secondary, Level::High),
            ]
        );
        assert_eq!(
            bench.delay.elapsed_ms(),
            2 * u64::from(config.blink_half_period_ms)
        );
    }

    #[test]
    fn test_mode_survives_release() {
        let mut bench = Bench::new();
        bench.press_a(true);
        bench.steps(3);
        bench.press_a(false);
        assert_eq!(bench.steps(100), LedMode::BlinkPrimary);
        assert!(!bench.fsm.button_a().is_pressed());

        // Still blinking after several hundred writes
        let config = *bench.fsm.config();
        assert_eq!(
            bench.gpio.writes(),
            &[
                (config.led_primary, Level::High),
                (config.led_primary, Level::Low),
                (config.led_secondary, Level::High),
            ]
        );
    }

    #[test]
    fn test_button_b_selects_secondary() {
        let mut bench = Bench::new();
        bench.press_b(true);
        assert_eq!(bench.steps(3), LedMode::BlinkSecondary);

        let config = *bench.fsm.config();
        bench.step();
        assert_eq!(
            bench.gpio.writes(),
            &[
                (config.led_secondary, Level::High),
                (config.led_secondary, Level::Low),
                (config.led_primary, Level::High),
            ]
        );
    }

    #[test]
    fn test_button_a_has_priority() {
        let mut bench = Bench::new();
        bench.press_a(true);
        bench.press_b(true);
        assert_eq!(bench.steps(3), LedMode::BlinkPrimary);

        // A held: its edge keeps winning over B
        assert_eq!(bench.steps(10), LedMode::BlinkPrimary);

        // Release both, then press B alone
        bench.press_a(false);
        bench.press_b(false);
        bench.steps(3);
        bench.press_b(true);
        assert_eq!(bench.steps(3), LedMode::BlinkSecondary);
    }

    #[test]
    fn test_switch_back_to_primary() {
        let mut bench = Bench::new();
        bench.press_b(true);
        bench.steps(3);
        bench.press_b(false);
        bench.steps(3);
        assert_eq!(bench.fsm.mode(), LedMode::BlinkSecondary);

        bench.press_a(true);
        assert_eq!(bench.steps(3), LedMode::BlinkPrimary);
    }

    #[test]
    fn test_glitch_does_not_change_mode() {
        let mut bench = Bench::new();
        for _ in 0..10 {
            bench.press_a(true);
            bench.step();
            bench.press_a(false);
            bench.step();
        }
        assert_eq!(bench.fsm.mode(), LedMode::Idle);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Bench::new();
        let b = Bench::new();
        a.press_a(true);
        a.steps(3);
        assert_eq!(a.fsm.mode(), LedMode::BlinkPrimary);
        assert_eq!(b.fsm.mode(), LedMode::Idle);
    }
}
