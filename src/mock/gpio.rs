//! Mock GPIO driver

use heapless::Vec;

use crate::driver::{GpioDriver, SignalEvent};
use crate::error::Result;
use crate::pin::{Direction, EventTrigger, Level, OutputMode, PORT_COUNT, PinId, Pull};

/// Number of output writes remembered by [`MockGpio`].
pub const WRITE_LOG_CAPACITY: usize = 256;

/// In-memory driver.
///
/// Range-checks pins like the real driver, remembers which pins were set up
/// and configured as outputs, logs every output write, and serves input
/// levels injected by the test.
///
/// The write log holds [`WRITE_LOG_CAPACITY`] entries. Overflowing it
/// panics instead of dropping writes.
#[derive(Debug, Default)]
pub struct MockGpio {
    setup: [u32; PORT_COUNT],
    outputs: [u32; PORT_COUNT],
    latch: [u32; PORT_COUNT],
    inputs: [u32; PORT_COUNT],
    pulls: Vec<(PinId, Pull), 16>,
    writes: Vec<(PinId, Level), WRITE_LOG_CAPACITY>,
}

impl MockGpio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level an input pin reads back.
    pub fn set_input(&mut self, pin: PinId, level: Level) {
        if let Ok((port, index)) = pin.locate() {
            let mask = 1u32 << index;
            match level {
                Level::High => self.inputs[port.index()] |= mask,
                Level::Low => self.inputs[port.index()] &= !mask,
            }
        }
    }

    pub fn is_setup(&self, pin: PinId) -> bool {
        bit(&self.setup, pin)
    }

    pub fn is_output(&self, pin: PinId) -> bool {
        bit(&self.outputs, pin)
    }

    /// Last pull configuration applied to `pin`.
    pub fn pull(&self, pin: PinId) -> Option<Pull> {
        self.pulls
            .iter()
            .rev()
            .find(|(p, _)| *p == pin)
            .map(|(_, pull)| *pull)
    }

    /// Current output latch of `pin`.
    pub fn output_level(&self, pin: PinId) -> Level {
        Level::from(bit(&self.latch, pin))
    }

    /// Output writes in call order.
    pub fn writes(&self) -> &[(PinId, Level)] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

fn bit(words: &[u32; PORT_COUNT], pin: PinId) -> bool {
    match pin.locate() {
        Ok((port, index)) => words[port.index()] & (1u32 << index) != 0,
        Err(_) => false,
    }
}

fn assign(words: &mut [u32; PORT_COUNT], pin: PinId, value: bool) -> Result<()> {
    let (port, index) = pin.locate()?;
    if value {
        words[port.index()] |= 1u32 << index;
    } else {
        words[port.index()] &= !(1u32 << index);
    }
    Ok(())
}

impl GpioDriver for MockGpio {
    fn setup(&mut self, pin: PinId, _callback: Option<SignalEvent>) -> Result<()> {
        assign(&mut self.setup, pin, true)
    }

    fn set_direction(&mut self, pin: PinId, direction: Direction) -> Result<()> {
        assign(&mut self.outputs, pin, direction == Direction::Output)
    }

    fn set_output_mode(&mut self, pin: PinId, _mode: OutputMode) -> Result<()> {
        pin.locate().map(|_| ())
    }

    fn set_pull_resistor(&mut self, pin: PinId, pull: Pull) -> Result<()> {
        pin.locate()?;
        if self.pulls.is_full() {
            self.pulls.remove(0);
        }
        let _ = self.pulls.push((pin, pull));
        Ok(())
    }

    fn set_event_trigger(&mut self, pin: PinId, _trigger: EventTrigger) -> Result<()> {
        pin.locate().map(|_| ())
    }

    fn set_output(&mut self, pin: PinId, level: Level) {
        if assign(&mut self.latch, pin, level == Level::High).is_ok()
            && self.writes.push((pin, level)).is_err()
        {
            panic!("MockGpio: more than {} writes logged, call clear_writes", WRITE_LOG_CAPACITY);
        }
    }

    fn get_input(&self, pin: PinId) -> Level {
        if self.is_output(pin) {
            self.output_level(pin)
        } else {
            Level::from(bit(&self.inputs, pin))
        }
    }

    fn toggle_output(&mut self, pin: PinId) {
        let level = !self.output_level(pin);
        self.set_output(pin, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GpioError;

    #[test]
    fn test_mock_gpio_records_writes() {
        let mut gpio = MockGpio::new();
        let led = PinId::new(3, 15);
        gpio.set_direction(led, Direction::Output).unwrap();

        gpio.set_output(led, Level::High);
        gpio.toggle_output(led);
        assert_eq!(gpio.writes(), &[(led, Level::High), (led, Level::Low)]);
        assert_eq!(gpio.get_input(led), Level::Low);

        gpio.clear_writes();
        assert!(gpio.writes().is_empty());
    }

    #[test]
    #[should_panic(expected = "writes logged")]
    fn test_mock_gpio_write_log_overflow_panics() {
        let mut gpio = MockGpio::new();
        let led = PinId::new(3, 0);
        for _ in 0..=WRITE_LOG_CAPACITY {
            gpio.toggle_output(led);
        }
    }

    #[test]
    fn test_mock_gpio_inputs() {
        let mut gpio = MockGpio::new();
        let button = PinId::new(2, 13);
        assert_eq!(gpio.get_input(button), Level::Low);
        gpio.set_input(button, Level::High);
        assert_eq!(gpio.get_input(button), Level::High);
    }

    #[test]
    fn test_mock_gpio_rejects_invalid_pins() {
        let mut gpio = MockGpio::new();
        let bad = PinId::new(7, 0);
        assert_eq!(gpio.setup(bad, None), Err(GpioError::Pin));
        assert_eq!(gpio.set_pull_resistor(bad, Pull::Up), Err(GpioError::Pin));
        gpio.set_output(bad, Level::High);
        assert!(gpio.writes().is_empty());
    }
}
