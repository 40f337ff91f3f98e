//! End-to-end polling loop on the in-memory register layer.
//!
//! Needs the `mock` feature: `cargo test --features mock`.

use s32k_gpio::app::{self, AppConfig, LedFsm, LedMode};
use s32k_gpio::mock::{MockDelay, MockPorts};
use s32k_gpio::{Driver, Level, Port};

const BUTTON_A: u8 = 13;
const BUTTON_B: u8 = 12;

struct Board {
    driver: Driver<MockPorts>,
    delay: MockDelay,
    fsm: LedFsm,
}

impl Board {
    fn boot() -> Self {
        let config = AppConfig::default();
        let mut driver = Driver::new(MockPorts::new());
        app::configure(&mut driver, &config).unwrap();
        driver.hal_mut().set_input(Port::C, BUTTON_A, Level::High);
        driver.hal_mut().set_input(Port::C, BUTTON_B, Level::High);
        Self {
            driver,
            delay: MockDelay::new(),
            fsm: LedFsm::new(config),
        }
    }

    fn hold(&mut self, pin: u8, pressed: bool, polls: usize) -> LedMode {
        self.driver.hal_mut().set_input(Port::C, pin, Level::from(!pressed));
        for _ in 0..polls {
            self.fsm.update(&mut self.driver, &mut self.delay);
        }
        self.fsm.mode()
    }

    fn leds(&self) -> u32 {
        self.driver.hal().pdor(Port::D) & 0x8001
    }
}

#[test]
fn test_press_and_release_sequence() {
    let mut board = Board::boot();
    assert_eq!(board.hold(BUTTON_A, false, 4), LedMode::Idle);
    assert_eq!(board.leds(), 0x8001);

    assert_eq!(board.hold(BUTTON_A, true, 3), LedMode::BlinkPrimary);
    // Blue blinked and ends low, red stays off
    assert_eq!(board.leds(), 0x8000);

    assert_eq!(board.hold(BUTTON_A, false, 10), LedMode::BlinkPrimary);

    assert_eq!(board.hold(BUTTON_B, true, 3), LedMode::BlinkSecondary);
    assert_eq!(board.leds(), 0x0001);
}

#[test]
fn test_bounce_keeps_idle() {
    let mut board = Board::boot();
    for _ in 0..20 {
        board.hold(BUTTON_B, true, 2);
        board.hold(BUTTON_B, false, 1);
    }
    assert_eq!(board.fsm.mode(), LedMode::Idle);
    assert_eq!(board.delay.elapsed_ns(), 0);
}
