//! S32K144EVB button-selected LED blinker
//!
//! Two debounced buttons select which channel of the RGB LED blinks:
//!
//!   SW3 (PTC13) -> blue LED  (PTD0)  blinks, red off
//!   SW2 (PTC12) -> red LED   (PTD15) blinks, blue off
//!
//! SW3 is checked first. Until a button is pressed both LEDs stay off.
//! The core runs from the 48 MHz FIRC selected out of reset; no clock
//! configuration is done here.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use {defmt_rtt as _, panic_probe as _};

use s32k_gpio::app::{self, AppConfig, LedFsm};
use s32k_gpio::board::CORE_CLOCK_HZ;
use s32k_gpio::delay::CycleDelay;
use s32k_gpio::driver::Driver;
use s32k_gpio::hal::{S32k144Ports, wdog};

/// Flash configuration field at 0x400: backdoor key, protection bytes all
/// open, security disabled.
#[unsafe(link_section = ".flash_config")]
#[used]
static FLASH_CONFIG: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // backdoor key
    0xFF, 0xFF, 0xFF, 0xFF, // FPROT
    0xFE, // FSEC: unsecured
    0x7F, // FOPT
    0xFF, // FEPROT
    0xFF, // FDPROT
];

#[entry]
fn main() -> ! {
    // SAFETY: first thing after reset, nothing else touches the watchdog.
    unsafe { wdog::disable() };

    info!("led-fsm: starting");

    // SAFETY: the driver is the only owner of the PCC/PORT/GPIO blocks.
    let ports = unsafe { S32k144Ports::steal() };
    let mut driver = Driver::new(ports);
    let mut delay = CycleDelay::new(CORE_CLOCK_HZ);

    let config = AppConfig::default();
    unwrap!(app::configure(&mut driver, &config));

    let mut fsm = LedFsm::new(config);
    loop {
        fsm.update(&mut driver, &mut delay);
    }
}
