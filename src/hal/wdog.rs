//! S32K144 watchdog.
//!
//! The watchdog is enabled out of reset with a timeout of a few
//! milliseconds. The application never refreshes it, so the firmware turns
//! it off before entering the polling loop.

use tock_registers::fields::FieldValue;
use tock_registers::interfaces::Writeable;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

pub const WDOG_BASE: usize = 0x4005_2000;

/// Value written to CNT to unlock the configuration registers.
const UNLOCK_KEY: u32 = 0xD928_C520;

register_structs! {
    WdogRegisters {
        (0x00 => cs: ReadWrite<u32, CS::Register>),
        (0x04 => cnt: ReadWrite<u32>),
        (0x08 => toval: ReadWrite<u32>),
        (0x0C => @END),
    }
}

register_bitfields![u32,
    pub CS [
        /// Allow updates after the unlock sequence
        UPDATE OFFSET(5) NUMBITS(1) [],
        /// Watchdog enable
        EN OFFSET(7) NUMBITS(1) [],
        /// Clock source
        CLK OFFSET(8) NUMBITS(2) [
            Bus = 0,
            Lpo = 1,
            Sosc = 2,
            Sirc = 3
        ],
        /// 32-bit refresh/unlock command
        CMD32EN OFFSET(13) NUMBITS(1) []
    ]
];

/// Configuration written by [`disable`]: watchdog off, further updates
/// allowed.
pub fn disabled() -> FieldValue<u32, CS::Register> {
    CS::CMD32EN::SET + CS::CLK::Lpo + CS::UPDATE::SET + CS::EN::CLEAR
}

/// Unlock the watchdog and disable it.
///
/// # Safety
///
/// Must run on an S32K144 while nothing else configures the watchdog.
pub unsafe fn disable() {
    // SAFETY: fixed peripheral address from the reference manual.
    let wdog = unsafe { &*(WDOG_BASE as *const WdogRegisters) };
    wdog.cnt.set(UNLOCK_KEY);
    wdog.toval.set(0xFFFF);
    wdog.cs.write(disabled());
}
