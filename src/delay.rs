//! Cycle-counted busy-wait delay
//!
//! Blocks the core for at least the requested time by spinning for a
//! number of cycles derived from the core clock. Nothing else runs while it
//! waits.

/// Busy-wait delay calibrated from the core clock frequency.
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    cycles_per_us: u32,
}

impl CycleDelay {
    pub const fn new(core_clock_hz: u32) -> Self {
        let cycles_per_us = core_clock_hz / 1_000_000;
        Self {
            cycles_per_us: if cycles_per_us == 0 { 1 } else { cycles_per_us },
        }
    }

    /// Core cycles covering `ns` nanoseconds.
    pub const fn cycles_for_ns(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.cycles_per_us as u64).div_ceil(1_000);
        if cycles > u32::MAX as u64 { u32::MAX } else { cycles as u32 }
    }
}

#[cfg(feature = "firmware")]
impl embedded_hal::delay::DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(self.cycles_for_ns(ns));
    }
}
