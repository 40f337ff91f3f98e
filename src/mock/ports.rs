//! Mock register layer

use tock_registers::LocalRegisterCopy;

use crate::hal::PortHal;
use crate::hal::s32k144::{PCCn, PCR};
use crate::pin::{Direction, Level, PINS_PER_PORT, PORT_COUNT, Port, Pull};

/// Reset value of a PCC port slot: only "peripheral present" is set.
const PCC_RESET: u32 = 0x8000_0000;

/// Register layer backed by plain words.
///
/// Field updates go through the same bitfield definitions as the
/// memory-mapped implementation. PDIR is modelled as the output latch for
/// pins configured as outputs and the injected external level otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPorts {
    pcc: [u32; PORT_COUNT],
    pcr: [[u32; PINS_PER_PORT as usize]; PORT_COUNT],
    pddr: [u32; PORT_COUNT],
    pdor: [u32; PORT_COUNT],
    external: [u32; PORT_COUNT],
}

impl MockPorts {
    pub fn new() -> Self {
        Self {
            pcc: [PCC_RESET; PORT_COUNT],
            pcr: [[0; PINS_PER_PORT as usize]; PORT_COUNT],
            pddr: [0; PORT_COUNT],
            pdor: [0; PORT_COUNT],
            external: [0; PORT_COUNT],
        }
    }

    /// Drive the external side of an input pin.
    pub fn set_input(&mut self, port: Port, pin: u8, level: Level) {
        let mask = 1u32 << pin;
        match level {
            Level::High => self.external[port.index()] |= mask,
            Level::Low => self.external[port.index()] &= !mask,
        }
    }

    /// Preload a pin control register.
    pub fn set_pcr(&mut self, port: Port, pin: u8, value: u32) {
        self.pcr[port.index()][pin as usize] = value;
    }

    pub fn pcc(&self, port: Port) -> u32 {
        self.pcc[port.index()]
    }

    pub fn pcr(&self, port: Port, pin: u8) -> u32 {
        self.pcr[port.index()][pin as usize]
    }

    pub fn pddr(&self, port: Port) -> u32 {
        self.pddr[port.index()]
    }

    pub fn pdor(&self, port: Port) -> u32 {
        self.pdor[port.index()]
    }

    fn modify_pcr(&mut self, port: Port, pin: u8, f: impl FnOnce(&mut LocalRegisterCopy<u32, PCR::Register>)) {
        let slot = &mut self.pcr[port.index()][pin as usize];
        let mut pcr = LocalRegisterCopy::new(*slot);
        f(&mut pcr);
        *slot = pcr.get();
    }
}

impl Default for MockPorts {
    fn default() -> Self {
        Self::new()
    }
}

impl PortHal for MockPorts {
    fn init_port(&mut self, port: Port, pin: u8) {
        let mut pcc = LocalRegisterCopy::<u32, PCCn::Register>::new(self.pcc[port.index()]);
        pcc.modify(PCCn::CGC::SET);
        self.pcc[port.index()] = pcc.get();
        self.modify_pcr(port, pin, |pcr| pcr.modify(PCR::MUX::Gpio));
    }

    fn set_direction(&mut self, port: Port, pin: u8, direction: Direction) {
        let mask = 1u32 << pin;
        match direction {
            Direction::Output => self.pddr[port.index()] |= mask,
            Direction::Input => self.pddr[port.index()] &= !mask,
        }
    }

    fn set_pull_resistor(&mut self, port: Port, pin: u8, pull: Pull) {
        self.modify_pcr(port, pin, |pcr| match pull {
            Pull::Up => pcr.modify(PCR::PE::SET + PCR::PS::PullUp),
            Pull::Down => pcr.modify(PCR::PE::SET + PCR::PS::PullDown),
            Pull::None => pcr.modify(PCR::PE::CLEAR),
        });
    }

    fn write_pin(&mut self, port: Port, pin: u8, level: Level) {
        // PSOR / PCOR
        let mask = 1u32 << pin;
        match level {
            Level::High => self.pdor[port.index()] |= mask,
            Level::Low => self.pdor[port.index()] &= !mask,
        }
    }

    fn toggle_pin(&mut self, port: Port, pin: u8) {
        self.pdor[port.index()] ^= 1u32 << pin;
    }

    fn read_pin(&self, port: Port, pin: u8) -> Level {
        let i = port.index();
        let pdir = (self.pdor[i] & self.pddr[i]) | (self.external[i] & !self.pddr[i]);
        Level::from(pdir & (1u32 << pin) != 0)
    }
}
