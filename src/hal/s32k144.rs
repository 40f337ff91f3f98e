//! Memory-mapped PCC, PORT and GPIO register blocks of the S32K144.

use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use super::PortHal;
use crate::pin::{Direction, Level, PORT_COUNT, Port, Pull};

/// Peripheral clock controller.
pub const PCC_BASE: usize = 0x4006_5000;
/// PORTA pin control block; PORTB..PORTE follow at [`PORT_STRIDE`].
pub const PORT_BASE: usize = 0x4004_9000;
pub const PORT_STRIDE: usize = 0x1000;
/// PTA data block; PTB..PTE follow at [`GPIO_STRIDE`].
pub const GPIO_BASE: usize = 0x400F_F000;
pub const GPIO_STRIDE: usize = 0x40;

register_structs! {
    PccRegisters {
        (0x000 => _reserved0),
        // PCC_PORTA .. PCC_PORTE
        (0x124 => port: [ReadWrite<u32, PCCn::Register>; 5]),
        (0x138 => @END),
    },

    PortRegisters {
        // Pin control registers
        (0x000 => pcr: [ReadWrite<u32, PCR::Register>; 32]),
        (0x080 => @END),
    },

    GpioRegisters {
        // PDOR, only touched through the set/clear/toggle registers
        (0x00 => _reserved0),
        // Port set output
        (0x04 => psor: WriteOnly<u32>),
        // Port clear output
        (0x08 => pcor: WriteOnly<u32>),
        // Port toggle output
        (0x0C => ptor: WriteOnly<u32>),
        // Port data input
        (0x10 => pdir: ReadOnly<u32>),
        // Port data direction
        (0x14 => pddr: ReadWrite<u32>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    pub PCCn [
        /// Peripheral clock source select
        PCS OFFSET(24) NUMBITS(3) [
            Off = 0,
            SoscDiv = 1,
            SircDiv = 2,
            FircDiv = 3,
            SpllDiv = 6
        ],
        /// Clock gate control
        CGC OFFSET(30) NUMBITS(1) [],
        /// Peripheral present
        PR OFFSET(31) NUMBITS(1) []
    ],

    pub PCR [
        /// Pull select
        PS OFFSET(0) NUMBITS(1) [
            PullDown = 0,
            PullUp = 1
        ],
        /// Pull enable
        PE OFFSET(1) NUMBITS(1) [],
        /// Pin mux control
        MUX OFFSET(8) NUMBITS(3) [
            Disabled = 0,
            Gpio = 1
        ]
    ]
];

/// Owner of the five PORT/PT register pairs and their PCC slots.
pub struct S32k144Ports {
    pcc: &'static PccRegisters,
    ports: [&'static PortRegisters; PORT_COUNT],
    gpio: [&'static GpioRegisters; PORT_COUNT],
}

impl S32k144Ports {
    /// Take the register blocks.
    ///
    /// # Safety
    ///
    /// Must be called at most once, on an S32K144, and nothing else may
    /// access PORTA..PORTE, PTA..PTE or the PCC port slots afterwards.
    pub unsafe fn steal() -> Self {
        // SAFETY: fixed, aligned peripheral addresses from the reference
        // manual; exclusivity is the caller's contract.
        unsafe {
            Self {
                pcc: &*(PCC_BASE as *const PccRegisters),
                ports: Port::ALL.map(|port| &*(port_base(port) as *const PortRegisters)),
                gpio: Port::ALL.map(|port| &*(gpio_base(port) as *const GpioRegisters)),
            }
        }
    }
}

/// Address of the PORTn pin control block.
pub const fn port_base(port: Port) -> usize {
    PORT_BASE + port.index() * PORT_STRIDE
}

/// Address of the PTn data block.
pub const fn gpio_base(port: Port) -> usize {
    GPIO_BASE + port.index() * GPIO_STRIDE
}

impl PortHal for S32k144Ports {
    fn init_port(&mut self, port: Port, pin: u8) {
        self.pcc.port[port.index()].modify(PCCn::CGC::SET);
        self.ports[port.index()].pcr[pin as usize].modify(PCR::MUX::Gpio);
    }

    fn set_direction(&mut self, port: Port, pin: u8, direction: Direction) {
        let pddr = &self.gpio[port.index()].pddr;
        let mask = 1u32 << pin;
        match direction {
            Direction::Output => pddr.set(pddr.get() | mask),
            Direction::Input => pddr.set(pddr.get() & !mask),
        }
    }

    fn set_pull_resistor(&mut self, port: Port, pin: u8, pull: Pull) {
        let pcr = &self.ports[port.index()].pcr[pin as usize];
        match pull {
            Pull::Up => pcr.modify(PCR::PE::SET + PCR::PS::PullUp),
            Pull::Down => pcr.modify(PCR::PE::SET + PCR::PS::PullDown),
            Pull::None => pcr.modify(PCR::PE::CLEAR),
        }
    }

    fn write_pin(&mut self, port: Port, pin: u8, level: Level) {
        let gpio = self.gpio[port.index()];
        match level {
            Level::High => gpio.psor.set(1 << pin),
            Level::Low => gpio.pcor.set(1 << pin),
        }
    }

    fn toggle_pin(&mut self, port: Port, pin: u8) {
        self.gpio[port.index()].ptor.set(1 << pin);
    }

    fn read_pin(&self, port: Port, pin: u8) -> Level {
        Level::from(self.gpio[port.index()].pdir.get() & (1 << pin) != 0)
    }
}
