//! GPIO driver interface
//!
//! [`GpioDriver`] is the pin-level interface the application talks to.
//! [`Driver`] implements it on top of any [`PortHal`]. Every operation with a
//! status decodes the [`PinId`], range-checks port and pin, and only then
//! looks at the requested mode; a bad pin always wins over a bad mode.
//!
//! `set_output`, `get_input` and `toggle_output` have no error channel.
//! Invalid pins are absorbed: writes do nothing, reads return
//! [`Level::Low`]. The absorption is logged at `warn` level.

use heapless::Vec;

use crate::error::{GpioError, Result};
use crate::hal::PortHal;
use crate::pin::{Direction, EventTrigger, Level, OutputMode, PinId, Pull};

/// Maximum number of pins with a registered event callback.
pub const MAX_CALLBACKS: usize = 8;

/// Pin event delivered to a [`SignalEvent`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    RisingEdge,
    FallingEdge,
    EitherEdge,
}

/// Pin event callback.
pub type SignalEvent = fn(PinId, Event);

/// Pin-level GPIO driver interface.
pub trait GpioDriver {
    /// Initialize `pin` (clock gate and GPIO mux) and optionally register
    /// an event callback for it.
    ///
    /// # Errors
    ///
    /// `GpioError::Pin` if the pin is out of range or no callback slot is
    /// left. A missing callback is never an error.
    fn setup(&mut self, pin: PinId, callback: Option<SignalEvent>) -> Result<()>;

    /// Configure `pin` as input or output.
    fn set_direction(&mut self, pin: PinId, direction: Direction) -> Result<()>;

    /// Select push-pull or open-drain output.
    ///
    /// Accepted for a valid pin but has no register effect.
    fn set_output_mode(&mut self, pin: PinId, mode: OutputMode) -> Result<()>;

    /// Configure the internal pull resistor.
    fn set_pull_resistor(&mut self, pin: PinId, pull: Pull) -> Result<()>;

    /// Select the edge that raises an event.
    ///
    /// Accepted for a valid pin but has no register effect, pin interrupts
    /// are never enabled.
    fn set_event_trigger(&mut self, pin: PinId, trigger: EventTrigger) -> Result<()>;

    /// Drive `pin` to `level`. No-op on an invalid pin.
    fn set_output(&mut self, pin: PinId, level: Level);

    /// Read the input level of `pin`. `Level::Low` on an invalid pin.
    fn get_input(&self, pin: PinId) -> Level;

    /// Invert the output of `pin`. No-op on an invalid pin.
    fn toggle_output(&mut self, pin: PinId);
}

/// Driver bound to a register layer.
pub struct Driver<H: PortHal> {
    hal: H,
    callbacks: Vec<(PinId, SignalEvent), MAX_CALLBACKS>,
}

impl<H: PortHal> Driver<H> {
    pub fn new(hal: H) -> Self {
        Self {
            hal,
            callbacks: Vec::new(),
        }
    }

    /// Callback registered for `pin`, if any.
    pub fn callback(&self, pin: PinId) -> Option<SignalEvent> {
        self.callbacks
            .iter()
            .find(|(registered, _)| *registered == pin)
            .map(|(_, callback)| *callback)
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    pub fn into_inner(self) -> H {
        self.hal
    }

    fn register_callback(&mut self, pin: PinId, callback: SignalEvent) -> Result<()> {
        if let Some(slot) = self.callbacks.iter_mut().find(|(registered, _)| *registered == pin) {
            slot.1 = callback;
            return Ok(());
        }
        self.callbacks.push((pin, callback)).map_err(|_| {
            warn!("gpio: callback table full, pin {=u32:#x}", pin.raw());
            GpioError::Pin
        })
    }
}

fn locate(pin: PinId) -> Result<(crate::pin::Port, u8)> {
    pin.locate().inspect_err(|_| {
        warn!("gpio: pin {=u32:#x} out of range", pin.raw());
    })
}

impl<H: PortHal> GpioDriver for Driver<H> {
    fn setup(&mut self, pin: PinId, callback: Option<SignalEvent>) -> Result<()> {
        let (port, index) = locate(pin)?;
        // Claim the callback slot before any register write.
        if let Some(callback) = callback {
            self.register_callback(pin, callback)?;
        }
        self.hal.init_port(port, index);
        debug!("gpio: setup {} {=u8}", port, index);
        Ok(())
    }

    fn set_direction(&mut self, pin: PinId, direction: Direction) -> Result<()> {
        let (port, index) = locate(pin)?;
        self.hal.set_direction(port, index, direction);
        Ok(())
    }

    fn set_output_mode(&mut self, pin: PinId, mode: OutputMode) -> Result<()> {
        locate(pin)?;
        trace!("gpio: output mode {} ignored", mode);
        Ok(())
    }

    fn set_pull_resistor(&mut self, pin: PinId, pull: Pull) -> Result<()> {
        let (port, index) = locate(pin)?;
        self.hal.set_pull_resistor(port, index, pull);
        Ok(())
    }

    fn set_event_trigger(&mut self, pin: PinId, trigger: EventTrigger) -> Result<()> {
        locate(pin)?;
        trace!("gpio: event trigger {} ignored", trigger);
        Ok(())
    }

    fn set_output(&mut self, pin: PinId, level: Level) {
        if let Ok((port, index)) = locate(pin) {
            self.hal.write_pin(port, index, level);
        }
    }

    fn get_input(&self, pin: PinId) -> Level {
        match locate(pin) {
            Ok((port, index)) => self.hal.read_pin(port, index),
            Err(_) => Level::Low,
        }
    }

    fn toggle_output(&mut self, pin: PinId) {
        if let Ok((port, index)) = locate(pin) {
            self.hal.toggle_pin(port, index);
        }
    }
}

/// Status-code entry points taking raw pin identifiers and raw mode
/// enumerants, for callers that speak the CMSIS-style numeric contract.
///
/// Each call decodes and range-checks the pin before it decodes the mode.
pub mod status {
    use super::{GpioDriver, SignalEvent};
    use crate::error::{Result, StatusCode};
    use crate::pin::{Direction, EventTrigger, Level, OutputMode, PinId, Pull};

    fn checked<T: TryFrom<u32, Error = crate::GpioError>>(pin: u32, mode: u32) -> Result<(PinId, T)> {
        let pin = PinId::from_raw(pin);
        pin.locate()?;
        Ok((pin, T::try_from(mode)?))
    }

    pub fn setup<D: GpioDriver + ?Sized>(driver: &mut D, pin: u32, callback: Option<SignalEvent>) -> StatusCode {
        driver.setup(PinId::from_raw(pin), callback).into()
    }

    pub fn set_direction<D: GpioDriver + ?Sized>(driver: &mut D, pin: u32, direction: u32) -> StatusCode {
        checked::<Direction>(pin, direction)
            .and_then(|(pin, direction)| driver.set_direction(pin, direction))
            .into()
    }

    pub fn set_output_mode<D: GpioDriver + ?Sized>(driver: &mut D, pin: u32, mode: u32) -> StatusCode {
        checked::<OutputMode>(pin, mode)
            .and_then(|(pin, mode)| driver.set_output_mode(pin, mode))
            .into()
    }

    pub fn set_pull_resistor<D: GpioDriver + ?Sized>(driver: &mut D, pin: u32, pull: u32) -> StatusCode {
        checked::<Pull>(pin, pull)
            .and_then(|(pin, pull)| driver.set_pull_resistor(pin, pull))
            .into()
    }

    pub fn set_event_trigger<D: GpioDriver + ?Sized>(driver: &mut D, pin: u32, trigger: u32) -> StatusCode {
        checked::<EventTrigger>(pin, trigger)
            .and_then(|(pin, trigger)| driver.set_event_trigger(pin, trigger))
            .into()
    }

    /// Values other than 0 and 1 are ignored.
    pub fn set_output<D: GpioDriver + ?Sized>(driver: &mut D, pin: u32, value: u32) {
        if let Ok(level) = Level::try_from(value) {
            driver.set_output(PinId::from_raw(pin), level);
        }
    }

    pub fn get_input<D: GpioDriver + ?Sized>(driver: &D, pin: u32) -> u32 {
        driver.get_input(PinId::from_raw(pin)).as_u32()
    }
}
