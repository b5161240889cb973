//! Command/data channel
//!
//! Every byte goes out as its own two-byte transaction: a control byte
//! telling the controller how to treat the payload, then the payload.

use monopage_hal::{DeviceAddress, I2cBus};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

/// Addressed command/data channel to one controller
pub struct Channel<B> {
    bus: B,
    address: DeviceAddress,
}

impl<B> Channel<B>
where
    B: I2cBus,
{
    /// Create a channel to the controller at `address`
    pub fn new(bus: B, address: DeviceAddress) -> Self {
        Self { bus, address }
    }

    /// Controller address
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Send one controller command byte
    pub fn send_command(&mut self, command: u8) -> Result<(), B::Error> {
        let result = self
            .bus
            .write(self.address.seven_bit(), &[CONTROL_COMMAND, command]);
        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 command {=u8:#x} failed", command);
        }
        result
    }

    /// Send one display RAM byte at the current cursor
    ///
    /// The controller advances its column pointer after each data byte.
    pub fn send_data(&mut self, data: u8) -> Result<(), B::Error> {
        let result = self
            .bus
            .write(self.address.seven_bit(), &[CONTROL_DATA, data]);
        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 data write failed");
        }
        result
    }

    /// Check that the controller acknowledges its address
    pub fn probe(&mut self) -> Result<(), B::Error> {
        self.bus.probe(self.address.seven_bit())
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }
}
