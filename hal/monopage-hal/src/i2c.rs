//! I2C bus abstractions
//!
//! The display controller is write-only from the driver's point of view:
//! every transaction is an addressed byte-sequence write, plus an
//! ack-only probe used to check that a device answers at an address.

use embedded_hal::i2c::{Error as _, ErrorKind, NoAcknowledgeSource};

/// 7-bit I2C device address
///
/// Transports following the embedded-hal convention take the 7-bit form.
/// The wire form (address shifted left by one, R/W bit clear) is
/// available through [`DeviceAddress::eight_bit`] for transports that
/// expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// Default SSD1306 address (SA0 low)
    pub const SSD1306_PRIMARY: Self = Self(0x3C);

    /// Alternate SSD1306 address (SA0 high)
    pub const SSD1306_SECONDARY: Self = Self(0x3D);

    /// Create an address, rejecting values that do not fit in 7 bits
    pub const fn new(address: u8) -> Option<Self> {
        if address > 0x7F {
            None
        } else {
            Some(Self(address))
        }
    }

    /// The 7-bit address
    pub const fn seven_bit(self) -> u8 {
        self.0
    }

    /// The 8-bit write address as it appears on the wire
    pub const fn eight_bit(self) -> u8 {
        self.0 << 1
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::SSD1306_PRIMARY
    }
}

/// I2C bus master
///
/// Every call is a blocking transaction that returns only once the bus
/// is released. Implementations must not retry on their own; errors are
/// handed back to the caller unchanged.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Check whether a device acknowledges its address
    ///
    /// Returns `Ok(())` on acknowledge. Any error is the transport's own
    /// status, not translated.
    fn probe(&mut self, address: u8) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        (**self).probe(address)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), what the SSD1306 is normally run at
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}

/// Coarse classification of bus failures, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Address byte not acknowledged
    AddressNack,
    /// Data byte not acknowledged
    DataNack,
    /// NACK of unknown origin
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => I2cBusError::AddressNack,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => I2cBusError::DataNack,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// [`I2cBus`] over any blocking embedded-hal I2C master
///
/// Chip HALs (embassy-stm32, embassy-rp, esp-hal, ...) all implement
/// `embedded_hal::i2c::I2c`, so this is the usual way to hand a real bus
/// to the display driver.
pub struct HalI2c<T> {
    inner: T,
}

impl<T> HalI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Wrap an embedded-hal I2C master
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Classify a bus error for logging
    pub fn classify(error: &T::Error) -> I2cBusError {
        error.kind().into()
    }

    /// Give back the wrapped bus
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T> I2cBus for HalI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        // A lone control byte is harmless to the controller and forces an
        // address phase, so the result is the address ACK.
        self.inner.write(address, &[0x00])
    }
}
