//! Monopage Hardware Abstraction Layer
//!
//! This crate defines the bus contract the display driver is written
//! against. Chip-specific HALs plug in either by implementing
//! [`I2cBus`] directly or through the [`HalI2c`] adapter over any
//! `embedded_hal::i2c::I2c` master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (demo firmware, etc.)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monopage (SSD1306 driver)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monopage-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal I2C (embassy-stm32, ...)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key types at crate root for convenience
pub use i2c::{DeviceAddress, HalI2c, I2cBus, I2cBusError, I2cConfig};
