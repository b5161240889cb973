//! Monopage: SSD1306 OLED driver over I2C
//!
//! This crate provides:
//! - `Channel`: command/data framing, one two-byte transaction per byte
//! - `Ssd1306`: power-up sequence, page/column cursor, fill, glyph, text
//!   and bitmap drawing
//! - `FrameBuffer`: an opt-in shadow buffer for read-modify-write drawing
//! - The 5x8 font and the fixed QR demo pattern as static tables
//!
//! # Architecture
//!
//! The driver is written against `monopage_hal::I2cBus`, so the same code
//! runs on any chip HAL and against a recording mock in host tests. All
//! operations block until their bus transactions complete; share a driver
//! across tasks only behind a mutex.
//!
//! ## Display RAM
//!
//! 128 columns by 8 pages. Each data byte is one column of one page, LSB
//! at the top. The controller auto-increments the column after every
//! data byte; the driver does not mirror that pointer.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bitmap;
pub mod channel;
pub mod command;
pub mod config;
pub mod demo;
pub mod driver;
pub mod error;
pub mod font;
pub mod framebuffer;

#[cfg(test)]
mod mock;

// Re-export key types
pub use channel::Channel;
pub use config::{DisplayConfig, GlyphFallback};
pub use driver::{DriverState, Ssd1306, HEIGHT, PAGES, WIDTH};
pub use error::Error;
pub use framebuffer::FrameBuffer;
pub use monopage_hal::{DeviceAddress, I2cBus};
