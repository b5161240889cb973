//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Nothing is
//! buffered: each call becomes blocking bus transactions straight away,
//! and pixel contents live only in the controller's RAM.
//!
//! # Addressing
//!
//! Display RAM is 8 pages of 128 columns; a page is 8 pixels tall and a
//! column byte holds those 8 pixels, LSB at the top. The controller
//! advances the column after every data byte and moves on to the next
//! page at the end of a row. That advance is not tracked here.

use monopage_hal::I2cBus;

use crate::bitmap::{self, CELL_WIDTH, QR_CELLS};
use crate::channel::Channel;
use crate::command::{cursor_commands, init_sequence};
use crate::config::DisplayConfig;
use crate::error::Error;
use crate::font::{self, GLYPH_WIDTH};

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Bytes of display RAM
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Columns taken by one rendered glyph (margin, glyph, margin)
pub const GLYPH_CELL_WIDTH: usize = GLYPH_WIDTH + 2;

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Controller not configured yet
    Uninitialized,
    /// Init sequence completed, drawing allowed
    Ready,
}

/// Render a glyph into the seven column bytes sent for it
///
/// Inverted glyphs are punched out of a solid background, which is how
/// a selected item is shown.
pub fn glyph_cell(columns: &[u8; GLYPH_WIDTH], invert: bool) -> [u8; GLYPH_CELL_WIDTH] {
    let margin = if invert { 0xFF } else { 0x00 };
    let mut cell = [margin; GLYPH_CELL_WIDTH];
    for (dst, &col) in cell[1..=GLYPH_WIDTH].iter_mut().zip(columns) {
        *dst = if invert { !col } else { col };
    }
    cell
}

/// SSD1306 OLED driver
pub struct Ssd1306<B> {
    channel: Channel<B>,
    config: DisplayConfig,
    state: DriverState,
}

impl<B> Ssd1306<B>
where
    B: I2cBus,
{
    /// Create a new SSD1306 driver
    ///
    /// No bus traffic happens until [`Ssd1306::initialize`] or
    /// [`Ssd1306::probe`].
    pub fn new(bus: B, config: DisplayConfig) -> Self {
        Self {
            channel: Channel::new(bus, config.address),
            config,
            state: DriverState::Uninitialized,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Check if the display has been initialized
    pub fn is_ready(&self) -> bool {
        self.state == DriverState::Ready
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.channel.release()
    }

    /// Check that the controller acknowledges its address
    ///
    /// The bus status is returned untouched. Allowed in any state.
    pub fn probe(&mut self) -> Result<(), B::Error> {
        self.channel.probe()
    }

    /// Send a raw controller command
    pub fn send_command(&mut self, command: u8) -> Result<(), Error<B::Error>> {
        self.channel.send_command(command).map_err(Error::Bus)
    }

    /// Send a raw display RAM byte at the current cursor
    pub fn send_data(&mut self, data: u8) -> Result<(), Error<B::Error>> {
        self.channel.send_data(data).map_err(Error::Bus)
    }

    /// Initialize the display
    ///
    /// Runs the full power-up sequence and homes the cursor to (0, 0).
    /// Safe to call again; the bytes sent are identical every time. On a
    /// bus error the driver stays in its previous state.
    pub fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        for &c in init_sequence(self.config.contrast).iter() {
            self.send_command(c)?;
        }
        self.write_cursor(0, 0)?;

        self.state = DriverState::Ready;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SSD1306 initialized at {=u8:#x}",
            self.config.address.seven_bit()
        );

        Ok(())
    }

    /// Move the cursor to `column` (0-127) on `page` (0-7)
    ///
    /// Sends page select, low column nibble, high column nibble.
    pub fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        check_position(column as usize, page as usize)?;
        self.write_cursor(column, page)
    }

    /// Blank the whole display
    ///
    /// Writes from the current cursor; call `set_cursor(0, 0)` first for
    /// full coverage.
    pub fn clear_all(&mut self) -> Result<(), Error<B::Error>> {
        self.fill_with(0x00)
    }

    /// Light every pixel
    ///
    /// Same cursor precondition as [`Ssd1306::clear_all`].
    pub fn fill_all(&mut self) -> Result<(), Error<B::Error>> {
        self.fill_with(0xFF)
    }

    /// Draw one character at the current cursor
    ///
    /// Emits 7 column bytes: margin, the 5 glyph columns, margin.
    pub fn draw_glyph(&mut self, ch: char, invert: bool) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        let columns = self.lookup(ch)?;
        self.write_glyph(columns, invert)
    }

    /// Draw a string starting at `column`, `page`
    ///
    /// The cursor is set once; the controller's auto-increment moves 7
    /// columns per character. Text running past the right edge continues
    /// on the next page. Every character is checked against the font
    /// before the first byte is sent.
    pub fn draw_text(
        &mut self,
        text: &str,
        column: u8,
        page: u8,
        invert: bool,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        check_position(column as usize, page as usize)?;
        for ch in text.chars() {
            self.lookup(ch)?;
        }

        self.write_cursor(column, page)?;
        for ch in text.chars() {
            let columns = self.lookup(ch)?;
            self.write_glyph(columns, invert)?;
        }
        Ok(())
    }

    /// Place a block of column bytes at `column`, `page`
    pub fn draw_block(
        &mut self,
        column: u8,
        page: u8,
        bytes: &[u8],
    ) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        check_position(column as usize, page as usize)?;
        self.write_cursor(column, page)?;
        self.write_bytes(bytes)
    }

    /// Draw the 40x40 pixel QR pattern with its top-left cell at
    /// `column`, `page`
    ///
    /// Each 8x8 cell gets its own cursor. Every cell origin must be on
    /// screen; this is checked before anything is sent.
    pub fn draw_bitmap(&mut self, column: u8, page: u8) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        let last = QR_CELLS - 1;
        check_position(column as usize, page as usize)?;
        check_position(column as usize + last * CELL_WIDTH, page as usize + last)?;

        for row in 0..QR_CELLS {
            for col in 0..QR_CELLS {
                if let Some(cell) = bitmap::cell(col, row) {
                    let x = column as usize + col * CELL_WIDTH;
                    let y = page as usize + row;
                    self.write_cursor(x as u8, y as u8)?;
                    self.write_bytes(cell)?;
                }
            }
        }
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), Error<B::Error>> {
        match self.state {
            DriverState::Ready => Ok(()),
            DriverState::Uninitialized => Err(Error::NotInitialized),
        }
    }

    fn lookup(&self, ch: char) -> Result<&'static [u8; GLYPH_WIDTH], Error<B::Error>> {
        font::resolve(ch, self.config.unknown_glyph).ok_or(Error::UnsupportedCharacter(ch))
    }

    fn write_cursor(&mut self, column: u8, page: u8) -> Result<(), Error<B::Error>> {
        for c in cursor_commands(column, page) {
            self.send_command(c)?;
        }
        Ok(())
    }

    fn write_glyph(
        &mut self,
        columns: &[u8; GLYPH_WIDTH],
        invert: bool,
    ) -> Result<(), Error<B::Error>> {
        self.write_bytes(&glyph_cell(columns, invert))
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        for &b in bytes {
            self.send_data(b)?;
        }
        Ok(())
    }

    fn fill_with(&mut self, value: u8) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        for _ in 0..BUFFER_SIZE {
            self.send_data(value)?;
        }
        Ok(())
    }
}

fn check_position<E>(column: usize, page: usize) -> Result<(), Error<E>> {
    if column >= WIDTH || page >= PAGES {
        return Err(Error::OutOfBounds {
            column: column as u16,
            page: page as u16,
        });
    }
    Ok(())
}
