//! Shadow frame buffer
//!
//! Optional in-memory copy of display RAM for read-modify-write drawing.
//! The driver itself never keeps one. Contents reflect what was drawn
//! here, not what the panel shows: after a failed flush they may differ.

use monopage_hal::I2cBus;

use crate::bitmap::{self, CELL_WIDTH, QR_CELLS};
use crate::driver::{glyph_cell, Ssd1306, GLYPH_CELL_WIDTH, PAGES, WIDTH};
use crate::error::Error;
use crate::font;

/// Page-organized frame buffer (1 bit per pixel)
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame buffer
    ///
    /// Characters outside the font are drawn as blanks.
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set every pixel
    pub fn fill(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0xFF);
        }
    }

    /// Column bytes of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// Draw text at `column`, `page`, clipped at the right edge
    ///
    /// Returns the number of characters drawn. Unlike the unbuffered
    /// path, text does not wrap to the next page.
    pub fn draw_text(&mut self, text: &str, column: usize, page: usize, invert: bool) -> usize {
        if page >= PAGES || column >= WIDTH {
            return 0;
        }

        let row = &mut self.pages[page];
        let mut x = column;
        let mut drawn = 0;

        for ch in text.chars() {
            if x + GLYPH_CELL_WIDTH > WIDTH {
                break;
            }

            let glyph = font::glyph(ch).unwrap_or(&font::FONT_5X8[0]);
            row[x..x + GLYPH_CELL_WIDTH].copy_from_slice(&glyph_cell(glyph, invert));
            x += GLYPH_CELL_WIDTH;
            drawn += 1;
        }

        drawn
    }

    /// Copy column bytes into `page` starting at `column`, clipped
    pub fn draw_block(&mut self, column: usize, page: usize, bytes: &[u8]) {
        if page >= PAGES || column >= WIDTH {
            return;
        }
        let len = bytes.len().min(WIDTH - column);
        self.pages[page][column..column + len].copy_from_slice(&bytes[..len]);
    }

    /// Draw the QR pattern with its top-left cell at `column`, `page`
    ///
    /// Cells that fall off the buffer are skipped.
    pub fn draw_bitmap(&mut self, column: usize, page: usize) {
        for row in 0..QR_CELLS {
            for col in 0..QR_CELLS {
                let origin = column
                    .checked_add(col * CELL_WIDTH)
                    .zip(page.checked_add(row));
                if let (Some((x, y)), Some(cell)) = (origin, bitmap::cell(col, row)) {
                    self.draw_block(x, y, cell);
                }
            }
        }
    }

    /// Invert columns `start..end` of a page (for selection highlighting)
    pub fn invert_region(&mut self, page: usize, start: usize, end: usize) {
        if page >= PAGES {
            return;
        }

        let end = end.min(WIDTH);
        if start >= end {
            return;
        }
        for byte in &mut self.pages[page][start..end] {
            *byte ^= 0xFF;
        }
    }

    /// Send the whole buffer to the display, one page at a time
    pub fn flush<B>(&self, display: &mut Ssd1306<B>) -> Result<(), Error<B::Error>>
    where
        B: I2cBus,
    {
        for (page, bytes) in self.pages.iter().enumerate() {
            display.draw_block(0, page as u8, bytes)?;
        }
        Ok(())
    }
}
