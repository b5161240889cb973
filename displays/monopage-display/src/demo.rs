//! Demo screen
//!
//! Smoke test for a freshly wired panel: a few labels in the corners,
//! one of them highlighted, and the QR pattern on the right.

use monopage_hal::I2cBus;

use crate::driver::Ssd1306;
use crate::error::Error;

/// A label on the demo screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    pub column: u8,
    pub page: u8,
    pub invert: bool,
}

/// Labels drawn by [`render_demo`]
pub const DEMO_LABELS: [Label; 5] = [
    Label { text: "PAGE 1", column: 80, page: 0, invert: true },
    Label { text: "COPYRIGHT", column: 0, page: 0, invert: false },
    Label { text: "SSD1306", column: 10, page: 6, invert: false },
    Label { text: "128x64", column: 30, page: 7, invert: false },
    Label { text: "git", column: 100, page: 7, invert: false },
];

/// Top-left cell of the QR pattern on the demo screen
pub const DEMO_QR_ORIGIN: (u8, u8) = (90, 2);

/// Probe the controller, then draw the demo screen
///
/// The probe comes first so a missing panel fails fast with the bus
/// status instead of a string of NACKed writes. The display must have
/// been initialized.
pub fn render_demo<B>(display: &mut Ssd1306<B>) -> Result<(), Error<B::Error>>
where
    B: I2cBus,
{
    display.probe().map_err(Error::Bus)?;

    for label in DEMO_LABELS.iter() {
        display.draw_text(label.text, label.column, label.page, label.invert)?;
    }

    let (column, page) = DEMO_QR_ORIGIN;
    display.draw_bitmap(column, page)
}
