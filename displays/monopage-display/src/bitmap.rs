//! Fixed demonstration bitmap
//!
//! A 5x5 grid of 8x8 cells (a QR-code-like pattern). Each cell is eight
//! column bytes for one page, stored row by row: cell `(col, row)` is
//! `QR_PATTERN[col + QR_CELLS * row]`.

/// Cells per side of the grid
pub const QR_CELLS: usize = 5;

/// Width of a cell in columns
pub const CELL_WIDTH: usize = 8;

/// Pattern data
pub static QR_PATTERN: [[u8; CELL_WIDTH]; QR_CELLS * QR_CELLS] = [
    [
        0b01111111,
        0b01000001,
        0b01011101,
        0b01011101,
        0b01011101,
        0b01000001,
        0b01111111,
        0b00000000,
    ],
    [
        0b11010101,
        0b10111101,
        0b11100111,
        0b00001101,
        0b11100110,
        0b00011010,
        0b01000011,
        0b10110010,
    ],
    [
        0b01010000,
        0b00100101,
        0b01101000,
        0b10110010,
        0b01100100,
        0b10010010,
        0b11000111,
        0b10110110,
    ],
    [
        0b11101000,
        0b00001000,
        0b11000101,
        0b10001100,
        0b11101111,
        0b00000000,
        0b01111111,
        0b01000001,
    ],
    [
        0b01011101,
        0b01011101,
        0b01011101,
        0b01000001,
        0b01111111,
        0b00000000,
        0b00000000,
        0b00000000,
    ],
    [
        0b11010110,
        0b01100100,
        0b10100110,
        0b00001000,
        0b10001100,
        0b10100001,
        0b01010101,
        0b01101000,
    ],
    [
        0b00110010,
        0b11000111,
        0b00110000,
        0b01000101,
        0b11101000,
        0b11010010,
        0b00011111,
        0b01010111,
    ],
    [
        0b00011001,
        0b01010110,
        0b11110000,
        0b00110011,
        0b11111001,
        0b00100001,
        0b01000111,
        0b01100100,
    ],
    [
        0b00001011,
        0b01100110,
        0b01001100,
        0b01101000,
        0b00111000,
        0b01100010,
        0b00011111,
        0b11110100,
    ],
    [
        0b01000011,
        0b11011010,
        0b10100011,
        0b01011110,
        0b11010101,
        0b00000000,
        0b00000000,
        0b00000000,
    ],
    [
        0b10111001,
        0b11100110,
        0b01111010,
        0b10101110,
        0b10100100,
        0b10110111,
        0b01010101,
        0b01000101,
    ],
    [
        0b00010000,
        0b01001100,
        0b10011100,
        0b11111111,
        0b00111101,
        0b00100110,
        0b11001111,
        0b10100010,
    ],
    [
        0b10011101,
        0b01111101,
        0b00100101,
        0b00100000,
        0b11001100,
        0b10001100,
        0b00111100,
        0b10000111,
    ],
    [
        0b00100000,
        0b11110001,
        0b01011101,
        0b11101111,
        0b00101010,
        0b01010101,
        0b00010101,
        0b10110100,
    ],
    [
        0b00110001,
        0b11101100,
        0b00110111,
        0b01101001,
        0b11010101,
        0b00000000,
        0b00000000,
        0b00000000,
    ],
    [
        0b11000001,
        0b01011101,
        0b01001110,
        0b01011100,
        0b01001101,
        0b01010010,
        0b11010101,
        0b00000001,
    ],
    [
        0b10110011,
        0b01110111,
        0b11001010,
        0b10101110,
        0b01111101,
        0b01110000,
        0b10110111,
        0b00110010,
    ],
    [
        0b11110001,
        0b00110001,
        0b10110110,
        0b10010011,
        0b11101010,
        0b01010011,
        0b11001101,
        0b11111101,
    ],
    [
        0b10010101,
        0b00110101,
        0b00010100,
        0b10110100,
        0b11111100,
        0b00011000,
        0b01010110,
        0b00011011,
    ],
    [
        0b11110111,
        0b11110100,
        0b01001100,
        0b10110100,
        0b11000100,
        0b00000000,
        0b00000000,
        0b00000000,
    ],
    [
        0b00011111,
        0b00010000,
        0b00010111,
        0b00010111,
        0b00010111,
        0b00010000,
        0b00011111,
        0b00000000,
    ],
    [
        0b00000000,
        0b00000101,
        0b00011010,
        0b00011111,
        0b00000100,
        0b00001100,
        0b00000011,
        0b00010000,
    ],
    [
        0b00010000,
        0b00010011,
        0b00000001,
        0b00011100,
        0b00001001,
        0b00011101,
        0b00001111,
        0b00010000,
    ],
    [
        0b00011010,
        0b00000101,
        0b00001011,
        0b00000011,
        0b00011101,
        0b00000101,
        0b00001011,
        0b00010101,
    ],
    [
        0b00011001,
        0b00011010,
        0b00000011,
        0b00000000,
        0b00011100,
        0b00000000,
        0b00000000,
        0b00000000,
    ],
];

/// Cell at grid position `(col, row)`
pub fn cell(col: usize, row: usize) -> Option<&'static [u8; CELL_WIDTH]> {
    if col < QR_CELLS && row < QR_CELLS {
        Some(&QR_PATTERN[col + QR_CELLS * row])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup() {
        assert_eq!(
            cell(0, 0),
            Some(&[0x7F, 0x41, 0x5D, 0x5D, 0x5D, 0x41, 0x7F, 0x00])
        );
        assert_eq!(cell(4, 4).map(|c| c[7]), Some(0x00));
        assert!(cell(5, 0).is_none());
        assert!(cell(0, 5).is_none());
    }
}
