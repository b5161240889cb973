//! SSD1306 command set and the power-up sequence

/// Control byte: the next byte is a command
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: the next byte is display RAM data
pub const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
}

/// Number of bytes in the init sequence
pub const INIT_LEN: usize = 25;

/// Build the controller power-up sequence
///
/// The order is fixed by the controller: the charge pump has to be
/// running before the panel is switched on, and the panel stays off
/// while geometry is configured. Only the contrast operand varies.
pub const fn init_sequence(contrast: u8) -> [u8; INIT_LEN] {
    [
        cmd::DISPLAY_OFF,
        cmd::SET_CLOCK_DIV,
        0x80, // Default clock
        cmd::SET_MUX_RATIO,
        0x3F, // 64 lines
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_START_LINE | 0x00,
        cmd::SET_CHARGE_PUMP,
        0x14, // Enable charge pump
        cmd::SET_MEMORY_MODE,
        0x00,                  // Horizontal addressing
        cmd::SET_SEG_REMAP,    // Flip horizontally
        cmd::SET_COM_SCAN_DEC, // Flip vertically
        cmd::SET_COM_PINS,
        0x12, // Alternative COM config
        cmd::SET_CONTRAST,
        contrast,
        cmd::SET_PRECHARGE,
        0xF1,
        cmd::SET_VCOM_DETECT,
        0x40,
        cmd::DISPLAY_RESUME,
        cmd::SET_NORMAL,
        cmd::DISPLAY_ON,
    ]
}

/// Commands that move the cursor to `(column, page)`
///
/// Values are masked to the field widths; range checks belong to the
/// caller.
pub const fn cursor_commands(column: u8, page: u8) -> [u8; 3] {
    [
        cmd::SET_PAGE_ADDR + (page & 0x07),
        cmd::SET_LOW_COLUMN + (column & 0x0F),
        cmd::SET_HIGH_COLUMN + ((column >> 4) & 0x0F),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_init_sequence() {
        let expected = [
            0xAE, 0xD5, 0x80, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1, 0xC8,
            0xDA, 0x12, 0x81, 0xCF, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
        ];
        assert_eq!(init_sequence(0xCF), expected);
    }

    #[test]
    fn test_init_order_constraints() {
        let seq = init_sequence(0xCF);
        let pos = |c: u8| seq.iter().position(|&b| b == c).unwrap();

        assert_eq!(seq[0], cmd::DISPLAY_OFF);
        assert_eq!(seq[INIT_LEN - 1], cmd::DISPLAY_ON);
        assert!(pos(cmd::SET_CHARGE_PUMP) < pos(cmd::DISPLAY_ON));
    }

    #[test]
    fn test_contrast_operand() {
        let seq = init_sequence(0x10);
        assert_eq!(seq[16], cmd::SET_CONTRAST);
        assert_eq!(seq[17], 0x10);
    }

    #[test]
    fn test_cursor_commands() {
        assert_eq!(cursor_commands(0, 0), [0xB0, 0x00, 0x10]);
        assert_eq!(cursor_commands(90, 2), [0xB2, 0x0A, 0x15]);
        assert_eq!(cursor_commands(127, 7), [0xB7, 0x0F, 0x17]);
    }
}
