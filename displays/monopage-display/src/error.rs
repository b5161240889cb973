//! Driver errors

/// Errors returned by display operations
///
/// `E` is the bus error type. Bus errors are passed through as-is: the
/// driver never retries, and a failed operation leaves the controller in
/// whatever state the bytes already sent put it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed
    Bus(E),
    /// Cursor or block position outside the display
    OutOfBounds {
        /// Requested column
        column: u16,
        /// Requested page
        page: u16,
    },
    /// Character has no glyph in the font
    UnsupportedCharacter(char),
    /// Drawing attempted before `initialize()` succeeded
    NotInitialized,
}

impl<E> Error<E> {
    /// Returns true if the error came from the bus
    pub fn is_bus(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}
