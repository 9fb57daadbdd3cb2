//! TM1637 command definitions
//!
//! This module defines the command bytes used to control the TM1637 LED
//! driver and the helpers that compose them. Every command byte travels
//! inside its own start/stop framed transaction on the two-wire bus.
//!
//! ## Command Structure
//!
//! Updating a single digit always takes three framed transactions in order:
//! 1. Data command (write mode, auto-increment address)
//! 2. Address command OR'd with the digit address, followed by the segment byte
//! 3. Display-control command OR'd with the on bit and brightness
//!
//! The chip requires this repeated framing; the three commands cannot be
//! batched into one transaction.
//!
//! ## Example
//!
//! ```
//! use tm1637::command::{self, address_write, display_control};
//!
//! // First transaction of every write
//! assert_eq!(command::DATA_COMMAND, 0x40);
//!
//! // Address digit 2 of a 4-digit module
//! assert_eq!(address_write(2, 4), 0xC2);
//!
//! // Display on at brightness 7
//! assert_eq!(display_control(true, 7), 0x8F);
//! ```

/// Data command byte (0x40)
///
/// Selects "write data to display register" mode with automatic address
/// increment. Sent alone as the first transaction of every write sequence.
pub const DATA_COMMAND: u8 = 0x40;

/// Address command base byte (0xC0)
///
/// OR'd with the digit address (0..=5 on the chip; this driver uses 0..=3).
/// The segment data byte follows in the same transaction.
pub const ADDRESS_COMMAND: u8 = 0xC0;

/// Display-control command base byte (0x80)
///
/// OR'd with [`DISPLAY_ON`] and the brightness level. Sent alone as the
/// final transaction of every write sequence.
pub const DISPLAY_CONTROL: u8 = 0x80;

/// Display active bit for the display-control command
///
/// Set to light the panel, cleared to blank it while preserving register
/// contents on the chip.
pub const DISPLAY_ON: u8 = 0x08;

/// Mask for the brightness field of the display-control command
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// Build the address+write command byte for a digit position
///
/// The position wraps modulo `digit_count`, so out-of-range positions
/// address an existing digit rather than failing.
pub fn address_write(position: u8, digit_count: u8) -> u8 {
    ADDRESS_COMMAND | (position % digit_count)
}

/// Build the display-control command byte
///
/// Brightness is clamped into the 3-bit field. The on bit is set only when
/// `on` is true; a cleared on bit blanks the panel without touching the
/// chip's display registers.
pub fn display_control(on: bool, brightness: u8) -> u8 {
    let active = if on { DISPLAY_ON } else { 0 };
    DISPLAY_CONTROL | active | (brightness & BRIGHTNESS_MASK)
}
