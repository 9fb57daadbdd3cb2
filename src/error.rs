//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Note that malformed text input and out-of-range numeric input are *not*
//! errors at runtime: text-parse failures render the on-display error pattern,
//! and numeric inputs (digit values, positions, brightness) are normalized by
//! modulo wrapping or clamping. See [`crate::display::Display`].
//!
//! ## Example
//!
//! ```
//! use tm1637::{Builder, BuilderError};
//!
//! // Digit count outside the supported range
//! let result = Builder::new().digit_count(9).build();
//! assert!(matches!(
//!     result,
//!     Err(BuilderError::InvalidDigitCount { requested: 9 })
//! ));
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of digit positions supported by the driver
///
/// The TM1637 drives up to four 7-segment digit cells in the common
/// 4-digit module wiring this driver targets.
pub const MAX_DIGITS: usize = 4;

/// Maximum brightness level accepted by the display-control command
///
/// The TM1637 encodes brightness in the low 3 bits of the display-control
/// command, giving levels 0 through 7.
pub const MAX_BRIGHTNESS: u8 = 7;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
///
/// The bus is write-only: a non-responsive chip cannot be detected, so the
/// only runtime failure class is a GPIO error raised by the pin implementation.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Digit count outside the supported range
    ///
    /// See [`Builder::digit_count()`](crate::config::Builder::digit_count) for constraints.
    InvalidDigitCount {
        /// Number of digit positions requested
        requested: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDigitCount { requested } => write!(
                f,
                "Invalid digit count {requested} (must be 1 to {MAX_DIGITS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
