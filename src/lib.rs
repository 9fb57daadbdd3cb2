//! TM1637 LED Display Driver
//!
//! A driver for the TM1637 7-segment LED controller as found on the common
//! 4-digit display modules, driven over its proprietary two-wire bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Bit-banged two-wire transport over any two `OutputPin`s
//! - Per-digit segment masks, dot points, and brightness control
//! - Decimal and hexadecimal number rendering with blanking or leading zeros
//! - `0b…`/`0x…` text literal input with on-display error rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use tm1637::{Builder, Display, Interface};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let clk = MockPin;
//! # let dio = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(clk, dio);
//! let config = match Builder::new().digit_count(4).brightness(7).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//! let _ = display.show_number(-42, &mut delay);
//! let _ = display.set_dot_point(1, true, &mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// TM1637 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Text literal parsing
pub mod parse;
/// Segment glyph encoding
pub mod segments;

pub use config::{Builder, Config, MAX_BRIGHTNESS, MAX_DIGITS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DEFAULT_BIT_DELAY_US, DisplayInterface, Interface};
pub use segments::Segments;
