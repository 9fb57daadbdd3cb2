//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the TM1637 controller over its proprietary two-wire bus.
//!
//! ## Hardware Requirements
//!
//! The TM1637 requires 2 GPIO pins:
//! - **CLK**: Clock line (output)
//! - **DIO**: Data line (output)
//!
//! The bus resembles I2C in its start/stop framing but is not I2C: there is
//! no slave address, bytes are shifted LSB-first, and the acknowledge slot is
//! driven blind; the controller never reads the line back. All pacing uses a
//! fixed inter-edge delay, 10 µs by default.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use tm1637::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Create interface with CLK and DIO pins
//! let mut interface = Interface::new(MockPin, MockPin);
//!
//! // One framed transaction: data command 0x40
//! let _ = interface.start(&mut delay);
//! let _ = interface.write_byte(0x40, &mut delay);
//! let _ = interface.stop(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::trace;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the TM1637 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., an open-drain bus shared with other devices),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive both lines to the idle-low state
    ///
    /// The implementation must:
    /// 1. Set CLK low
    /// 2. Wait one bit delay
    /// 3. Set DIO low
    ///
    /// Called once before the first transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Signal a start condition, claiming the bus
    ///
    /// The implementation must:
    /// 1. Set DIO low
    /// 2. Set CLK low
    /// 3. Wait one bit delay
    ///
    /// Both lines are left low.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn start<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Signal a stop condition, releasing the bus
    ///
    /// The implementation must:
    /// 1. Set DIO low
    /// 2. Set CLK high
    /// 3. Wait one bit delay
    /// 4. Set DIO high
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn stop<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Shift one byte onto the bus, LSB first
    ///
    /// For each bit the implementation must drive DIO to the bit value,
    /// pulse CLK high then low with one bit delay after each edge, then
    /// issue one extra CLK pulse pair for the controller's acknowledge
    /// slot. Nothing is read back; a non-responsive chip is undetectable
    /// at this layer.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn write_byte<D: DelayNs>(&mut self, byte: u8, delay: &mut D)
    -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the GPIO error type, with the failing line identified.
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// Clock line (CLK) error
    Clock(PinErr),
    /// Data line (DIO) error
    Data(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Clock(e) => write!(f, "Clock line error: {e:?}"),
            Self::Data(e) => write!(f, "Data line error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Default inter-edge delay in microseconds
pub const DEFAULT_BIT_DELAY_US: u32 = 10;

/// Bit-banged two-wire interface for the TM1637
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 GPIO traits.
///
/// ## Type Parameters
///
/// * `CLK` - Clock pin implementing [`OutputPin`]
/// * `DIO` - Data pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use tm1637::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     MockPin, // CLK
///     MockPin, // DIO
/// );
///
/// // Use with Display
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<CLK, DIO> {
    /// Clock line
    clk: CLK,
    /// Data line
    dio: DIO,
    /// Inter-edge delay in microseconds
    bit_delay_us: u32,
}

impl<CLK, DIO> Interface<CLK, DIO>
where
    CLK: OutputPin,
    DIO: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `clk` - Clock pin (output)
    /// * `dio` - Data pin (output)
    pub fn new(clk: CLK, dio: DIO) -> Self {
        Self {
            clk,
            dio,
            bit_delay_us: DEFAULT_BIT_DELAY_US,
        }
    }

    /// Set the inter-edge delay in microseconds
    ///
    /// Default is 10 µs. Longer delays help with long wires or weak pull-ups.
    pub fn set_bit_delay_us(&mut self, delay_us: u32) -> &mut Self {
        self.bit_delay_us = delay_us;
        self
    }

    /// Get the current inter-edge delay in microseconds
    pub fn bit_delay_us(&self) -> u32 {
        self.bit_delay_us
    }
}

impl<CLK, DIO, PinErr> DisplayInterface for Interface<CLK, DIO>
where
    CLK: OutputPin<Error = PinErr>,
    DIO: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.clk.set_low().map_err(InterfaceError::Clock)?;
        delay.delay_us(self.bit_delay_us);
        self.dio.set_low().map_err(InterfaceError::Data)?;
        Ok(())
    }

    fn start<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.dio.set_low().map_err(InterfaceError::Data)?;
        self.clk.set_low().map_err(InterfaceError::Clock)?;
        delay.delay_us(self.bit_delay_us);
        Ok(())
    }

    fn stop<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.dio.set_low().map_err(InterfaceError::Data)?;
        self.clk.set_high().map_err(InterfaceError::Clock)?;
        delay.delay_us(self.bit_delay_us);
        self.dio.set_high().map_err(InterfaceError::Data)?;
        Ok(())
    }

    fn write_byte<D: DelayNs>(
        &mut self,
        byte: u8,
        delay: &mut D,
    ) -> InterfaceResult<(), Self::Error> {
        trace!("shift byte {:#04x}", byte);
        for i in 0..8 {
            if (byte >> i) & 1 == 1 {
                self.dio.set_high().map_err(InterfaceError::Data)?;
            } else {
                self.dio.set_low().map_err(InterfaceError::Data)?;
            }
            self.clk.set_high().map_err(InterfaceError::Clock)?;
            delay.delay_us(self.bit_delay_us);
            self.clk.set_low().map_err(InterfaceError::Clock)?;
            delay.delay_us(self.bit_delay_us);
        }

        // Acknowledge slot: one blind clock pulse, nothing sampled
        self.clk.set_high().map_err(InterfaceError::Clock)?;
        delay.delay_us(self.bit_delay_us);
        self.clk.set_low().map_err(InterfaceError::Clock)?;
        delay.delay_us(self.bit_delay_us);

        Ok(())
    }
}
