//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_BRIGHTNESS, MAX_DIGITS};

/// Display configuration
///
/// This struct holds the construction-time parameters of the display.
/// Use `Builder` to create a Config; both fields are fixed for the lifetime
/// of the [`Display`](crate::display::Display) that owns them (brightness
/// here is only the initial level, changed later via
/// [`set_intensity`](crate::display::Display::set_intensity)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of digit positions, 1 to [`MAX_DIGITS`]
    pub digit_count: u8,
    /// Initial brightness level, 0 to [`MAX_BRIGHTNESS`]
    pub brightness: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use tm1637::Builder;
///
/// let config = match Builder::new().digit_count(4).brightness(7).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.digit_count, 4);
/// ```
#[must_use]
pub struct Builder {
    /// Number of digit positions
    digit_count: u8,
    /// Initial brightness level
    brightness: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // Common 4-digit module
            digit_count: MAX_DIGITS as u8,
            // Full brightness
            brightness: MAX_BRIGHTNESS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of digit positions (1 to [`MAX_DIGITS`])
    ///
    /// Validated when the configuration is built.
    pub fn digit_count(mut self, count: u8) -> Self {
        self.digit_count = count;
        self
    }

    /// Set the initial brightness level
    ///
    /// Values above [`MAX_BRIGHTNESS`] are clamped rather than rejected.
    pub fn brightness(mut self, level: u8) -> Self {
        self.brightness = level;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDigitCount` if the digit count is zero
    /// or greater than [`MAX_DIGITS`].
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.digit_count == 0 || self.digit_count as usize > MAX_DIGITS {
            return Err(BuilderError::InvalidDigitCount {
                requested: self.digit_count,
            });
        }
        Ok(Config {
            digit_count: self.digit_count,
            brightness: self.brightness.min(MAX_BRIGHTNESS),
        })
    }
}
