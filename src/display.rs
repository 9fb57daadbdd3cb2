//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{self, DATA_COMMAND};
use crate::config::Config;
use crate::error::{Error, MAX_BRIGHTNESS, MAX_DIGITS};
use crate::interface::DisplayInterface;
use crate::parse::{parse_binary_literal, parse_hex_literal};
use crate::segments::{DOT_POINT, ERROR_PATTERN, MINUS, SEGMENT_MASK, Segments, digit_to_segments};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the TM1637
///
/// Owns the hardware interface, the construction-time configuration, and the
/// in-memory mirror of the chip's display registers. The mirror is what lets
/// [`set_dot_point`](Self::set_dot_point) toggle the dot without disturbing
/// the segment bits already on the chip, and it is updated in lock-step with
/// every chip write: no write happens without a mirror update and no mirror
/// update happens without an attempted write.
///
/// All operations are synchronous; each one runs its full sequence of framed
/// bus transactions (with blocking microsecond delays) before returning.
/// The struct performs no locking; concurrent use of one instance must be
/// serialized by the caller.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Mirror of the segment byte last written to each digit position
    buffer: [u8; MAX_DIGITS],
    /// Current brightness level (0 to [`MAX_BRIGHTNESS`])
    brightness: u8,
    /// Whether the panel is lit
    is_on: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The display starts marked on at the configured brightness. Call
    /// [`init`](Self::init) before any other operation to drive the bus
    /// lines to their idle state and blank the panel.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            buffer: [0; MAX_DIGITS],
            brightness: config.brightness,
            is_on: true,
        }
    }

    /// Drive the bus lines to idle and clear every digit position
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!(
            "init: {} digits, brightness {}",
            self.config.digit_count, self.brightness
        );
        self.interface.init(delay).map_err(Error::Interface)?;
        self.is_on = true;
        self.clear(delay)
    }

    /// Set the display intensity
    ///
    /// Levels 1 to 8 map to the chip's brightness range 0 to 7; values
    /// above 8 are clamped. Level 0 powers the panel off (the mirror
    /// and the chip's registers are preserved, so a later
    /// [`turn_on`](Self::turn_on) restores the previous content).
    pub fn set_intensity<D: DelayNs>(&mut self, level: u8, delay: &mut D) -> DisplayResult<I> {
        if level == 0 {
            return self.turn_off(delay);
        }
        let level = level.min(MAX_BRIGHTNESS + 1);
        self.brightness = level - 1;
        self.is_on = true;
        debug!("intensity {} -> brightness {}", level, self.brightness);
        self.push_display_control(delay)
    }

    /// Light a digit position from per-segment switches
    ///
    /// The dot point is unaffected by the switches and ends up cleared;
    /// re-apply it with [`set_dot_point`](Self::set_dot_point) afterwards.
    pub fn set_segments_at<D: DelayNs>(
        &mut self,
        segments: Segments,
        position: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.light_segments_at(segments.mask(), position, delay)
    }

    /// Light a digit position from a raw segment mask
    ///
    /// Bits 0-6 select segments a-g, bit 7 the dot point. The position
    /// wraps modulo the digit count.
    pub fn light_segments_at<D: DelayNs>(
        &mut self,
        mask: u8,
        position: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.write_position(position, mask, delay)
    }

    /// Light a digit position from a binary mask literal such as `"0b0110_0110"`
    ///
    /// The literal covers segments a-g only (7 digits); see
    /// [`parse_binary_literal`]. Malformed input renders the error pattern
    /// across the display instead of returning an error.
    pub fn light_segments_text_at<D: DelayNs>(
        &mut self,
        text: &str,
        position: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        match parse_binary_literal(text) {
            Some(mask) => self.write_position(position, mask, delay),
            None => self.show_error(delay),
        }
    }

    /// Show a single digit at a position
    ///
    /// Negative values blank the position. Non-negative values wrap modulo
    /// 16 and render as hexadecimal glyphs.
    pub fn show_digit<D: DelayNs>(
        &mut self,
        value: i16,
        position: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let data = if value < 0 {
            0
        } else {
            digit_to_segments((value % 16) as u8)
        };
        self.write_position(position, data, delay)
    }

    /// Show a decimal number with leading zeros
    ///
    /// Positions 1-3 always receive the hundreds/tens/units digits of the
    /// magnitude. Position 0 receives the thousands digit, or the minus
    /// glyph when the number is negative (the thousands digit is then never
    /// shown). Intended range is -999 to 9999.
    pub fn show_number_with_leading_zeros<D: DelayNs>(
        &mut self,
        num: i16,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let magnitude = num.unsigned_abs();
        if num < 0 {
            self.write_position(0, MINUS, delay)?;
        } else {
            self.write_position(0, digit_to_segments(((magnitude / 1000) % 10) as u8), delay)?;
        }
        self.write_position(1, digit_to_segments(((magnitude / 100) % 10) as u8), delay)?;
        self.write_position(2, digit_to_segments(((magnitude / 10) % 10) as u8), delay)?;
        self.write_position(3, digit_to_segments((magnitude % 10) as u8), delay)
    }

    /// Show a decimal number, blanking unneeded leading positions
    ///
    /// Position 0 shows the thousands digit only when the magnitude exceeds
    /// 999 (or the minus glyph for negative input); positions 1 and 2 are
    /// blanked unless the magnitude exceeds 99 and 9 respectively. The units
    /// digit is always shown. Intended range is -999 to 9999.
    pub fn show_number<D: DelayNs>(&mut self, num: i16, delay: &mut D) -> DisplayResult<I> {
        let magnitude = num.unsigned_abs();
        if num < 0 {
            self.write_position(0, MINUS, delay)?;
        } else if magnitude > 999 {
            self.write_position(0, digit_to_segments(((magnitude / 1000) % 10) as u8), delay)?;
        } else {
            self.write_position(0, 0, delay)?;
        }
        if magnitude > 99 {
            self.write_position(1, digit_to_segments(((magnitude / 100) % 10) as u8), delay)?;
        } else {
            self.write_position(1, 0, delay)?;
        }
        if magnitude > 9 {
            self.write_position(2, digit_to_segments(((magnitude / 10) % 10) as u8), delay)?;
        } else {
            self.write_position(2, 0, delay)?;
        }
        self.write_position(3, digit_to_segments((magnitude % 10) as u8), delay)
    }

    /// Show a number as four hexadecimal digits
    ///
    /// Positions 1-3 always receive nibbles 2-0 of the magnitude, leading
    /// zeros included. Position 0 receives nibble 3, or the minus glyph when
    /// the number is negative.
    pub fn show_hex_value<D: DelayNs>(&mut self, num: i32, delay: &mut D) -> DisplayResult<I> {
        let magnitude = num.unsigned_abs();
        if num < 0 {
            self.write_position(0, MINUS, delay)?;
        } else {
            self.write_position(0, digit_to_segments(((magnitude >> 12) & 0xF) as u8), delay)?;
        }
        self.write_position(1, digit_to_segments(((magnitude >> 8) & 0xF) as u8), delay)?;
        self.write_position(2, digit_to_segments(((magnitude >> 4) & 0xF) as u8), delay)?;
        self.write_position(3, digit_to_segments((magnitude & 0xF) as u8), delay)
    }

    /// Show a hexadecimal literal such as `"0x2A"`
    ///
    /// The literal is bounded to the digit count (extra high-order digits
    /// are dropped; see [`parse_hex_literal`]). Leading zero digits are
    /// blanked: position 0 shows nibble 3 only when the value exceeds
    /// `0xFFF`, positions 1 and 2 only above `0xFF` and `0xF`. An internal
    /// zero digit always sits below an already-satisfied threshold, so it is
    /// never blanked. Malformed input renders the error pattern across the
    /// display instead of returning an error.
    pub fn show_hex_text<D: DelayNs>(&mut self, text: &str, delay: &mut D) -> DisplayResult<I> {
        let Some(value) = parse_hex_literal(text, self.config.digit_count as usize) else {
            return self.show_error(delay);
        };
        if value > 0xFFF {
            self.write_position(0, digit_to_segments(((value >> 12) & 0xF) as u8), delay)?;
        } else {
            self.write_position(0, 0, delay)?;
        }
        if value > 0xFF {
            self.write_position(1, digit_to_segments(((value >> 8) & 0xF) as u8), delay)?;
        } else {
            self.write_position(1, 0, delay)?;
        }
        if value > 0xF {
            self.write_position(2, digit_to_segments(((value >> 4) & 0xF) as u8), delay)?;
        } else {
            self.write_position(2, 0, delay)?;
        }
        self.write_position(3, digit_to_segments((value & 0xF) as u8), delay)
    }

    /// Show or hide the dot point at a position
    ///
    /// Reads the mirrored segment byte, flips only the dot bit, and writes
    /// the result back. Set the segments first: applying a dot to an empty
    /// position renders the dot alone.
    pub fn set_dot_point<D: DelayNs>(
        &mut self,
        position: u8,
        show: bool,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let index = self.index_of(position);
        let data = if show {
            self.buffer[index] | DOT_POINT
        } else {
            self.buffer[index] & SEGMENT_MASK
        };
        self.write_position(position, data, delay)
    }

    /// Clear every digit position
    ///
    /// Writes one zero byte per position; the mirror is zeroed in lock-step.
    pub fn clear<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("clear");
        for position in 0..self.config.digit_count {
            self.write_position(position, 0, delay)?;
        }
        Ok(())
    }

    /// Light the panel at the current brightness
    pub fn turn_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.is_on = true;
        self.push_display_control(delay)
    }

    /// Blank the panel
    ///
    /// The chip's display registers and the mirror keep their contents;
    /// [`turn_on`](Self::turn_on) restores the previous image.
    pub fn turn_off<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.is_on = false;
        self.push_display_control(delay)
    }

    /// Render the fixed error pattern
    ///
    /// Spells `Error` across the available positions; positions past the
    /// pattern are cleared. Invoked internally whenever a text literal
    /// fails to parse, so malformed input surfaces on the panel rather than
    /// as an error code.
    pub fn show_error<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("render error pattern");
        for position in 0..self.config.digit_count {
            let data = ERROR_PATTERN.get(position as usize).copied().unwrap_or(0);
            self.write_position(position, data, delay)?;
        }
        Ok(())
    }

    /// Get the number of digit positions
    pub fn digit_count(&self) -> u8 {
        self.config.digit_count
    }

    /// Get the current brightness level
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Whether the panel is currently lit
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Access the mirror of the chip's display registers
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.config.digit_count as usize]
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn index_of(&self, position: u8) -> usize {
        (position % self.config.digit_count) as usize
    }

    /// Write one segment byte to one digit position
    ///
    /// Updates the mirror, then runs the chip's fixed three-transaction
    /// sequence: data command, address+data, display control. The chip
    /// requires all three per write; they cannot be coalesced.
    fn write_position<D: DelayNs>(
        &mut self,
        position: u8,
        data: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let index = self.index_of(position);
        self.buffer[index] = data;
        trace!("digit {} <- {:#04x}", index, data);

        let address = command::address_write(index as u8, self.config.digit_count);
        let control = command::display_control(self.is_on, self.brightness);
        self.send_framed(&[DATA_COMMAND], delay)?;
        self.send_framed(&[address, data], delay)?;
        self.send_framed(&[control], delay)
    }

    /// Reissue the display-control command
    ///
    /// Preceded by the data command in its own transaction, matching the
    /// chip's expected sequence for a control-only update.
    fn push_display_control<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let control = command::display_control(self.is_on, self.brightness);
        self.send_framed(&[DATA_COMMAND], delay)?;
        self.send_framed(&[control], delay)
    }

    /// Send bytes bracketed by one start/stop pair
    fn send_framed<D: DelayNs>(&mut self, bytes: &[u8], delay: &mut D) -> DisplayResult<I> {
        self.interface.start(delay).map_err(Error::Interface)?;
        for byte in bytes {
            self.interface
                .write_byte(*byte, delay)
                .map_err(Error::Interface)?;
        }
        self.interface.stop(delay).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::segments::SEGMENTS;

    #[derive(Debug)]
    struct MockInterface {
        transactions: alloc::vec::Vec<alloc::vec::Vec<u8>>,
        current: Option<alloc::vec::Vec<u8>>,
        init_calls: usize,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                transactions: alloc::vec::Vec::new(),
                current: None,
                init_calls: 0,
            }
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn init<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.init_calls += 1;
            Ok(())
        }

        fn start<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.current = Some(alloc::vec::Vec::new());
            Ok(())
        }

        fn stop<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            if let Some(transaction) = self.current.take() {
                self.transactions.push(transaction);
            }
            Ok(())
        }

        fn write_byte<D: DelayNs>(&mut self, byte: u8, _delay: &mut D) -> Result<(), Self::Error> {
            if let Some(transaction) = self.current.as_mut() {
                transaction.push(byte);
            }
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::new(), config)
    }

    #[test]
    fn test_single_digit_write_is_three_framed_transactions() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_digit(3, 1, &mut delay).unwrap();

        assert_eq!(
            display.interface.transactions,
            alloc::vec![
                alloc::vec![0x40],
                alloc::vec![0xC1, SEGMENTS[3]],
                alloc::vec![0x8F],
            ]
        );
    }

    #[test]
    fn test_show_digit_stores_glyph_in_buffer() {
        let mut display = test_display();
        let mut delay = MockDelay;
        for value in 0..16 {
            display.show_digit(value, 2, &mut delay).unwrap();
            assert_eq!(display.buffer()[2], SEGMENTS[value as usize]);
        }
    }

    #[test]
    fn test_show_digit_wraps_value_and_position() {
        let mut display = test_display();
        let mut delay = MockDelay;
        // value 27 % 16 = 11, position 5 % 4 = 1
        display.show_digit(27, 5, &mut delay).unwrap();
        assert_eq!(display.buffer()[1], SEGMENTS[11]);
    }

    #[test]
    fn test_show_digit_negative_blanks_position() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_digit(8, 0, &mut delay).unwrap();
        display.show_digit(-1, 0, &mut delay).unwrap();
        assert_eq!(display.buffer()[0], 0);
    }

    #[test]
    fn test_set_dot_point_roundtrip_restores_buffer() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.light_segments_at(0x66, 2, &mut delay).unwrap();
        display.set_dot_point(2, true, &mut delay).unwrap();
        assert_eq!(display.buffer()[2], 0xE6);
        display.set_dot_point(2, false, &mut delay).unwrap();
        assert_eq!(display.buffer()[2], 0x66);
    }

    #[test]
    fn test_set_dot_point_position_wraps() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.set_dot_point(6, true, &mut delay).unwrap();
        assert_eq!(display.buffer()[2], DOT_POINT);
    }

    #[test]
    fn test_show_number_negative_small() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_number(-5, &mut delay).unwrap();
        assert_eq!(display.buffer(), [MINUS, 0, 0, SEGMENTS[5]]);
    }

    #[test]
    fn test_show_number_blanks_by_magnitude() {
        let mut display = test_display();
        let mut delay = MockDelay;

        display.show_number(7, &mut delay).unwrap();
        assert_eq!(display.buffer(), [0, 0, 0, SEGMENTS[7]]);

        display.show_number(42, &mut delay).unwrap();
        assert_eq!(display.buffer(), [0, 0, SEGMENTS[4], SEGMENTS[2]]);

        display.show_number(1234, &mut delay).unwrap();
        assert_eq!(
            display.buffer(),
            [SEGMENTS[1], SEGMENTS[2], SEGMENTS[3], SEGMENTS[4]]
        );
    }

    #[test]
    fn test_show_number_zero_shows_single_digit() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_number(0, &mut delay).unwrap();
        assert_eq!(display.buffer(), [0, 0, 0, SEGMENTS[0]]);
    }

    #[test]
    fn test_show_number_with_leading_zeros() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_number_with_leading_zeros(7, &mut delay).unwrap();
        assert_eq!(
            display.buffer(),
            [SEGMENTS[0], SEGMENTS[0], SEGMENTS[0], SEGMENTS[7]]
        );
    }

    #[test]
    fn test_show_number_with_leading_zeros_negative() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display
            .show_number_with_leading_zeros(-42, &mut delay)
            .unwrap();
        assert_eq!(
            display.buffer(),
            [MINUS, SEGMENTS[0], SEGMENTS[4], SEGMENTS[2]]
        );
    }

    #[test]
    fn test_show_hex_value_keeps_leading_zeros() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_value(0x2A, &mut delay).unwrap();
        assert_eq!(
            display.buffer(),
            [SEGMENTS[0], SEGMENTS[0], SEGMENTS[2], SEGMENTS[0xA]]
        );
    }

    #[test]
    fn test_show_hex_value_four_digits() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_value(0x12AB, &mut delay).unwrap();
        assert_eq!(
            display.buffer(),
            [SEGMENTS[1], SEGMENTS[2], SEGMENTS[0xA], SEGMENTS[0xB]]
        );
    }

    #[test]
    fn test_show_hex_value_negative() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_value(-0x2A, &mut delay).unwrap();
        assert_eq!(
            display.buffer(),
            [MINUS, SEGMENTS[0], SEGMENTS[2], SEGMENTS[0xA]]
        );
    }

    #[test]
    fn test_show_hex_text_blanks_leading_digits() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_text("0x2A", &mut delay).unwrap();
        assert_eq!(display.buffer(), [0, 0, SEGMENTS[2], SEGMENTS[0xA]]);
    }

    #[test]
    fn test_show_hex_text_keeps_internal_zero() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_text("0x105", &mut delay).unwrap();
        assert_eq!(display.buffer(), [0, SEGMENTS[1], SEGMENTS[0], SEGMENTS[5]]);
    }

    #[test]
    fn test_show_hex_text_truncates_to_digit_count() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_text("0x12345", &mut delay).unwrap();
        assert_eq!(
            display.buffer(),
            [SEGMENTS[2], SEGMENTS[3], SEGMENTS[4], SEGMENTS[5]]
        );
    }

    #[test]
    fn test_show_hex_text_invalid_renders_error_pattern() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_hex_text("0xGG", &mut delay).unwrap();
        assert_eq!(display.buffer(), &ERROR_PATTERN[..4]);
    }

    #[test]
    fn test_light_segments_text_at() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display
            .light_segments_text_at("0b_0110_0110", 1, &mut delay)
            .unwrap();
        assert_eq!(display.buffer()[1], 0x66);
    }

    #[test]
    fn test_light_segments_text_invalid_renders_error_pattern() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.light_segments_text_at("abc", 0, &mut delay).unwrap();
        assert_eq!(display.buffer(), &ERROR_PATTERN[..4]);
    }

    #[test]
    fn test_set_segments_at() {
        let mut display = test_display();
        let mut delay = MockDelay;
        let four = Segments {
            b: true,
            c: true,
            f: true,
            g: true,
            ..Segments::default()
        };
        display.set_segments_at(four, 0, &mut delay).unwrap();
        assert_eq!(display.buffer()[0], SEGMENTS[4]);
    }

    #[test]
    fn test_clear_writes_zero_once_per_position() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.show_number(1234, &mut delay).unwrap();
        display.interface.transactions.clear();

        display.clear(&mut delay).unwrap();
        assert_eq!(display.buffer(), [0, 0, 0, 0]);

        let zero_writes: alloc::vec::Vec<u8> = display
            .interface
            .transactions
            .iter()
            .filter(|t| t.len() == 2 && t[1] == 0)
            .map(|t| t[0])
            .collect();
        assert_eq!(zero_writes, alloc::vec![0xC0, 0xC1, 0xC2, 0xC3]);
    }

    #[test]
    fn test_init_clears_display() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.init(&mut delay).unwrap();
        assert_eq!(display.interface.init_calls, 1);
        assert_eq!(display.buffer(), [0, 0, 0, 0]);
        assert!(display.is_on());
    }

    #[test]
    fn test_turn_off_is_idempotent() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.turn_off(&mut delay).unwrap();
        let brightness_after_one = display.brightness();
        let on_after_one = display.is_on();

        display.turn_off(&mut delay).unwrap();
        assert_eq!(display.brightness(), brightness_after_one);
        assert_eq!(display.is_on(), on_after_one);
        assert!(!display.is_on());

        // Both control transactions carry the same byte
        let controls: alloc::vec::Vec<u8> = display
            .interface
            .transactions
            .iter()
            .filter(|t| t.len() == 1 && t[0] & 0x80 != 0)
            .map(|t| t[0])
            .collect();
        assert_eq!(controls, alloc::vec![0x87, 0x87]);
    }

    #[test]
    fn test_turn_off_then_on_restores_brightness() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.turn_off(&mut delay).unwrap();
        display.turn_on(&mut delay).unwrap();
        assert!(display.is_on());
        assert_eq!(display.brightness(), 7);
        assert_eq!(
            display.interface.transactions.last(),
            Some(&alloc::vec![0x8F])
        );
    }

    #[test]
    fn test_set_intensity_zero_powers_off() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.light_segments_at(0x7F, 0, &mut delay).unwrap();
        display.set_intensity(0, &mut delay).unwrap();
        assert!(!display.is_on());
        // Mirror preserved for a later turn_on
        assert_eq!(display.buffer()[0], 0x7F);
    }

    #[test]
    fn test_set_intensity_maps_level_to_brightness() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.set_intensity(3, &mut delay).unwrap();
        assert_eq!(display.brightness(), 2);
        assert!(display.is_on());
    }

    #[test]
    fn test_set_intensity_clamps_to_maximum() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.set_intensity(20, &mut delay).unwrap();
        assert_eq!(display.brightness(), MAX_BRIGHTNESS);
    }

    #[test]
    fn test_control_byte_reflects_off_state() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.turn_off(&mut delay).unwrap();
        display.show_digit(1, 0, &mut delay).unwrap();
        assert_eq!(
            display.interface.transactions.last(),
            Some(&alloc::vec![0x87])
        );
    }

    #[test]
    fn test_two_digit_display_wraps_positions() {
        let config = Builder::new().digit_count(2).build().unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay;
        display.show_digit(9, 2, &mut delay).unwrap();
        assert_eq!(display.buffer(), [SEGMENTS[9], 0]);
        assert_eq!(display.buffer().len(), 2);
    }

    #[test]
    fn test_error_pattern_on_narrow_display() {
        let config = Builder::new().digit_count(2).build().unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay;
        display.show_hex_text("bogus", &mut delay).unwrap();
        assert_eq!(display.buffer(), &ERROR_PATTERN[..2]);
    }
}
