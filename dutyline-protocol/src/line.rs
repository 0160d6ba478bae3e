//! Line assembly and parsing for the duty-cycle protocol.
//!
//! Bytes are fed one at a time:
//! - DIGIT (`0`-`9`): folded into the running value
//! - TERMINATOR (`\n`): the running value is range checked against 0-255
//!   and cleared
//! - anything else: dropped, line unchanged
//!
//! Digits are never stored, so line length is unbounded. The running value
//! saturates at `u32::MAX`, which the range check rejects like any other
//! value above 255.

use crate::command::Command;

/// Line terminator byte
pub const LINE_TERMINATOR: u8 = b'\n';

/// Errors that can occur when a line is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Parsed value is above 255 (saturated at `u32::MAX`)
    OutOfRange(u32),
}

/// State machine assembling command lines from a byte stream
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    value: u32,
    digits: usize,
}

impl LineParser {
    /// Create a new line parser with an empty line
    pub fn new() -> Self {
        Self { value: 0, digits: 0 }
    }

    /// Discard the partial line
    pub fn reset(&mut self) {
        self.value = 0;
        self.digits = 0;
    }

    /// Number of digits received for the current, unterminated line
    pub fn pending_digits(&self) -> usize {
        self.digits
    }

    /// Value of the current, unterminated line (saturated at `u32::MAX`)
    pub fn pending_value(&self) -> u32 {
        self.value
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(command))` when a terminator completes a valid line,
    /// `Ok(None)` when more bytes are needed, or `Err` when a terminator
    /// completes a line that is out of range. The line is cleared on every
    /// terminator regardless of the outcome.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Command>, CommandError> {
        match byte {
            LINE_TERMINATOR => {
                let result = self.commit();
                self.reset();
                result.map(Some)
            }
            b'0'..=b'9' => {
                self.value = self
                    .value
                    .saturating_mul(10)
                    .saturating_add((byte - b'0') as u32);
                self.digits = self.digits.saturating_add(1);
                Ok(None)
            }
            // Silently ignore everything else in place
            _ => Ok(None),
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete command found, if any.
    /// Remaining bytes after a terminator are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Command>, CommandError> {
        for &byte in bytes {
            if let Some(command) = self.feed(byte)? {
                return Ok(Some(command));
            }
        }
        Ok(None)
    }

    /// Range check the running value
    ///
    /// A line without digits parses to 0.
    fn commit(&self) -> Result<Command, CommandError> {
        u8::try_from(self.value)
            .map(Command::SetDuty)
            .map_err(|_| CommandError::OutOfRange(self.value))
    }
}
