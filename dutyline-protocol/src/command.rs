//! Parsed commands and host-side encoding
//!
//! The host sends a duty cycle as its decimal digits followed by a newline,
//! e.g. `128` becomes `b"128\n"`.

use heapless::Vec;

use crate::line::LINE_TERMINATOR;

/// Longest encoded command: three digits plus the terminator
pub const MAX_COMMAND_SIZE: usize = 4;

/// A complete, range-checked command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set the PWM output to this duty cycle (0-255)
    SetDuty(u8),
}

impl Command {
    /// Duty cycle carried by this command
    pub fn duty(&self) -> u8 {
        match *self {
            Command::SetDuty(duty) => duty,
        }
    }

    /// Encode this command into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        encode_command(self.duty(), buffer)
    }
}

/// Errors that can occur while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Buffer too small for the encoded command
    BufferTooSmall,
}

/// Encode a duty cycle as ASCII decimal digits plus `\n`
///
/// No leading zeros are emitted. Returns the number of bytes written.
pub fn encode_command(value: u8, buffer: &mut [u8]) -> Result<usize, EncodeError> {
    let mut digits = [0u8; MAX_COMMAND_SIZE - 1];
    let mut n = 0;
    let mut rest = value;
    loop {
        digits[n] = b'0' + rest % 10;
        n += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let len = n + 1;
    if buffer.len() < len {
        return Err(EncodeError::BufferTooSmall);
    }

    for (slot, &digit) in buffer.iter_mut().zip(digits[..n].iter().rev()) {
        *slot = digit;
    }
    buffer[n] = LINE_TERMINATOR;

    Ok(len)
}

/// Encode a duty cycle into a heapless Vec
pub fn encode_command_to_vec(value: u8) -> Result<Vec<u8, MAX_COMMAND_SIZE>, EncodeError> {
    let mut buffer = [0u8; MAX_COMMAND_SIZE];
    let len = encode_command(value, &mut buffer)?;
    let mut vec = Vec::new();
    vec.extend_from_slice(&buffer[..len])
        .map_err(|_| EncodeError::BufferTooSmall)?;
    Ok(vec)
}
