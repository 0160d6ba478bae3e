//! UART serial communication abstractions
//!
//! The controller never waits for input: it asks whether a byte is ready
//! and consumes it if so. [`SerialRx`] captures exactly that contract.

use embedded_io::{Read, ReadReady};

/// Polled serial receiver
///
/// Implementations must never block. A receive error is reported as "no
/// byte available"; the line protocol has no way to act on it.
pub trait SerialRx {
    /// Check whether at least one byte can be read without blocking
    fn bytes_available(&mut self) -> bool;

    /// Take one byte if one is ready
    fn read_byte(&mut self) -> Option<u8>;
}

/// Adapter turning any `embedded-io` reader into a [`SerialRx`]
///
/// `read_ready()` is consulted before every read, so the underlying
/// (possibly blocking) `read()` is only called when it returns at once.
pub struct PolledRx<T> {
    inner: T,
    errors: u32,
}

impl<T> PolledRx<T> {
    /// Wrap a reader
    pub fn new(inner: T) -> Self {
        Self { inner, errors: 0 }
    }

    /// Number of receive errors swallowed so far
    pub fn error_count(&self) -> u32 {
        self.errors
    }
}

impl<T: Read + ReadReady> SerialRx for PolledRx<T> {
    fn bytes_available(&mut self) -> bool {
        match self.inner.read_ready() {
            Ok(ready) => ready,
            Err(_) => {
                self.errors = self.errors.wrapping_add(1);
                false
            }
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        if !self.bytes_available() {
            return None;
        }

        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            Ok(_) => None,
            Err(_) => {
                self.errors = self.errors.wrapping_add(1);
                None
            }
        }
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Hardware flow control
    pub flow_control: FlowControl,
}

/// Baud rate of the duty-cycle command link
pub const DUTY_LINE_BAUDRATE: u32 = 9600;

impl UartConfig {
    /// Fixed configuration of the command link: 9600 8N1, no flow control
    pub const fn duty_line() -> Self {
        Self {
            baudrate: DUTY_LINE_BAUDRATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            flow_control: FlowControl::None,
        }
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::duty_line()
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Flow control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlowControl {
    None,
    RtsCts,
}
