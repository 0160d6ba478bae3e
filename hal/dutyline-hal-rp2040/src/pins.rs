//! GPIO function maps
//!
//! The RP2040 routes PWM and UART signals to fixed GPIOs. These maps let
//! the firmware check a pin assignment before it claims peripherals.

use dutyline_core::ControllerConfig;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Error when checking a pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin cannot carry the requested function
    WrongFunction,
    /// TX and RX belong to different UART peripherals
    UartMismatch,
}

/// PWM slice output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    A,
    B,
}

/// PWM slice and channel a GPIO is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmSlot {
    pub slice: u8,
    pub channel: PwmChannel,
}

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// UART signal carried by a GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartSignal {
    Tx,
    Rx,
    Cts,
    Rts,
}

/// Determine which PWM slice and channel drive a GPIO
///
/// Every GPIO has a PWM function: slice = (gpio / 2) mod 8, even pins are
/// channel A and odd pins channel B.
pub fn gpio_to_pwm(gpio: u8) -> Option<PwmSlot> {
    if gpio >= GPIO_COUNT {
        return None;
    }
    let channel = if gpio % 2 == 0 {
        PwmChannel::A
    } else {
        PwmChannel::B
    };
    Some(PwmSlot {
        slice: (gpio / 2) % 8,
        channel,
    })
}

/// Determine which UART can use a given GPIO, and for which signal
pub fn gpio_to_uart(gpio: u8) -> Option<(UartId, UartSignal)> {
    // UART0: GPIO 0-3, 12-15, 16-19, 28-29
    // UART1: GPIO 4-7, 8-11, 20-23, 24-27
    let uart = match gpio {
        0..=3 | 12..=19 | 28..=29 => UartId::Uart0,
        4..=11 | 20..=27 => UartId::Uart1,
        _ => return None,
    };
    let signal = match gpio % 4 {
        0 => UartSignal::Tx,
        1 => UartSignal::Rx,
        2 => UartSignal::Cts,
        _ => UartSignal::Rts,
    };
    Some((uart, signal))
}

/// Check the configured pins and return the PWM slot and UART to claim
pub fn check_assignment(config: &ControllerConfig) -> Result<(PwmSlot, UartId), PinError> {
    let slot = gpio_to_pwm(config.pwm_pin).ok_or(PinError::InvalidPin)?;

    let (tx_uart, tx_signal) = gpio_to_uart(config.uart_tx_pin).ok_or(PinError::InvalidPin)?;
    let (rx_uart, rx_signal) = gpio_to_uart(config.uart_rx_pin).ok_or(PinError::InvalidPin)?;

    if tx_signal != UartSignal::Tx || rx_signal != UartSignal::Rx {
        return Err(PinError::WrongFunction);
    }
    if tx_uart != rx_uart {
        return Err(PinError::UartMismatch);
    }

    Ok((slot, rx_uart))
}
