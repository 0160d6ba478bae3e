//! Controller configuration
//!
//! The controller runs from a fixed configuration compiled into the
//! firmware. There is no runtime configuration source: no environment,
//! no flash, no CLI. The firmware build reads `controller.toml`, checks it
//! with [`ControllerConfig::validate`], and bakes the result in as a
//! constant. [`ControllerConfig::default`] holds the same values.

use dutyline_hal::uart::UartConfig;
pub use dutyline_hal::uart::DUTY_LINE_BAUDRATE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GPIO driven with the duty cycle
pub const DEFAULT_PWM_PIN: u8 = 9;

/// PWM counter wrap value
///
/// The period is `top + 1` = 255 counts, so a compare value equal to the
/// 8-bit duty cycle gives 0 = always low and 255 = always high.
pub const DEFAULT_PWM_TOP: u16 = 254;

/// Integer PWM clock divider (125 MHz / 250 / 255 ≈ 1.96 kHz)
pub const DEFAULT_PWM_DIVIDER: u8 = 250;

/// Smallest counter top that still resolves every 8-bit duty cycle
pub const MIN_PWM_TOP: u16 = 254;

/// UART TX pin (unused by the controller, but claimed by the peripheral)
pub const DEFAULT_UART_TX_PIN: u8 = 0;

/// UART RX pin
pub const DEFAULT_UART_RX_PIN: u8 = 1;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate other than [`DUTY_LINE_BAUDRATE`]
    InvalidBaudrate,
    /// PWM top below [`MIN_PWM_TOP`]
    PwmResolutionTooLow,
    /// PWM clock divider of zero
    InvalidDivider,
    /// The PWM pin is also used by the UART
    PinConflict,
}

/// Fixed controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ControllerConfig {
    /// Serial bit rate
    pub baudrate: u32,
    /// UART TX GPIO
    pub uart_tx_pin: u8,
    /// UART RX GPIO
    pub uart_rx_pin: u8,
    /// PWM output GPIO
    pub pwm_pin: u8,
    /// PWM counter wrap value
    pub pwm_top: u16,
    /// Integer PWM clock divider
    pub pwm_divider: u8,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            baudrate: DUTY_LINE_BAUDRATE,
            uart_tx_pin: DEFAULT_UART_TX_PIN,
            uart_rx_pin: DEFAULT_UART_RX_PIN,
            pwm_pin: DEFAULT_PWM_PIN,
            pwm_top: DEFAULT_PWM_TOP,
            pwm_divider: DEFAULT_PWM_DIVIDER,
        }
    }
}

impl ControllerConfig {
    /// UART settings for the command link (8N1, no flow control)
    pub fn uart(&self) -> UartConfig {
        UartConfig {
            baudrate: self.baudrate,
            ..UartConfig::duty_line()
        }
    }

    /// Check the configuration for values the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baudrate != DUTY_LINE_BAUDRATE {
            return Err(ConfigError::InvalidBaudrate);
        }
        if self.pwm_top < MIN_PWM_TOP {
            return Err(ConfigError::PwmResolutionTooLow);
        }
        if self.pwm_divider == 0 {
            return Err(ConfigError::InvalidDivider);
        }
        if self.pwm_pin == self.uart_tx_pin || self.pwm_pin == self.uart_rx_pin {
            return Err(ConfigError::PinConflict);
        }
        Ok(())
    }
}
