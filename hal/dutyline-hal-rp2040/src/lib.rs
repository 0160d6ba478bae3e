//! RP2040-specific HAL for the Dutyline firmware
//!
//! This crate provides RP2040 implementations of the shared `dutyline-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO to PWM slice/channel and UART function maps
//! - PWM slice output (implements `dutyline_hal::PwmOutput`)
//! - Buffered UART receive (implements `dutyline_hal::SerialRx`)

#![no_std]

pub mod pins;
pub mod pwm;
pub mod uart;

// Re-export shared traits from dutyline-hal for convenience
pub use dutyline_hal::{PwmOutput, SerialRx};
