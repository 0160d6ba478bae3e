//! Dutyline Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the duty-cycle
//! controller is written against. Chip-specific HALs (RP2040, ...) implement
//! them, and host tests implement them with in-memory mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (dutyline-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dutyline-core (controller)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dutyline-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ dutyline-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::SerialRx`] - Polled, non-blocking serial receive
//! - [`pwm::PwmOutput`] - 8-bit PWM output

#![no_std]
#![deny(unsafe_code)]

pub mod pwm;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use pwm::PwmOutput;
pub use uart::{PolledRx, SerialRx, UartConfig};
