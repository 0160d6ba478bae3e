//! Board-agnostic core logic for the duty-cycle controller
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - The duty-cycle value type
//! - The controller that drains the serial link and drives the PWM output
//! - Fixed configuration values
//!
//! Hardware access goes through the `dutyline-hal` traits, so the whole
//! control loop runs on the host under test with mock peripherals.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod duty;

pub use config::ControllerConfig;
pub use controller::{DutyController, TickReport};
pub use duty::DutyCycle;
