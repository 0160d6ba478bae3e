//! Host-side integration tests for the duty-cycle controller.
//!
//! The controller runs against in-memory serial and PWM mocks, so every
//! test exercises the same `tick()` the firmware calls.

mod mock_hw;
mod property_tests;
mod serial_link_tests;
