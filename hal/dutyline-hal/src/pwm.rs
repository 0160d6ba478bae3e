//! PWM output abstraction
//!
//! Duty cycles are 8-bit: 0 is fully off and 255 is fully on. Scaling to
//! the channel's native counter resolution is the implementation's job.

/// Maximum duty value (fully on)
pub const DUTY_MAX: u8 = u8::MAX;

/// 8-bit PWM output
pub trait PwmOutput {
    /// Configure the pin for PWM output and start the counter
    fn enable(&mut self);

    /// Write a duty cycle (0-255)
    ///
    /// Fire-and-forget: takes effect at the next PWM period.
    fn write_duty(&mut self, duty: u8);

    /// Last duty cycle written
    fn duty(&self) -> u8;
}

/// Scale an 8-bit duty cycle to a counter compare value
///
/// `top` is the counter wrap value, so the period is `top + 1` counts.
/// A duty of 255 maps to `top + 1`, which keeps the output high for the
/// whole period; 0 keeps it low.
pub fn duty_to_compare(duty: u8, top: u16) -> u16 {
    let period = top as u32 + 1;
    let compare = duty as u32 * period / DUTY_MAX as u32;
    compare.min(u16::MAX as u32) as u16
}
