//! PWM slice output
//!
//! Wraps an embassy-rp `Pwm` driving one channel of a slice and exposes it
//! as an 8-bit [`PwmOutput`].

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::FixedU16;

use dutyline_hal::pwm::{duty_to_compare, PwmOutput};

pub use crate::pins::PwmChannel;

/// One PWM channel driven with an 8-bit duty cycle
pub struct SlicePwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    channel: PwmChannel,
    duty: u8,
}

impl<'d> SlicePwm<'d> {
    /// Wrap a PWM slice
    ///
    /// The counter stays stopped with both compares at 0 until
    /// [`PwmOutput::enable`] is called.
    pub fn new(mut pwm: Pwm<'d>, channel: PwmChannel, top: u16, divider: u8) -> Self {
        let mut config = PwmConfig::default();
        config.top = top;
        config.divider = FixedU16::from_num(divider.max(1));
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = false;
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            channel,
            duty: 0,
        }
    }

    fn set_compare(&mut self, compare: u16) {
        match self.channel {
            PwmChannel::A => self.config.compare_a = compare,
            PwmChannel::B => self.config.compare_b = compare,
        }
    }
}

impl PwmOutput for SlicePwm<'_> {
    fn enable(&mut self) {
        self.config.enable = true;
        self.pwm.set_config(&self.config);
    }

    fn write_duty(&mut self, duty: u8) {
        // Compare register already holds this value
        if duty == self.duty && self.config.enable {
            return;
        }
        self.duty = duty;
        let compare = duty_to_compare(duty, self.config.top);
        self.set_compare(compare);
        self.pwm.set_config(&self.config);
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}
