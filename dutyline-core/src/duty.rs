//! Duty-cycle value type

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// PWM duty cycle, 0 (fully off) to 255 (fully on)
///
/// Every `u8` is a valid duty cycle, so range checking happens once, when
/// a command line is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DutyCycle(u8);

impl DutyCycle {
    /// Output fully off
    pub const OFF: Self = Self(0);
    /// Output fully on
    pub const FULL: Self = Self(u8::MAX);

    /// Create a duty cycle from a raw 8-bit value
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw 8-bit value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Duty cycle as a percentage, rounded down
    pub fn percent(self) -> u8 {
        (self.0 as u16 * 100 / u8::MAX as u16) as u8
    }
}

impl From<u8> for DutyCycle {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<DutyCycle> for u8 {
    fn from(duty: DutyCycle) -> Self {
        duty.0
    }
}
