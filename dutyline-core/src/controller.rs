//! Duty-cycle controller
//!
//! Owns the serial receiver, the PWM output, the line parser and the
//! committed duty cycle. The firmware calls [`DutyController::tick`] in a
//! loop; each tick drains every byte that is ready, then rewrites the
//! output.
//!
//! # State machine
//!
//! ```text
//!            digit / other byte
//!             ┌──────────┐
//!             ▼          │
//!      ┌──────────────┐──┘    '\n'     ┌────────┐
//! ───▶ │ ACCUMULATING │ ─────────────▶ │ COMMIT │
//!      └──────────────┘ ◀───────────── └────────┘
//!                        buffer cleared
//! ```
//!
//! Bad lines are dropped without a trace on the wire: last valid wins.
//!
//! ```ignore
//! let mut controller = DutyController::new(rx, pwm);
//! controller.initialize();
//! loop {
//!     controller.tick();
//! }
//! ```

use dutyline_hal::{PwmOutput, SerialRx};
use dutyline_protocol::{Command, LineParser};

use crate::duty::DutyCycle;

/// What happened during one tick
///
/// Only meant for local diagnostics; nothing is sent back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Bytes taken from the serial receiver
    pub bytes_consumed: u32,
    /// Lines committed as a new duty cycle
    pub commands: u16,
    /// Lines discarded (out of range or too long)
    pub rejected: u16,
    /// Duty cycle written to the output at the end of the tick
    pub duty: DutyCycle,
    /// Whether the duty cycle differs from the previous tick
    pub changed: bool,
}

impl TickReport {
    /// No input was consumed
    pub fn is_idle(&self) -> bool {
        self.bytes_consumed == 0
    }
}

/// Single-channel serial-to-PWM controller
pub struct DutyController<R, P> {
    rx: R,
    pwm: P,
    parser: LineParser,
    duty: DutyCycle,
}

impl<R: SerialRx, P: PwmOutput> DutyController<R, P> {
    /// Create a controller with duty cycle 0 and an empty line buffer
    pub fn new(rx: R, pwm: P) -> Self {
        Self {
            rx,
            pwm,
            parser: LineParser::new(),
            duty: DutyCycle::OFF,
        }
    }

    /// Configure the output for PWM and drive it to the initial duty cycle
    pub fn initialize(&mut self) {
        self.pwm.enable();
        self.pwm.write_duty(self.duty.value());
    }

    /// Drain all available input, then write the current duty cycle
    ///
    /// Never blocks: bytes that have not arrived yet are picked up by a
    /// later tick.
    pub fn tick(&mut self) -> TickReport {
        let previous = self.duty;
        let mut report = TickReport::default();

        while self.rx.bytes_available() {
            let Some(byte) = self.rx.read_byte() else {
                break;
            };
            report.bytes_consumed = report.bytes_consumed.saturating_add(1);

            match self.parser.feed(byte) {
                Ok(Some(Command::SetDuty(value))) => {
                    self.duty = DutyCycle::new(value);
                    report.commands = report.commands.saturating_add(1);
                }
                Ok(None) => {}
                Err(_) => {
                    report.rejected = report.rejected.saturating_add(1);
                }
            }
        }

        self.pwm.write_duty(self.duty.value());

        report.duty = self.duty;
        report.changed = self.duty != previous;
        report
    }

    /// Last committed duty cycle
    pub fn duty_cycle(&self) -> DutyCycle {
        self.duty
    }

    /// Line parser holding the partial line
    pub fn parser(&self) -> &LineParser {
        &self.parser
    }

    /// Serial receiver
    pub fn serial_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    /// PWM output
    pub fn output(&self) -> &P {
        &self.pwm
    }

    /// Release the hardware handles
    pub fn into_parts(self) -> (R, P) {
        (self.rx, self.pwm)
    }
}
