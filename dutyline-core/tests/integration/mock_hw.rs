//! Mock hardware for integration tests.
//!
//! `MockSerial` is a byte queue the test fills between ticks, standing in
//! for a UART receive FIFO. `MockPwm` records every duty write.

use std::collections::VecDeque;

use dutyline_core::DutyController;
use dutyline_hal::{PwmOutput, SerialRx};

#[derive(Debug, Default)]
pub struct MockSerial {
    fifo: VecDeque<u8>,
}

impl MockSerial {
    pub fn push(&mut self, bytes: &[u8]) {
        self.fifo.extend(bytes.iter().copied());
    }

    pub fn pending(&self) -> usize {
        self.fifo.len()
    }
}

impl SerialRx for MockSerial {
    fn bytes_available(&mut self) -> bool {
        !self.fifo.is_empty()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.fifo.pop_front()
    }
}

#[derive(Debug, Default)]
pub struct MockPwm {
    pub enabled: bool,
    pub writes: Vec<u8>,
}

impl PwmOutput for MockPwm {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn write_duty(&mut self, duty: u8) {
        self.writes.push(duty);
    }

    fn duty(&self) -> u8 {
        self.writes.last().copied().unwrap_or(0)
    }
}

pub type MockController = DutyController<MockSerial, MockPwm>;

/// Controller after `initialize()`, output at 0
pub fn initialized_controller() -> MockController {
    let mut controller = DutyController::new(MockSerial::default(), MockPwm::default());
    controller.initialize();
    controller
}

/// Queue `bytes` on the serial link and run one tick
pub fn send_and_tick(controller: &mut MockController, bytes: &[u8]) -> u8 {
    controller.serial_mut().push(bytes);
    controller.tick();
    controller.output().duty()
}
