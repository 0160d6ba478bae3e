//! Dutyline - Serial Duty-Cycle Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads newline-terminated
//! decimal commands (0-255) from UART0 and drives GPIO9 with the most
//! recent valid value as a PWM duty cycle.
//!
//! Board wiring:
//! - UART0 TX = GPIO0, RX = GPIO1
//! - PWM slice 4 channel B = GPIO9

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dutyline_core::DutyController;
use dutyline_hal_rp2040::pins::{check_assignment, PwmChannel, UartId};
use dutyline_hal_rp2040::pwm::SlicePwm;
use dutyline_hal_rp2040::uart::{polled, to_embassy_config};

use crate::config::CONTROLLER_CONFIG;

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// UART ring buffer size; at 9600 baud this holds ~250 ms of input
const UART_BUF_SIZE: usize = 256;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dutyline firmware starting...");

    let config = CONTROLLER_CONFIG;

    // build.rs already rejected these; a mismatch here means the wiring
    // below was edited without updating the board constants
    match check_assignment(&config) {
        Ok((slot, UartId::Uart0)) if slot.slice == 4 && slot.channel == PwmChannel::B => {}
        Ok(_) => defmt::panic!("Pin assignment does not match board wiring"),
        Err(e) => defmt::panic!("Invalid pin assignment: {:?}", e),
    }

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the command link
    let uart_config = to_embassy_config(&config.uart());

    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    // Nothing is ever sent back to the host; TX stays idle
    let (_tx, rx) = uart.split();

    info!("UART initialized at {} baud", config.baudrate);

    // Setup PWM output (configured and enabled by the controller)
    let pwm = Pwm::new_output_b(p.PWM_SLICE4, p.PIN_9, PwmConfig::default());
    let pwm = SlicePwm::new(pwm, PwmChannel::B, config.pwm_top, config.pwm_divider);

    info!(
        "PWM on GPIO{}: top={}, divider={}",
        config.pwm_pin, config.pwm_top, config.pwm_divider
    );

    let controller = DutyController::new(polled(rx), pwm);

    spawner.spawn(tasks::control_task(controller)).unwrap();

    info!("Control task spawned, firmware running");

    // Main task keeps the idle UART TX half alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
