//! Duty-cycle control task
//!
//! Runs the controller loop: drain the serial link, write the PWM output,
//! yield, repeat. `tick()` itself never awaits, so the yield is the only
//! point where other tasks get the core.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Duration, Instant};

use dutyline_core::DutyController;
use dutyline_hal_rp2040::pwm::SlicePwm;
use dutyline_hal_rp2040::uart::BufferedRx;

/// Controller wired to the RP2040 peripherals
pub type Controller = DutyController<BufferedRx, SlicePwm<'static>>;

/// Interval between periodic status traces
const STATUS_INTERVAL: Duration = Duration::from_secs(10);

/// Control task - owns the controller for the lifetime of the firmware
#[embassy_executor::task]
pub async fn control_task(mut controller: Controller) {
    info!("Control task started");

    controller.initialize();
    info!("PWM output enabled, duty cycle {}", controller.duty_cycle().value());

    let mut last_status = Instant::now();
    let mut bytes_since_status: u32 = 0;
    let mut rx_errors = controller.serial_mut().error_count();

    loop {
        let report = controller.tick();
        bytes_since_status = bytes_since_status.wrapping_add(report.bytes_consumed);

        if report.changed {
            debug!(
                "Duty cycle -> {} ({}%)",
                report.duty.value(),
                report.duty.percent()
            );
        }

        let errors = controller.serial_mut().error_count();
        if errors != rx_errors {
            warn!("UART receive errors: {}", errors.wrapping_sub(rx_errors));
            rx_errors = errors;
        }

        if last_status.elapsed() >= STATUS_INTERVAL {
            trace!(
                "Status: duty={} rx_bytes={} pending_digits={}",
                controller.duty_cycle().value(),
                bytes_since_status,
                controller.parser().pending_digits()
            );
            bytes_since_status = 0;
            last_status = Instant::now();
        }

        yield_now().await;
    }
}
