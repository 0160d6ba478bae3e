//! Buffered UART receive
//!
//! The interrupt-driven ring buffer of embassy-rp's `BufferedUartRx`
//! collects bytes in the background; the controller polls it through
//! [`PolledRx`] without ever awaiting.

use embassy_rp::uart::{
    BufferedUartRx, Config, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits,
};

use dutyline_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use dutyline_hal::PolledRx;

/// Polled receiver over the buffered UART
pub type BufferedRx = PolledRx<BufferedUartRx>;

/// Wrap a buffered UART receiver for polling
pub fn polled(rx: BufferedUartRx) -> BufferedRx {
    PolledRx::new(rx)
}

/// Convert the shared UART configuration to embassy-rp's
///
/// Flow control is selected by the constructor in embassy-rp, so
/// [`UartConfig::flow_control`] is not carried over.
pub fn to_embassy_config(config: &UartConfig) -> Config {
    let mut cfg = Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    cfg
}
