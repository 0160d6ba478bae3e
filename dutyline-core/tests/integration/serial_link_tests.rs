//! Wire-level scenarios: what a host writes and what the pin ends up at.

use dutyline_core::DutyCycle;
use dutyline_hal::PwmOutput;
use dutyline_protocol::encode_command_to_vec;

use crate::mock_hw::{initialized_controller, send_and_tick};

#[test]
fn test_documented_examples() {
    let mut controller = initialized_controller();

    assert_eq!(send_and_tick(&mut controller, b"128\n"), 128);
    assert_eq!(send_and_tick(&mut controller, b"999\n"), 128);
    assert_eq!(send_and_tick(&mut controller, b"\n"), 0);
    assert_eq!(send_and_tick(&mut controller, b"12a3\n"), 123);
}

#[test]
fn test_carriage_return_line_endings() {
    let mut controller = initialized_controller();
    assert_eq!(send_and_tick(&mut controller, b"200\r\n"), 200);
    assert_eq!(send_and_tick(&mut controller, b"1\r2\n"), 12);
}

#[test]
fn test_host_encoder_drives_output() {
    let mut controller = initialized_controller();
    for value in [0u8, 1, 64, 127, 254, 255] {
        let line = encode_command_to_vec(value).unwrap();
        assert_eq!(send_and_tick(&mut controller, &line), value);
    }
}

#[test]
fn test_command_split_across_ticks_applies_on_terminator() {
    let mut controller = initialized_controller();

    assert_eq!(send_and_tick(&mut controller, b"25"), 0);
    assert_eq!(send_and_tick(&mut controller, b""), 0);
    assert_eq!(send_and_tick(&mut controller, b"0"), 0);
    assert_eq!(send_and_tick(&mut controller, b"\n"), 250);
}

#[test]
fn test_tick_drains_entire_fifo() {
    let mut controller = initialized_controller();
    controller.serial_mut().push(b"1\n2\n3\n4");

    let report = controller.tick();

    assert_eq!(report.bytes_consumed, 7);
    assert_eq!(report.commands, 3);
    assert_eq!(controller.serial_mut().pending(), 0);
    assert_eq!(controller.duty_cycle(), DutyCycle::new(3));
    assert_eq!(controller.parser().pending_digits(), 1);
}

#[test]
fn test_zero_padded_long_lines_applied() {
    let mut controller = initialized_controller();
    send_and_tick(&mut controller, b"42\n");

    let mut line = vec![b'0'; 40];
    line.extend_from_slice(b"128\n");
    controller.serial_mut().push(&line);
    let report = controller.tick();

    assert_eq!(report.rejected, 0);
    assert_eq!(report.commands, 1);
    assert_eq!(controller.output().duty(), 128);

    let mut zeros = vec![b'0'; 33];
    zeros.push(b'\n');
    assert_eq!(send_and_tick(&mut controller, &zeros), 0);
}

#[test]
fn test_long_out_of_range_line_ignored() {
    let mut controller = initialized_controller();
    send_and_tick(&mut controller, b"42\n");

    let mut line = vec![b'9'; 40];
    line.push(b'\n');
    controller.serial_mut().push(&line);
    let report = controller.tick();

    assert_eq!(report.rejected, 1);
    assert_eq!(controller.output().duty(), 42);
}

#[test]
fn test_output_written_every_tick() {
    let mut controller = initialized_controller();
    send_and_tick(&mut controller, b"9\n");
    controller.tick();
    controller.tick();

    assert!(controller.output().enabled);
    assert_eq!(controller.output().writes, [0, 9, 9, 9]);
}
