//! Property tests for the controller's observable behaviour.

use proptest::prelude::*;

use crate::mock_hw::{initialized_controller, send_and_tick};

fn line(value: u32) -> Vec<u8> {
    format!("{}\n", value).into_bytes()
}

proptest! {
    /// Any in-range value sent as digits plus newline reaches the pin on
    /// the next write.
    #[test]
    fn valid_command_reaches_output(value in 0u32..=255) {
        let mut controller = initialized_controller();
        prop_assert_eq!(send_and_tick(&mut controller, &line(value)) as u32, value);
    }

    /// Out-of-range values never change the committed duty cycle.
    #[test]
    fn out_of_range_leaves_duty_unchanged(
        prior in 0u32..=255,
        value in 256u32..=u32::MAX,
    ) {
        let mut controller = initialized_controller();
        send_and_tick(&mut controller, &line(prior));
        prop_assert_eq!(send_and_tick(&mut controller, &line(value)) as u32, prior);
    }

    /// Bytes outside [0-9\n] inside a line are dropped in place.
    #[test]
    fn noise_between_digits_is_dropped(
        value in 0u32..=255,
        noise in proptest::collection::vec(
            any::<u8>().prop_filter("not a digit or terminator", |b| !b.is_ascii_digit() && *b != b'\n'),
            0..8,
        ),
    ) {
        let mut controller = initialized_controller();
        let digits = value.to_string().into_bytes();

        let mut bytes = Vec::new();
        for (i, digit) in digits.iter().enumerate() {
            bytes.push(*digit);
            if let Some(noise_byte) = noise.get(i) {
                bytes.push(*noise_byte);
            }
        }
        bytes.push(b'\n');

        prop_assert_eq!(send_and_tick(&mut controller, &bytes) as u32, value);
    }

    /// Sending the same valid command twice leaves the duty cycle where the
    /// first send put it.
    #[test]
    fn repeated_command_is_idempotent(value in 0u32..=255) {
        let mut controller = initialized_controller();
        let first = send_and_tick(&mut controller, &line(value));
        let second = send_and_tick(&mut controller, &line(value));
        prop_assert_eq!(first, second);
        prop_assert_eq!(controller.duty_cycle().value() as u32, value);
    }

    /// Without a newline, no number of ticks or digits changes the output.
    #[test]
    fn partial_lines_never_commit(
        prior in 0u32..=255,
        chunks in proptest::collection::vec(
            proptest::collection::vec(
                any::<u8>().prop_filter("no terminator", |b| *b != b'\n'),
                0..8,
            ),
            1..16,
        ),
    ) {
        let mut controller = initialized_controller();
        send_and_tick(&mut controller, &line(prior));

        for chunk in chunks {
            prop_assert_eq!(send_and_tick(&mut controller, &chunk) as u32, prior);
        }
    }
}
