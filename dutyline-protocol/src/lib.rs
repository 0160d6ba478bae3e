//! Duty-Cycle Command Protocol
//!
//! This crate defines the serial protocol between a host and the Dutyline
//! controller. A command is plain ASCII:
//!
//! ```text
//! ┌──────────────┬──────┐
//! │ DIGITS       │ '\n' │
//! │ [0-9]*       │ 1B   │
//! └──────────────┴──────┘
//! ```
//!
//! The decimal value must lie in 0-255. Bytes outside `[0-9\n]` are dropped
//! where they appear and do not split the line. There is no framing,
//! checksum, or acknowledgment; a bad line is simply discarded.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;

pub use command::{encode_command, encode_command_to_vec, Command, EncodeError, MAX_COMMAND_SIZE};
pub use line::{CommandError, LineParser, LINE_TERMINATOR};
