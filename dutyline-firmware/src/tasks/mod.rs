//! Embassy async tasks
//!
//! A single task owns the controller; nothing is shared between tasks.

pub mod control;

pub use control::{control_task, Controller};
