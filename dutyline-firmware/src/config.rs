//! Compiled-in controller configuration
//!
//! Generated by build.rs from controller.toml.

include!(concat!(env!("OUT_DIR"), "/controller_config.rs"));
