//! Build script for dutyline-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates controller.toml and generates the compiled-in configuration

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use dutyline_core::config::DUTY_LINE_BAUDRATE;
use dutyline_core::ControllerConfig;

/// Pins hardwired in src/main.rs
const BOARD_UART_TX_PIN: u8 = 0;
const BOARD_UART_RX_PIN: u8 = 1;
const BOARD_PWM_PIN: u8 = 9;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate controller.toml at compile time
fn validate_config() -> ControllerConfig {
    println!("cargo:rerun-if-changed=controller.toml");

    let config_path = Path::new("controller.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: controller.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a controller.toml configuration file      ║\n\
            ║  in the dutyline-firmware directory.                             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read controller.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and field types in one pass
    let config: ControllerConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid controller.toml                                  ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    if let Err(e) = config.validate() {
        errors.push(format!("Invalid value: {:?}", e));
    }

    if config.baudrate != DUTY_LINE_BAUDRATE {
        errors.push(format!("baudrate must be {} (fixed link rate)", DUTY_LINE_BAUDRATE));
    }

    if config.uart_tx_pin != BOARD_UART_TX_PIN || config.uart_rx_pin != BOARD_UART_RX_PIN {
        errors.push(format!(
            "UART pins must be tx={} rx={} (board wiring)",
            BOARD_UART_TX_PIN, BOARD_UART_RX_PIN
        ));
    }

    if config.pwm_pin != BOARD_PWM_PIN {
        errors.push(format!("pwm_pin must be {} (board wiring)", BOARD_PWM_PIN));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid controller configuration                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=controller.toml validated successfully");
    config
}

/// Write the validated configuration as a Rust constant
fn generate_config(config: &ControllerConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Configuration compiled from controller.toml\n\
         pub const CONTROLLER_CONFIG: dutyline_core::ControllerConfig = dutyline_core::ControllerConfig {{\n\
         \x20   baudrate: {},\n\
         \x20   uart_tx_pin: {},\n\
         \x20   uart_rx_pin: {},\n\
         \x20   pwm_pin: {},\n\
         \x20   pwm_top: {},\n\
         \x20   pwm_divider: {},\n\
         }};\n",
        config.baudrate,
        config.uart_tx_pin,
        config.uart_rx_pin,
        config.pwm_pin,
        config.pwm_top,
        config.pwm_divider,
    );
    fs::write(out_dir.join("controller_config.rs"), source).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
