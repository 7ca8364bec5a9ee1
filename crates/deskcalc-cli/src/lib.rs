//! deskcalc CLI library
//!
//! Command-line front end for the deskcalc widgets: scripted runs with
//! text or JSON output, and an interactive raw-mode keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod interactive;
pub mod logging;
mod output;

pub use commands::{CalcArgs, Cli, ColorArg, Commands, CounterArgs, FormatArg};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use interactive::Screen;
pub use output::Printer;
