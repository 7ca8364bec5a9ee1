//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ColorChoice, OutputFormat};

/// deskcalc: pocket calculator and counter in the terminal
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format for scripted runs
    #[arg(long, default_value = "text", env = "DESKCALC_FORMAT", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the calculator
    ///
    /// With a SCRIPT such as "12.5 * 2 =", replays the keys and prints the
    /// readout. Without one, opens the interactive keypad.
    Calc(CalcArgs),

    /// Run the counter
    ///
    /// With a SCRIPT such as "+ + -", replays the presses and prints the
    /// value. Without one, opens the interactive counter.
    Counter(CounterArgs),

    /// Print the calculator keypad layout
    Keypad,
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Keys to press, e.g. "5 + 3 =" (interactive when omitted)
    #[arg(allow_hyphen_values = true)]
    pub script: Option<String>,

    /// Also print every completed equation
    #[arg(long)]
    pub tape: bool,
}

/// Arguments for the counter command
#[derive(Parser, Debug)]
pub struct CounterArgs {
    /// Presses, e.g. "+ + -" or "inc dec" (interactive when omitted)
    #[arg(allow_hyphen_values = true)]
    pub script: Option<String>,
}

/// Color argument for clap
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Auto-detect
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for clap
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable readout
    #[default]
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
