//! deskcalc: pocket calculator and counter in the terminal
//!
//! ## Usage
//!
//! ```bash
//! deskcalc calc "5 + 3 ="          # Replay keys, print the readout
//! deskcalc calc "1+2*3=" --tape    # Also print completed equations
//! deskcalc --format json calc "6/0="
//! deskcalc calc                    # Interactive keypad
//! deskcalc counter "+ + -"         # Replay counter presses
//! deskcalc keypad                  # Print the keypad layout
//! ```

use clap::Parser;
use deskcalc::prelude::*;
use deskcalc_cli::{
    interactive, logging, CalcArgs, Cli, CliConfig, CliResult, ColorChoice, Commands,
    CounterArgs, Printer, Screen, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Calc(args) => run_calc(&config, &args),
        Commands::Counter(args) => run_counter(&config, &args),
        Commands::Keypad => {
            println!("{}", Printer::new(&config).keypad(&Keypad::new())?);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(cli.format.into())
}

fn run_calc(config: &CliConfig, args: &CalcArgs) -> CliResult<()> {
    let printer = Printer::new(config);
    let mut session = CalculatorSession::new();

    match &args.script {
        Some(script) => {
            let actions = parse_calculator_script(script)?;
            replay(&mut session, actions);
            println!("{}", printer.calculator(&session, args.tape)?);
        }
        None => {
            let handler = InputHandler::new();
            let screen = Screen::calculator(config.color.should_color());
            interactive::run(&mut session, &screen, |key| handler.calculator_key(key))?;
            if args.tape {
                for entry in session.tape().iter() {
                    println!("{entry}");
                }
            }
        }
    }
    Ok(())
}

fn run_counter(config: &CliConfig, args: &CounterArgs) -> CliResult<()> {
    let printer = Printer::new(config);
    let mut counter = Counter::new();

    match &args.script {
        Some(script) => {
            let actions = parse_counter_script(script)?;
            replay(&mut counter, actions);
            println!("{}", printer.counter(&counter)?);
        }
        None => {
            let handler = InputHandler::new();
            let screen = Screen::counter(config.color.should_color());
            interactive::run(&mut counter, &screen, |key| handler.counter_key(key))?;
            println!("{}", printer.counter(&counter)?);
        }
    }
    Ok(())
}
