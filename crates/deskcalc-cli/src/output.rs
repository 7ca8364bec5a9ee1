//! Output formatting for scripted runs

use console::style;
use serde::Serialize;

use deskcalc::prelude::*;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// JSON document for a calculator run
#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    #[serde(flatten)]
    snapshot: Snapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    tape: Option<Vec<&'a TapeEntry>>,
}

/// Renders widget readouts in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    use_color: bool,
}

impl Printer {
    /// Create a printer from the CLI configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            format: config.format,
            use_color: config.color.should_color(),
        }
    }

    /// Create a printer with explicit settings
    #[must_use]
    pub const fn with_settings(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Render a calculator session, optionally with its tape
    pub fn calculator(&self, session: &CalculatorSession, show_tape: bool) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => {
                let report = CalcReport {
                    snapshot: session.snapshot(),
                    tape: show_tape.then(|| session.tape().iter().collect()),
                };
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Text => {
                let mut lines = Vec::new();
                if show_tape {
                    lines.extend(session.tape().iter().map(ToString::to_string));
                }
                lines.extend(self.readout_lines(&session.readout()));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Render the counter value
    pub fn counter(&self, counter: &Counter) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(counter)?),
            OutputFormat::Text => Ok(self.readout_lines(&counter.readout()).join("\n")),
        }
    }

    /// Render the keypad legend
    pub fn keypad(&self, keypad: &Keypad) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Vec<String>> = keypad
                    .rows()
                    .iter()
                    .map(|row| row.iter().map(|b| b.action.label()).collect())
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Text => Ok(keypad.legend()),
        }
    }

    /// History line (dimmed, skipped when empty) then the display (bold)
    fn readout_lines(&self, readout: &Readout) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if !readout.history.is_empty() {
            lines.push(
                style(&readout.history)
                    .dim()
                    .force_styling(self.use_color)
                    .to_string(),
            );
        }
        lines.push(
            style(&readout.display)
                .bold()
                .force_styling(self.use_color)
                .to_string(),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> CalculatorSession {
        let mut session = CalculatorSession::new();
        replay(&mut session, parse_calculator_script(script).unwrap());
        session
    }

    fn text() -> Printer {
        Printer::with_settings(OutputFormat::Text, false)
    }

    fn json() -> Printer {
        Printer::with_settings(OutputFormat::Json, false)
    }

    #[test]
    fn test_text_readout() {
        let out = text().calculator(&session("5 + 3 ="), false).unwrap();
        assert_eq!(out, "5 + 3\n8");
    }

    #[test]
    fn test_text_skips_empty_history() {
        let out = text().calculator(&session("42"), false).unwrap();
        assert_eq!(out, "42");
    }

    #[test]
    fn test_text_with_tape() {
        let out = text().calculator(&session("1 + 1 = * 3 ="), true).unwrap();
        assert_eq!(out, "1 + 1 = 2\n2 × 3 = 6\n2 × 3\n6");
    }

    #[test]
    fn test_json_snapshot() {
        let out = json().calculator(&session("6 / 0 ="), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["display"], "Infinity");
        assert_eq!(value["history"], "6 ÷ 0");
        assert_eq!(value["state"], "idle");
        assert!(value.get("tape").is_none());
    }

    #[test]
    fn test_json_with_tape() {
        let out = json().calculator(&session("2 * 4 ="), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tape"][0]["result"], 8.0);
        assert_eq!(value["tape"][0]["operation"], "multiply");
    }

    #[test]
    fn test_counter_formats() {
        let mut counter = Counter::new();
        counter.decrement();
        assert_eq!(text().counter(&counter).unwrap(), "-1");
        let value: serde_json::Value =
            serde_json::from_str(&json().counter(&counter).unwrap()).unwrap();
        assert_eq!(value["value"], -1);
    }

    #[test]
    fn test_keypad_json_rows() {
        let out = json().keypad(&Keypad::new()).unwrap();
        let rows: Vec<Vec<String>> = serde_json::from_str(&out).unwrap();
        assert_eq!(rows.len(), Keypad::ROWS);
        assert_eq!(rows[0], vec!["Clear", "÷", "×"]);
        assert_eq!(rows[4], vec!["0", ".", "="]);
    }

    #[test]
    fn test_colored_output_has_escape_codes() {
        let printer = Printer::with_settings(OutputFormat::Text, true);
        let out = printer.calculator(&session("7"), false).unwrap();
        assert!(out.contains('\u{1b}'));
    }
}
