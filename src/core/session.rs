use crate::core::calculator::{calculate, parse_operand};
use crate::core::{ConfigProvider, Console, Result};
use crate::utils::format::format_result;

/// What a single session printed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(f64),
    Failure(String),
}

/// One prompt-compute-print round over a [`Console`].
pub struct Session<C: Console, P: ConfigProvider> {
    console: C,
    prompts: P,
}

impl<C: Console, P: ConfigProvider> Session<C, P> {
    pub fn new(console: C, prompts: P) -> Self {
        Self { console, prompts }
    }

    /// Collects both operands and the operator, then calculates.
    /// Stops at the first failure; later prompts are not shown.
    pub fn run(&mut self) -> Result<f64> {
        let first = self.console.prompt(self.prompts.first_operand_prompt())?;
        let a = parse_operand(&first)?;

        let op = self.console.prompt(self.prompts.operator_prompt())?;
        let op = op.trim();

        let second = self.console.prompt(self.prompts.second_operand_prompt())?;
        let b = parse_operand(&second)?;

        tracing::debug!("Calculating {} {} {}", a, op, b);
        calculate(a, op, b)
    }

    /// Runs the session and prints exactly one `Result:` or `Error:` line.
    /// Every error kind is rendered the same way. If that line cannot be
    /// written the outcome is a failure carrying the write error.
    pub fn run_and_report(&mut self) -> Outcome {
        let (line, outcome) = match self.run() {
            Ok(value) => (
                format!("Result: {}", format_result(value)),
                Outcome::Success(value),
            ),
            Err(e) => {
                tracing::debug!("Calculation failed (kind: {}): {}", e.kind(), e);
                let message = e.to_string();
                (format!("Error: {}", message), Outcome::Failure(message))
            }
        };

        match self.console.print_line(&line) {
            Ok(()) => outcome,
            Err(e) => {
                tracing::error!("Failed to write output (kind: {}): {}", e.kind(), e);
                Outcome::Failure(e.to_string())
            }
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }
}
