use std::io;

use anyhow::Result;
use dgn_cli::OutputFormat;
use serde::Serialize;

pub mod analyze;
pub mod completions;
pub mod edit;
pub mod show;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    /// Decimal places for costs in plain output
    pub precision: usize,
}

impl Output {
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn json(&self, value: &impl Serialize) -> Result<()> {
        serde_json::to_writer_pretty(io::stdout(), value)
            .map_err(|err| anyhow::anyhow!("serializing output to JSON: {err}"))?;
        println!();
        Ok(())
    }

    pub fn cost(&self, cost: f64) -> String {
        format!("{cost:.prec$}", prec = self.precision)
    }
}
