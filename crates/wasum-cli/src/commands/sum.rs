use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use wasum_core::checksum_input;

use super::Format;

#[derive(Debug, Args)]
pub struct SumCmd {
    /// Input text. Each line of stdin is summed when omitted.
    text: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Signed)]
    format: Format,
}

impl SumCmd {
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if let Some(text) = &self.text {
            return self.emit(&mut out, text);
        }

        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            self.emit(&mut out, &line)?;
        }
        Ok(())
    }

    fn emit(&self, out: &mut impl Write, text: &str) -> Result<()> {
        if text.as_bytes().contains(&0) {
            debug!("input contains a zero byte; the checksum stops there");
        }
        let value = checksum_input(text.as_bytes());
        writeln!(out, "{}", self.format.render(value)).context("failed to write checksum")
    }
}
