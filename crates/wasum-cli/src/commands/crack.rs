use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{debug, info, warn};
use wasum_core::crack::{Charset, Cracker};

use super::parse_checksum;

/// Forward tables above this many prefixes take noticeable memory.
const LARGE_FORWARD_TABLE: usize = 1 << 24;

#[derive(Debug, Args)]
pub struct CrackCmd {
    /// Checksum to match: signed or unsigned decimal, or 0x-prefixed hex.
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_checksum)]
    target: i32,

    /// Exact length of the input.
    #[arg(short, long)]
    len: usize,

    /// Allowed characters, as literals and ranges.
    #[arg(short, long, default_value = "a-z")]
    charset: String,

    /// Stop after this many solutions.
    #[arg(long)]
    limit: Option<usize>,
}

impl CrackCmd {
    pub fn run(&self) -> Result<()> {
        let charset = Charset::parse(&self.charset)
            .with_context(|| format!("bad --charset {:?}", self.charset))?;

        let mut cracker = Cracker::new(charset, self.len);
        if let Some(limit) = self.limit {
            cracker = cracker.with_limit(limit);
        }

        let states = cracker.forward_states();
        if states >= LARGE_FORWARD_TABLE {
            warn!(states, "forward table is large; consider a smaller charset");
        }
        info!(
            checksum = self.target,
            len = self.len,
            charset = cracker.charset().len(),
            "searching"
        );
        debug!(states, "forward prefixes");

        let started = Instant::now();
        let solutions = cracker.crack(self.target);
        info!(
            found = solutions.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );

        if solutions.is_empty() {
            bail!(
                "no input of length {} over {:?} has checksum {}",
                self.len,
                self.charset,
                self.target
            );
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for solution in &solutions {
            out.write_all(solution)
                .and_then(|()| out.write_all(b"\n"))
                .context("failed to write solution")?;
        }
        Ok(())
    }
}
