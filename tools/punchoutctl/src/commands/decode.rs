use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Args;
use punchout::{OciSerializer, codec::ErrorPolicy};

use crate::{
    format::OutputFormat,
    io::{open_input, open_output},
};

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to the form body (stdin if not specified)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on the first pair that cannot be decoded instead of skipping it
    #[arg(long)]
    strict: bool,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let policy = if self.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Skip
        };
        let serializer = OciSerializer::with_error_policy(policy)?;
        let cart = serializer.deserialize_reader(open_input(self.input.as_deref())?)?;
        tracing::info!(entries = cart.entries.len(), "decoded punchout body");

        let mut out = open_output(self.output.as_deref())?;
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &cart)?;
                writeln!(out)?;
            }
            OutputFormat::Jsonl => {
                for entry in &cart.entries {
                    serde_json::to_writer(&mut out, entry)?;
                    writeln!(out)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
