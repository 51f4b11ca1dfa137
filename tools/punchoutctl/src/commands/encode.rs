use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Args;
use punchout::{OciSerializer, Punchout, PunchoutEntry, core::Record};

use crate::io::{open_input, open_output};

#[derive(Args)]
pub struct EncodeArgs {
    /// Path to the JSON cart (stdin if not specified)
    input: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number items by their position in the cart instead of their ids
    #[arg(long)]
    positional: bool,
}

impl EncodeArgs {
    pub fn run(self) -> Result<()> {
        let cart: Punchout = serde_json::from_reader(open_input(self.input.as_deref())?)?;
        let serializer = OciSerializer::new()?;

        let body = if self.positional {
            let records: Vec<Record> = cart.entries.iter().map(PunchoutEntry::to_record).collect();
            serializer.codec().encode_positional(&records)
        } else {
            serializer.serialize(&cart)
        };
        tracing::info!(entries = cart.entries.len(), bytes = body.len(), "encoded punchout cart");

        let mut out = open_output(self.output.as_deref())?;
        writeln!(out, "{body}")?;
        out.flush()?;
        Ok(())
    }
}
