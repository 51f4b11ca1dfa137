use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use punchout::{core::format_field_defs, oci_item_fields};

#[derive(Args)]
pub struct CatalogArgs {
    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn run(self) -> Result<()> {
        let text = format_field_defs(oci_item_fields())?;

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
