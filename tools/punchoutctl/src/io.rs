use std::{
    fs,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};

/// Open `input`, or stdin when not specified.
pub fn open_input(input: Option<&Path>) -> Result<Box<dyn Read>> {
    Ok(match input {
        Some(path) => Box::new(BufReader::new(
            fs::File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    })
}

/// Create `output`, or use stdout when not specified.
pub fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
