use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The whole cart as one JSON document
    Json,
    /// One JSON line item per line
    Jsonl,
}
