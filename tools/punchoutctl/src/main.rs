mod commands;
mod format;
mod io;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{catalog::CatalogArgs, decode::DecodeArgs, encode::EncodeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "punchoutctl", about = "Convert OCI punchout form bodies to JSON and back")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a form body into a JSON cart
    Decode(DecodeArgs),
    /// Encode a JSON cart into a form body
    Encode(EncodeArgs),
    /// Print the OCI line-item field catalog
    Catalog(CatalogArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decode(args) => args.run(),
        Commands::Encode(args) => args.run(),
        Commands::Catalog(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
