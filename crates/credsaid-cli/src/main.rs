//! Credsaid CLI - build, address and verify self-addressed credential schemas.

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod output;

use commands::{build, canonicalize, saidify, verify};
use credsaid_canonical::DEFAULT_CODE;
use credsaid_schema::DEFAULT_LABEL;

#[derive(Parser)]
#[command(name = "credsaid")]
#[command(about = "Self-addressing identifiers for credential schemas")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a credential schema from a request and compute its SAIDs
    Build {
        /// Request JSON file (or stdin if not provided)
        input: Option<String>,
        /// Print only the schema document
        #[arg(long)]
        schema_only: bool,
        /// Also write the schema to a file in this directory
        #[arg(long)]
        out_dir: Option<String>,
    },
    /// Self-address an arbitrary JSON document
    Saidify {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Name of the identifier field
        #[arg(long, default_value = DEFAULT_LABEL)]
        label: String,
        /// Digest algorithm code
        #[arg(long, default_value = DEFAULT_CODE)]
        code: String,
        /// JSON pointer of a nested document to address first (repeatable)
        #[arg(long = "pointer")]
        pointers: Vec<String>,
    },
    /// Verify the SAID embedded in a JSON document
    Verify {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Name of the identifier field
        #[arg(long, default_value = DEFAULT_LABEL)]
        label: String,
        /// JSON pointer of a nested document to verify as well (repeatable)
        #[arg(long = "pointer")]
        pointers: Vec<String>,
        /// Exit with error code if any verification fails
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            input,
            schema_only,
            out_dir,
        } => build::run(input, schema_only, out_dir),
        Commands::Saidify {
            input,
            label,
            code,
            pointers,
        } => saidify::run(input, label, code, pointers),
        Commands::Verify {
            input,
            label,
            pointers,
            strict,
            json,
        } => verify::run(input, label, pointers, strict, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
