//! rt CLI - rich-text renderer.
//!
//! Provides commands for:
//! - `render`: Render a rich-text JSON document to HTML
//! - `entry`: Fetch an entry and render one of its rich-text fields
//! - `entries`: List entries from the delivery API
//! - `asset`: Show an asset's file URL

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AssetArgs, CommonArgs, EntriesArgs, EntryArgs, RenderArgs};
use output::Output;

/// rt - rich-text renderer.
#[derive(Parser)]
#[command(name = "rt", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render rich-text JSON from a file or stdin.
    Render(RenderArgs),
    /// Fetch an entry and render a rich-text field.
    Entry(EntryArgs),
    /// List entries (first page).
    Entries(EntriesArgs),
    /// Show an asset's file URL.
    Asset(AssetArgs),
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Render(args) => &args.common,
            Self::Entry(args) => &args.common,
            Self::Entries(args) => &args.common,
            Self::Asset(args) => &args.common,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.common().verbose {
        EnvFilter::new("info")
    } else {
        default_filter(std::env::var("RUST_LOG").ok().as_deref())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Entry(args) => args.execute(),
        Commands::Entries(args) => args.execute(),
        Commands::Asset(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter from a `RUST_LOG` value, falling back to WARN when unset or invalid.
fn default_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
