mod cmd;
mod output;
mod paths;
mod prompts;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{cmd_delete, cmd_demo, cmd_drop, cmd_info, cmd_list, cmd_read, cmd_read_all, cmd_write};
use crate::output::OutputFormat;

/// shelf - JSON document store on the filesystem
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Store root directory (default: $DOCSHELF_ROOT or the user data dir)
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Write a record (JSON from the argument, or stdin if omitted)
  Write {
    collection: String,
    resource: String,
    json: Option<String>,
  },

  /// Print a record
  Read {
    collection: String,
    resource: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Print every record in a collection
  ReadAll {
    collection: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// List records in a collection, or all collections
  List {
    collection: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Delete a record
  Delete { collection: String, resource: String },

  /// Delete a collection and all of its records
  Drop {
    collection: String,

    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
  },

  /// Populate a `users` collection with sample records and exercise the store
  Demo,

  /// Show the store root and per-collection statistics
  Info {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let store = cmd::open_store(&paths::store_root(cli.root), cli.verbose)?;

  match cli.command {
    Commands::Write {
      collection,
      resource,
      json,
    } => cmd_write(&store, &collection, &resource, json),
    Commands::Read {
      collection,
      resource,
      output,
    } => cmd_read(&store, &collection, &resource, output),
    Commands::ReadAll { collection, output } => cmd_read_all(&store, &collection, output),
    Commands::List { collection, output } => cmd_list(&store, collection.as_deref(), output),
    Commands::Delete { collection, resource } => cmd_delete(&store, &collection, &resource),
    Commands::Drop { collection, force } => cmd_drop(&store, &collection, force),
    Commands::Demo => cmd_demo(&store),
    Commands::Info { output } => cmd_info(&store, output),
  }
}
