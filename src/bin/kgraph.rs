//! CLI entry point for the `kgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kind_graph::cli::commands;

#[derive(Parser)]
#[command(
    name = "kgraph",
    about = "kind-graph CLI — run operation scripts against a typed-edge graph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Print a summary of the final graph to stderr
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an operation script against a fresh graph
    Run {
        /// Path to the script, or "-" for stdin
        script: PathBuf,
    },
    /// Run the built-in sample session
    Demo,
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "text" => false,
        "json" => true,
        other => {
            eprintln!("Invalid format: {}", other);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run { script } => commands::cmd_run(&script, json, cli.verbose),
        Commands::Demo => commands::cmd_demo(json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
