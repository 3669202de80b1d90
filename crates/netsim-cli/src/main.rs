//! Netsim CLI - inspect and edit routing topology files.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netsim")]
#[command(author, version, about = "Netsim - routing topologies and forwarding tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default netsim.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print the forwarding table of a node
    Table {
        /// Topology file
        file: String,
        /// Source node
        node: String,
    },

    /// Print the laid-out position of every node
    Positions {
        /// Topology file
        file: String,
    },

    /// Find the node at a coordinate
    LocateNode {
        file: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Find the edge nearest to a coordinate
    LocateEdge {
        file: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Add or reweight an edge and save the file
    AddEdge {
        file: String,
        from: String,
        to: String,
        weight: u32,
    },

    /// Delete a node and its edges and save the file
    DeleteNode {
        file: String,
        name: String,
    },

    /// Delete an edge and save the file
    DeleteEdge {
        file: String,
        from: String,
        to: String,
    },

    /// Show topology statistics
    Stats {
        /// Topology file
        file: String,
    },

    /// Export a JSON snapshot with positions
    Export {
        /// Topology file
        file: String,
        /// Output file path
        output: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Table { file, node } => commands::table::run(&file, &node),
        Commands::Positions { file } => commands::locate::positions(&file),
        Commands::LocateNode { file, x, y } => commands::locate::node(&file, x, y),
        Commands::LocateEdge { file, x, y } => commands::locate::edge(&file, x, y),
        Commands::AddEdge { file, from, to, weight } => {
            commands::edit::add_edge(&file, &from, &to, weight)
        }
        Commands::DeleteNode { file, name } => commands::edit::delete_node(&file, &name),
        Commands::DeleteEdge { file, from, to } => commands::edit::delete_edge(&file, &from, &to),
        Commands::Stats { file } => commands::stats::run(&file),
        Commands::Export { file, output } => commands::export::run(&file, &output),
    }
}
