use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dgn", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (defaults to the configured level)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Graph file to operate on (defaults to the configured graph file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for command results
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the raw contents of the graph file
    ShowFile,
    /// Print the adjacency list and adjacency matrix
    ShowGraph,
    /// Summary counts and totals
    Stats,
    /// Insert a city, or overwrite an existing one
    InsertVertex {
        /// City id
        id: usize,
        /// City name
        name: String,
        /// City weight (consumption)
        #[arg(allow_negative_numbers = true)]
        weight: f64,
    },
    /// Insert a directed link, or overwrite its weight
    InsertEdge {
        /// Source city id
        src: usize,
        /// Destination city id
        dst: usize,
        /// Link cost
        #[arg(allow_negative_numbers = true)]
        weight: f64,
    },
    /// Remove a city and every link touching it
    RemoveVertex {
        /// City id
        id: usize,
    },
    /// Remove a directed link
    RemoveEdge {
        /// Source city id
        src: usize,
        /// Destination city id
        dst: usize,
    },
    /// Classify connectivity (C3 strong, C2 weak, C1 semi-strong, C0 disconnected)
    Connectivity,
    /// Minimum-cost path between two cities (Dijkstra)
    ShortestPath {
        /// Source city id
        src: usize,
        /// Destination city id
        dst: usize,
    },
    /// Minimum costs between every pair of cities (Floyd-Warshall)
    AllPairs,
    /// Check whether a closed walk can use every link exactly once
    Eulerian,
    /// In and out degree of every city
    Degrees,
    /// Group cities with greedy largest-first coloring
    Coloring,
    /// Save the graph to another file
    Save {
        /// Destination path
        #[arg(long)]
        to: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
