//! CLI entry point for the `bwsearch` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use breadthwise::cli::commands;
use breadthwise::TraverseError;

#[derive(Parser)]
#[command(
    name = "bwsearch",
    about = "bwsearch — breadth-first search over graph and tree documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph document
    Create {
        /// Path to the graph document to create
        file: PathBuf,
    },
    /// Add a vertex to a graph document
    Add {
        /// Path to the graph document
        file: PathBuf,
        /// Vertex value
        value: String,
    },
    /// Add an undirected edge between two vertices
    Link {
        /// Path to the graph document
        file: PathBuf,
        /// First endpoint value
        a: String,
        /// Second endpoint value
        b: String,
    },
    /// Display vertex and edge counts
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Search for a vertex reachable from a start vertex
    Find {
        /// Path to the graph document
        file: PathBuf,
        /// Start vertex value
        start: String,
        /// Value to search for
        target: String,
        /// Search depth-first instead of breadth-first
        #[arg(long)]
        depth_first: bool,
    },
    /// List reachable vertices in breadth-first order
    Order {
        /// Path to the graph document
        file: PathBuf,
        /// Start vertex value
        start: String,
        /// Maximum number of hops
        #[arg(long, default_value_t = u32::MAX)]
        max_depth: u32,
    },
    /// Print the fewest-hop path between two vertices
    Path {
        /// Path to the graph document
        file: PathBuf,
        /// Start vertex value
        start: String,
        /// Target vertex value
        target: String,
    },
    /// Search a tree document
    Tree {
        /// Path to the tree document
        file: PathBuf,
        /// Value to search for
        target: String,
        /// Search depth-first instead of breadth-first
        #[arg(long)]
        depth_first: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Add { file, value } => commands::cmd_add(&file, &value, json),
        Commands::Link { file, a, b } => commands::cmd_link(&file, &a, &b, json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Find {
            file,
            start,
            target,
            depth_first,
        } => commands::cmd_find(&file, &start, &target, depth_first, json),
        Commands::Order {
            file,
            start,
            max_depth,
        } => commands::cmd_order(&file, &start, max_depth, json),
        Commands::Path {
            file,
            start,
            target,
        } => commands::cmd_path(&file, &start, &target, json),
        Commands::Tree {
            file,
            target,
            depth_first,
        } => commands::cmd_tree(&file, &target, depth_first, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            TraverseError::Io(_) => 1,
            TraverseError::Json(_) => 2,
            TraverseError::VertexNotFound(_) | TraverseError::InvalidVertexId(_) => 4,
        };
        process::exit(code);
    }
}
