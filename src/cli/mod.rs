//! CLI argument parsing for roadsearch
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, EndpointsArgs, GraphArgs, RouteArgs, SearchArgs};
use parse::parse_format;
pub use roadsearch_core::format::OutputFormat;

/// Roadsearch - compare graph search strategies on road networks
#[derive(Parser, Debug)]
#[command(name = "roadsearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timing to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "roadsearch_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "ROADSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search strategy between two vertices
    Search(SearchArgs),

    /// Run several strategies on the same route and compare them
    Compare(CompareArgs),

    /// Pick a random start/goal pair from a graph
    Endpoints(EndpointsArgs),
}
