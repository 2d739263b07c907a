use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Serve files over http
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Host address to run the server on
    #[arg(short, long, default_value = "localhost")]
    pub address: String,

    /// Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Cap on concurrently served connections; unbounded when omitted
    #[arg(long, value_name = "N")]
    pub max_connections: Option<usize>,

    /// Directory to serve
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
