//! CLI argument parsing.

use clap::{Parser, Subcommand};

/// Fuzzy search over the remote browser/device catalog.
#[derive(Parser, Debug)]
#[command(name = "brocat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the browsers saved in brocat.json
    List,

    /// Search the remote catalog
    Search {
        /// Approximate name, e.g. "iphone 6s" or "chrome 47"
        query: Vec<String>,
    },

    /// Search the remote catalog and save the best match to brocat.json
    Add {
        /// Approximate name of the browser or device to add
        query: Vec<String>,
    },

    /// Remove a browser from brocat.json
    Remove {
        /// Approximate name of the saved browser to remove
        query: Vec<String>,
    },
}
