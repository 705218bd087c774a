//! The `brocat` command line.
//!
//! Fuzzy lookups against the remote browser/device catalog plus maintenance
//! of the local selection file `brocat.json`.

pub mod cli;
pub mod commands;
pub mod prompt;
pub mod selection;

pub use cli::{Cli, Commands};
pub use commands::{init_tracing, run};
