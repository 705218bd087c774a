pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use types::{Browser, BrowserKind};
