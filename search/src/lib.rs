//! Brocat fuzzy search library.
//!
//! Matches free-text queries ("iphone 6s", "chrome 47") against the
//! browser/device catalog and returns the canonical records.
//!
//! # Design
//!
//! - Each record is expanded into a searchable terms string weighted so that
//!   common human phrasings score well.
//! - The index is built once per engine from an injected record source. The
//!   fetch runs exactly once; its settled result (index or error) is fanned
//!   out to every waiting and future query.
//! - Scoring uses nucleo's fuzzy matcher. Results below a relative score
//!   cutoff (`good_match_ratio` of the best score) are dropped, then the
//!   list is truncated to the caller's limit.

mod config;
mod engine;
mod index;

pub use config::{CaseMatching, SearchConfig};
pub use engine::{DEFAULT_FILTER_LIMIT, SearchEngine, SearchError};
pub use index::{IndexEntry, build_entries};
