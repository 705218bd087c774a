//! Match engine: one-shot catalog loading plus fuzzy query ranking.

use crate::config::{CaseMatching, SearchConfig};
use crate::index::{self, IndexEntry};
use brocat_core::types::Browser;
use futures::FutureExt;
use futures::future::{self, BoxFuture, Shared};
use nucleo::pattern::{AtomKind, CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};
use std::cmp::Reverse;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result cap applied when the caller does not supply one.
pub const DEFAULT_FILTER_LIMIT: usize = 3;

/// Search error type.
///
/// `Clone` so a settled load error can be fanned out to every waiting and
/// future query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("failed to load browsers: {0}")]
    Load(String),

    #[error("catalog source returned no browsers")]
    EmptyCatalog,
}

type LoadResult = Result<Arc<Vec<IndexEntry>>, SearchError>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

/// Fuzzy search engine over the browser/device catalog.
///
/// The index is populated exactly once, from either a ready-made record list
/// or a deferred fetch. Queries issued while the fetch is in flight wait for
/// it to settle; a failed load is cached and surfaced to every later
/// non-empty query. No reload is ever attempted.
pub struct SearchEngine {
    load: SharedLoad,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    /// Creates an engine that loads its index from `fetch`.
    ///
    /// The fetch future is spawned immediately and runs exactly once. Must be
    /// called from within a tokio runtime.
    pub fn new<F, E>(fetch: F, config: SearchConfig) -> Self
    where
        F: Future<Output = Result<Vec<Browser>, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let browsers = fetch
                .await
                .map_err(|err| SearchError::Load(err.to_string()))?;
            build_index(browsers)
        });

        let load = async move {
            match handle.await {
                Ok(result) => result,
                Err(err) => Err(SearchError::Load(err.to_string())),
            }
        }
        .boxed()
        .shared();

        Self { load, config }
    }

    /// Creates an engine over an already-fetched record list.
    ///
    /// The load settles immediately; an empty list settles it as
    /// [`SearchError::EmptyCatalog`].
    pub fn from_records(records: Vec<Browser>, config: SearchConfig) -> Self {
        let load = future::ready(build_index(records)).boxed().shared();
        Self { load, config }
    }
}

/// Query operations.
impl SearchEngine {
    /// Returns up to `limit` records matching `query`, best match first.
    ///
    /// A `None` limit falls back to [`DEFAULT_FILTER_LIMIT`]. An empty query
    /// yields an empty list without waiting on the load and without
    /// surfacing a cached load error.
    pub async fn filter(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Browser>, SearchError> {
        let limit = limit.unwrap_or(DEFAULT_FILTER_LIMIT);
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.load.clone().await?;
        Ok(self.rank(&entries, query, limit))
    }

    /// Returns the single best match, or `None` when nothing matched well
    /// enough.
    pub async fn find_one(&self, query: &str) -> Result<Option<Browser>, SearchError> {
        let results = self.filter(query, Some(1)).await?;
        Ok(results.into_iter().next())
    }

    fn rank(&self, entries: &[IndexEntry], query: &str, limit: usize) -> Vec<Browser> {
        let case_matching = match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let pattern = Pattern::new(query, case_matching, normalization, AtomKind::Fuzzy);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let mut buf = Vec::new();

        let mut matches: Vec<Match<'_>> = entries
            .iter()
            .map(|entry| {
                let haystack = Utf32Str::new(&entry.terms, &mut buf);
                let score = pattern.score(haystack, &mut matcher).unwrap_or(0);
                Match { score, entry }
            })
            .collect();

        // Stable sort: equal scores prefer the shorter terms string, then
        // catalog order.
        matches.sort_by_key(|m| (Reverse(m.score), m.entry.terms.len()));

        debug!(query, candidates = matches.len(), "ranked query");
        shortlist(matches, self.config.good_match_ratio, limit)
    }
}

fn build_index(browsers: Vec<Browser>) -> LoadResult {
    if browsers.is_empty() {
        warn!("catalog source returned no browsers");
        return Err(SearchError::EmptyCatalog);
    }

    let entries = index::build_entries(browsers);
    info!(entries = entries.len(), "catalog indexed");
    Ok(Arc::new(entries))
}

/// Internal ranked pair; only the unwrapped record ever leaves the engine.
pub(crate) struct Match<'a> {
    pub(crate) score: u32,
    pub(crate) entry: &'a IndexEntry,
}

/// Applies the relative-score cutoff and limit to a descending-sorted match
/// list, unwrapping survivors to their records.
///
/// An empty list, or a best score of zero, shortlists nothing.
pub(crate) fn shortlist(
    matches: Vec<Match<'_>>,
    good_match_ratio: f64,
    limit: usize,
) -> Vec<Browser> {
    let top_score = match matches.first() {
        Some(best) if best.score > 0 => best.score as f64,
        _ => return Vec::new(),
    };

    matches
        .iter()
        .filter(|m| m.score as f64 / top_score >= good_match_ratio)
        .take(limit)
        .map(|m| m.entry.browser.clone())
        .collect()
}
