//! Command implementations.

use crate::cli::{Cli, Commands};
use crate::{prompt, selection};
use anyhow::{Context, Result};
use brocat_core::cache::FileCache;
use brocat_core::client::RestClient;
use brocat_core::config::{AppConfig, CacheConfig, Credentials};
use brocat_core::source::BrowserSource;
use brocat_core::types::Browser;
use brocat_search::{SearchConfig, SearchEngine};
use std::path::Path;
use tracing::debug;

/// Result cap for the `search` listing.
const SEARCH_LIMIT: usize = 50;

const USAGE_HINT: &str = "Please enter [device] os:os_version [browser:browser_version]";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over the `--log-level` flag; without either, only
/// warnings and errors are shown.
pub fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let fallback = log_level.unwrap_or("warn");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}

/// Dispatches a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => list(),
        Commands::Search { query } => search(&join_query(query)).await,
        Commands::Add { query } => add(&join_query(query)).await,
        Commands::Remove { query } => remove(&join_query(query)).await,
    }
}

fn join_query(parts: Vec<String>) -> String {
    parts.join(" ").trim().to_string()
}

fn list() -> Result<()> {
    let browsers = selection::load(Path::new(selection::SELECTION_FILE))?;
    println!("{}", serde_json::to_string_pretty(&browsers)?);
    Ok(())
}

async fn search(query: &str) -> Result<()> {
    if query.is_empty() {
        println!("{USAGE_HINT}");
        return Ok(());
    }

    let engine = catalog_engine()?;
    let browsers = engine.filter(query, Some(SEARCH_LIMIT)).await?;

    if browsers.is_empty() {
        println!("Could not find \"{query}\" in the browser catalog.");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&browsers)?);
    Ok(())
}

async fn add(query: &str) -> Result<()> {
    if query.is_empty() {
        println!("{USAGE_HINT}");
        return Ok(());
    }

    let engine = catalog_engine()?;
    let Some(browser) = engine.find_one(query).await? else {
        println!("Could not find \"{query}\" in the browser catalog.");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&browser)?);
    if !prompt::ask("Add to brocat.json?", false)? {
        println!("Skipped.");
        return Ok(());
    }

    let path = Path::new(selection::SELECTION_FILE);
    let mut browsers = selection::load(path)?;
    if browsers.contains(&browser) {
        println!("Already present in {}.", selection::SELECTION_FILE);
        return Ok(());
    }

    browsers.push(browser);
    selection::save(path, &browsers)?;
    println!("Added.");
    Ok(())
}

async fn remove(query: &str) -> Result<()> {
    if query.is_empty() {
        println!("{USAGE_HINT}");
        return Ok(());
    }

    let path = Path::new(selection::SELECTION_FILE);
    let browsers = selection::load(path)?;
    if browsers.is_empty() {
        println!("{} has no saved browsers.", selection::SELECTION_FILE);
        return Ok(());
    }

    let engine = SearchEngine::from_records(browsers.clone(), SearchConfig::default());
    let Some(browser) = engine.find_one(query).await? else {
        println!(
            "Could not find \"{query}\" in {}.",
            selection::SELECTION_FILE
        );
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&browser)?);
    if !prompt::ask("Remove from brocat.json?", false)? {
        println!("Kept.");
        return Ok(());
    }

    let remaining: Vec<Browser> = browsers.into_iter().filter(|b| *b != browser).collect();
    selection::save(path, &remaining)?;
    println!("Removed.");
    Ok(())
}

/// Builds the search engine over the cache-first catalog source.
fn catalog_engine() -> Result<SearchEngine> {
    let config_path = AppConfig::default_path()?;
    let config = AppConfig::load(&config_path)?;
    for problem in config.validate() {
        tracing::warn!(%problem, "invalid config value, using default");
    }
    let config = config.with_defaults_for_invalid();
    debug!(endpoint = %config.api.endpoint, "using catalog endpoint");

    let credentials = Credentials::from_env()?;
    let client = RestClient::new(
        config.api.endpoint.as_str(),
        credentials.username,
        credentials.access_key,
    )?;
    let cache = FileCache::new(config.cache.expiry());
    let source = BrowserSource::new(cache, CacheConfig::default_cache_path()?, client);

    let search_config = SearchConfig {
        good_match_ratio: config.search.good_match_ratio,
        ..SearchConfig::default()
    };
    Ok(SearchEngine::new(source.into_fetch(), search_config))
}
