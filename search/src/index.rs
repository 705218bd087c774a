//! Searchable terms derived from catalog records.

use brocat_core::types::{Browser, BrowserKind};

/// One indexed record: the searchable terms string plus the record it was
/// built from.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub terms: String,
    pub browser: Browser,
}

/// Builds one entry per record, preserving order. Never fails; records are
/// assumed well-formed upstream.
pub fn build_entries(browsers: Vec<Browser>) -> Vec<IndexEntry> {
    browsers
        .into_iter()
        .map(|browser| IndexEntry {
            terms: search_terms(&browser),
            browser,
        })
        .collect()
}

/// Expands a record into its searchable terms.
///
/// Device entries repeat the `os:version` pair to weight OS tokens higher and
/// append the device's dominant browser so browser-name queries still land on
/// the device. Desktop entries carry both the colon-joined and space-joined
/// forms so "chrome:47" and "chrome 47" match equally well.
fn search_terms(browser: &Browser) -> String {
    let os_term = format!("{}:{}", browser.os, browser.os_version);

    match &browser.kind {
        BrowserKind::Device { device } => {
            format!("{os_term} {device} {os_term} {}", browser.browser)
        }
        BrowserKind::Desktop { browser_version } => {
            let browser_term = format!("{}:{}", browser.browser, browser_version);
            format!(
                "{os_term} {browser_term} {} {}",
                os_term.replacen(':', " ", 1),
                browser_term.replacen(':', " ", 1)
            )
        }
    }
}
