//! The local browser selection file (`brocat.json`).

use anyhow::{Context, Result};
use brocat_core::types::Browser;
use std::path::Path;

/// Selection file name, looked up in the working directory.
pub const SELECTION_FILE: &str = "brocat.json";

/// Loads the saved selection. A missing file is an empty selection.
pub fn load(path: &Path) -> Result<Vec<Browser>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

/// Saves the selection as pretty-printed JSON.
pub fn save(path: &Path, browsers: &[Browser]) -> Result<()> {
    let data = serde_json::to_string_pretty(browsers)?;
    std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))
}
