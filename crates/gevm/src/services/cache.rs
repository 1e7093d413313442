use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;

/// Delete every cached download.
pub fn clear(config: &Config) -> Result<()> {
    let dir = &config.cache_directory;
    if !dir.exists() {
        info!("Cache is already empty");
        return Ok(());
    }

    std::fs::remove_dir_all(dir).with_context(|| format!("Failed to remove {}", dir.display()))?;
    info!("Cleared {}", dir.display());
    Ok(())
}
