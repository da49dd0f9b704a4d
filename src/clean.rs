//! Dist directory cleaning.

use anyhow::Result;
use std::fs;

use crate::config::Config;

/// Remove the packaged output directory.
pub fn clean_dist(config: &Config) -> Result<()> {
    if config.dist_dir.exists() {
        println!("Removing {}...", config.dist_dir.display());
        fs::remove_dir_all(&config.dist_dir)?;
        println!("Clean complete.");
    } else {
        println!("Nothing to clean ({} does not exist).", config.dist_dir.display());
    }
    Ok(())
}
