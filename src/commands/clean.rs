//! Clean command - removes packaged output.

use anyhow::Result;

use crate::clean;
use crate::config::Config;

/// Execute the clean command.
pub fn cmd_clean(config: &Config) -> Result<()> {
    clean::clean_dist(config)
}
