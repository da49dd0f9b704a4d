//! Preflight command - checks source tree inputs before packaging.

use anyhow::Result;
use std::path::Path;

use crate::commands::pack::process_vars;
use crate::config::Config;
use crate::preflight;

/// Execute the preflight command.
pub fn cmd_preflight(base_dir: &Path, config: &Config, strict: bool) -> Result<()> {
    let vars = process_vars();

    if strict {
        preflight::run_preflight_or_fail(base_dir, config, &vars)
    } else {
        let report = preflight::run_preflight(base_dir, config, &vars)?;
        report.print();
        Ok(())
    }
}
