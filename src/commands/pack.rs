//! Pack command - runs the packaging step.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::config::{BuildMode, Config};
use crate::pack;

/// Execute the pack command.
///
/// `mode` and `version` are CLI overrides; when absent the values come
/// from configuration (and package.json for the version). Template
/// variables are the process environment at invocation time, after any
/// .env file has been loaded.
pub fn cmd_pack(
    base_dir: &Path,
    config: &Config,
    mode: Option<BuildMode>,
    version: Option<&str>,
) -> Result<()> {
    let start = Instant::now();

    let mode = pack::resolve_mode(config, mode);
    let version = pack::resolve_version(config, base_dir, version)?;
    let vars = process_vars();

    let effective = Config {
        mode,
        ..config.clone()
    };

    println!(
        "Packaging {} -> {} ({} build, version {})",
        effective.src_dir.display(),
        effective.dist_dir.display(),
        mode,
        version
    );

    let written = pack::pack(&effective, &version, &vars)?;

    println!(
        "Packaged {} file(s) in {:.2}s",
        written,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Snapshot the process environment as the template variable map.
pub fn process_vars() -> std::collections::HashMap<String, String> {
    std::env::vars().collect()
}
