//! The packaging step: apply the copy-rule table to the source tree.
//!
//! Each rule reads one input under the source directory, runs its
//! transform, and writes under the dist directory. Rules are independent
//! and stateless; the first failed transform aborts packaging.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::common::files::{copy_file_with_dirs, write_file_with_dirs};
use crate::config::{BuildMode, Config};
use crate::manifest;
use crate::rules::{default_rules, CopyRule, Transform};
use crate::template;

/// Run the packaging step: copy and transform every rule input into dist.
///
/// `version` is injected into the manifest; `vars` feeds template
/// rendering. Returns the number of files written.
pub fn pack(
    config: &Config,
    version: &str,
    vars: &HashMap<String, String>,
) -> Result<usize> {
    if version.is_empty() {
        bail!("Refusing to package with an empty version string");
    }
    if !config.src_dir.is_dir() {
        bail!(
            "Extension source directory not found: {}",
            config.src_dir.display()
        );
    }

    fs::create_dir_all(&config.dist_dir).with_context(|| {
        format!("Failed to create dist directory {}", config.dist_dir.display())
    })?;

    let mut written = 0;
    for rule in default_rules() {
        written += apply_rule(&rule, config, version, vars)?;
    }
    Ok(written)
}

/// Apply one rule; returns the number of files it wrote.
fn apply_rule(
    rule: &CopyRule,
    config: &Config,
    version: &str,
    vars: &HashMap<String, String>,
) -> Result<usize> {
    let from = config.src_dir.join(rule.from);
    let to = config.dist_dir.join(rule.to);

    if !from.exists() {
        bail!(
            "Packaging input '{}' not found (expected at {})",
            rule.from,
            from.display()
        );
    }

    match rule.transform {
        Transform::Verbatim => {
            if from.is_dir() {
                let count = copy_tree(&from, &to, rule.ignore)?;
                println!("  copied {}/ ({} files)", rule.from, count);
                Ok(count)
            } else {
                copy_file_with_dirs(&from, &to)
                    .with_context(|| format!("Failed to copy {}", from.display()))?;
                println!("  copied {}", rule.from);
                Ok(1)
            }
        }
        Transform::Template => {
            let content = fs::read_to_string(&from)
                .with_context(|| format!("Failed to read template {}", from.display()))?;
            let rendered = template::render(&content, vars)
                .with_context(|| format!("Failed to render {}", rule.from))?;
            write_file_with_dirs(&to, rendered)
                .with_context(|| format!("Failed to write {}", to.display()))?;
            println!("  rendered {}", rule.from);
            Ok(1)
        }
        Transform::Manifest => {
            let raw = fs::read(&from)
                .with_context(|| format!("Failed to read {}", from.display()))?;
            let patched = manifest::transform(&raw, version, config.mode)
                .with_context(|| format!("Failed to transform {}", rule.from))?;
            write_file_with_dirs(&to, patched)
                .with_context(|| format!("Failed to write {}", to.display()))?;
            println!("  patched {} (version {})", rule.from, version);
            Ok(1)
        }
    }
}

/// Recursively copy a directory tree, skipping ignored file names.
///
/// Symlinked assets are followed and copied by content; a broken link is
/// an error, not a silent skip.
fn copy_tree(from: &Path, to: &Path, ignore: &[&str]) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry
            .with_context(|| format!("Failed to walk directory {}", from.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if ignore.contains(&name.as_ref()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(from)
            .with_context(|| format!("Path escapes source tree: {}", entry.path().display()))?;
        copy_file_with_dirs(entry.path(), to.join(rel))
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        count += 1;
    }
    Ok(count)
}

/// Resolve the version to inject, in precedence order: explicit override,
/// EXT_VERSION from config, package.json.
pub fn resolve_version(
    config: &Config,
    base_dir: &Path,
    override_version: Option<&str>,
) -> Result<String> {
    if let Some(v) = override_version {
        return Ok(v.to_string());
    }
    if let Some(v) = &config.version {
        return Ok(v.clone());
    }
    manifest::package_version(base_dir)
}

/// Resolve the build mode: explicit override, else config.
pub fn resolve_mode(config: &Config, override_mode: Option<BuildMode>) -> BuildMode {
    override_mode.unwrap_or(config.mode)
}
