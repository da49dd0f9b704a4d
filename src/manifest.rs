//! Extension manifest transform.
//!
//! Rewrites manifest.json during packaging: injects the package version
//! and, for development builds, relaxes the content security policy so
//! reload tooling can eval injected scripts. Every field not explicitly
//! touched is preserved.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;

use crate::config::BuildMode;

/// Content security policy applied to development builds.
///
/// Permits self-origin scripts plus dynamic evaluation, which the reload
/// tooling needs to swap code into a running extension.
pub const DEV_CONTENT_SECURITY_POLICY: &str =
    "script-src 'self' 'unsafe-eval'; object-src 'self'";

/// Transform raw manifest.json content for packaging.
///
/// Overwrites `version` with the supplied string. In development mode,
/// overwrites `content_security_policy` with the relaxed policy; in
/// production the field is left exactly as the source manifest had it
/// (absent stays absent). Output is pretty-printed for reviewability.
///
/// The version string is injected as-is; callers are expected to supply
/// well-formed version text.
pub fn transform(raw: &[u8], version: &str, mode: BuildMode) -> Result<String> {
    let mut doc: Value =
        serde_json::from_slice(raw).context("manifest.json is not valid JSON")?;
    let fields = doc
        .as_object_mut()
        .ok_or_else(|| anyhow!("manifest.json must be a JSON object"))?;

    fields.insert("version".to_string(), json!(version));

    if mode.is_development() {
        fields.insert(
            "content_security_policy".to_string(),
            json!(DEV_CONTENT_SECURITY_POLICY),
        );
    }

    let out = serde_json::to_string_pretty(&doc)?;
    Ok(out)
}

/// The slice of package.json the packager cares about.
#[derive(Debug, Deserialize)]
struct PackageJson {
    version: String,
}

/// Read the extension's version from package.json in the project root.
///
/// This is the default version source for packaging; EXT_VERSION or
/// `pack --version` override it.
pub fn package_version(base_dir: &Path) -> Result<String> {
    let path = base_dir.join("package.json");
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let pkg: PackageJson = serde_json::from_str(&content)
        .with_context(|| format!("No usable 'version' string in {}", path.display()))?;
    Ok(pkg.version)
}
