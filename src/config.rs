//! Configuration management for extpack.
//!
//! Reads configuration from .env file and environment variables.
//! Environment variables take precedence over .env file.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Build mode for the packaging step.
///
/// Development builds get a relaxed content security policy so reload
/// tooling can inject and eval scripts; production builds ship the
/// manifest's own policy untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Parse a mode string. Accepts the long form and the common short form.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => bail!(
                "Invalid build mode '{}' (expected 'development' or 'production')",
                other
            ),
        }
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

/// Extpack configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Extension source tree (default: src)
    pub src_dir: PathBuf,
    /// Output directory for the packaged extension (default: dist)
    pub dist_dir: PathBuf,
    /// Build mode (default: production)
    pub mode: BuildMode,
    /// Version override; when unset the version comes from package.json
    pub version: Option<String>,
}

impl Config {
    /// Load configuration from .env file and environment.
    ///
    /// Recognized keys: EXT_SRC_DIR, EXT_DIST_DIR, EXT_BUILD_MODE,
    /// EXT_VERSION. Relative paths are resolved against `base_dir`.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let mut env_vars = HashMap::new();

        // Try to load .env file
        let env_path = base_dir.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    // Skip comments and empty lines
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    // Parse KEY=value
                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim();
                        // Remove quotes if present
                        let value = value.trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        let resolve = |s: &str| {
            let path = PathBuf::from(s);
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };

        let src_dir = env_vars
            .get("EXT_SRC_DIR")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join("src"));

        let dist_dir = env_vars
            .get("EXT_DIST_DIR")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join("dist"));

        let mode = match env_vars.get("EXT_BUILD_MODE") {
            Some(s) => BuildMode::parse(s)?,
            None => BuildMode::Production,
        };

        let version = env_vars.get("EXT_VERSION").cloned();

        Ok(Self {
            src_dir,
            dist_dir,
            mode,
            version,
        })
    }

    /// Check if the extension source tree is present.
    pub fn has_src_dir(&self) -> bool {
        self.src_dir.join("manifest.json").exists()
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  EXT_SRC_DIR: {}", self.src_dir.display());
        println!("  EXT_DIST_DIR: {}", self.dist_dir.display());
        println!("  EXT_BUILD_MODE: {}", self.mode);
        match &self.version {
            Some(v) => println!("  EXT_VERSION: {}", v),
            None => println!("  EXT_VERSION: (from package.json)"),
        }
        if self.has_src_dir() {
            println!("  Extension source: FOUND");
        } else {
            println!(
                "  Extension source: NOT FOUND (no manifest.json in {})",
                self.src_dir.display()
            );
        }
    }
}
