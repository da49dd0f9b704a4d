//! Preflight checks for the packaging step.
//!
//! Validates that the source tree has every input the rule table needs
//! before packaging starts. Run with `extpack preflight`.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::manifest;
use crate::rules::{default_rules, Transform};
use crate::template;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check failed - packaging will fail.
    Fail,
    /// Check passed but with a warning.
    Warn,
}

impl CheckResult {
    pub fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: None,
        }
    }

    pub fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    pub fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }

    pub fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all preflight checks.
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    /// Count of failed checks.
    pub fn fail_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .count()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let (icon, status_str) = match check.status {
                CheckStatus::Pass => ("✓", "PASS"),
                CheckStatus::Fail => ("✗", "FAIL"),
                CheckStatus::Warn => ("⚠", "WARN"),
            };

            print!("  {} [{}] {}", icon, status_str, check.name);
            if let Some(details) = &check.details {
                println!(": {}", details);
            } else {
                println!();
            }
        }

        println!();
        let total = self.checks.len();
        let passed = self
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count();
        println!("Summary: {}/{} passed", passed, total);
        if self.fail_count() > 0 {
            println!("         {} FAILED - packaging will not succeed", self.fail_count());
        }
    }
}

/// Run all preflight checks against the source tree.
///
/// `vars` is the template variable map packaging would use, so template
/// placeholders can be checked for resolvability up front.
pub fn run_preflight(
    base_dir: &Path,
    config: &Config,
    vars: &HashMap<String, String>,
) -> Result<PreflightReport> {
    let mut checks = Vec::new();

    println!("Running preflight checks...\n");

    checks.push(check_version_source(base_dir, config));

    for rule in default_rules() {
        let input = config.src_dir.join(rule.from);
        let name = format!("input {}", rule.from);

        if !input.exists() {
            checks.push(CheckResult::fail(
                &name,
                &format!("not found at {}", input.display()),
            ));
            continue;
        }

        match rule.transform {
            Transform::Verbatim => {
                if input.is_dir() && dir_is_empty(&input) {
                    checks.push(CheckResult::warn(&name, "directory is empty"));
                } else {
                    checks.push(CheckResult::pass(&name));
                }
            }
            Transform::Template => checks.push(check_template(&name, &input, vars)),
            Transform::Manifest => checks.push(check_manifest(&name, &input)),
        }
    }

    Ok(PreflightReport { checks })
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(
    base_dir: &Path,
    config: &Config,
    vars: &HashMap<String, String>,
) -> Result<()> {
    let report = run_preflight(base_dir, config, vars)?;
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before packaging.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}

fn dir_is_empty(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

/// A version must be resolvable from somewhere before packaging.
fn check_version_source(base_dir: &Path, config: &Config) -> CheckResult {
    if let Some(v) = &config.version {
        return CheckResult::pass_with("version source", &format!("EXT_VERSION={}", v));
    }
    match manifest::package_version(base_dir) {
        Ok(v) => CheckResult::pass_with("version source", &format!("package.json version {}", v)),
        Err(e) => CheckResult::fail(
            "version source",
            &format!("no EXT_VERSION and {:#}", e),
        ),
    }
}

/// Template inputs must parse and every placeholder must be resolvable.
fn check_template(name: &str, input: &Path, vars: &HashMap<String, String>) -> CheckResult {
    let content = match fs::read_to_string(input) {
        Ok(c) => c,
        Err(e) => return CheckResult::fail(name, &format!("unreadable: {}", e)),
    };

    let names = match template::placeholders(&content) {
        Ok(n) => n,
        Err(e) => return CheckResult::fail(name, &format!("{:#}", e)),
    };

    let missing: Vec<&str> = names
        .iter()
        .filter(|n| !vars.contains_key(n.as_str()))
        .map(String::as_str)
        .collect();

    if missing.is_empty() {
        if names.is_empty() {
            CheckResult::pass_with(name, "no placeholders")
        } else {
            CheckResult::pass_with(name, &format!("{} placeholder(s) resolvable", names.len()))
        }
    } else {
        CheckResult::fail(
            name,
            &format!("undefined template variable(s): {}", missing.join(", ")),
        )
    }
}

/// The manifest must be a valid JSON object.
fn check_manifest(name: &str, input: &Path) -> CheckResult {
    let raw = match fs::read(input) {
        Ok(r) => r,
        Err(e) => return CheckResult::fail(name, &format!("unreadable: {}", e)),
    };
    match serde_json::from_slice::<serde_json::Value>(&raw) {
        Ok(doc) if doc.is_object() => CheckResult::pass(name),
        Ok(_) => CheckResult::fail(name, "manifest.json is not a JSON object"),
        Err(e) => CheckResult::fail(name, &format!("invalid JSON: {}", e)),
    }
}
