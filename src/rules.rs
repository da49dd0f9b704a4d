//! Copy rules for the packaging step.
//!
//! Each rule maps one source path to one output path with a transform.
//! The same abstraction covers plain asset copies, templated HTML pages,
//! and the manifest patch, so packaging is a single loop over the table.

/// How a rule's content moves from source to dist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Byte-for-byte copy of a file or directory tree.
    Verbatim,
    /// Render `{{ NAME }}` placeholders from the variable map.
    Template,
    /// Patch the manifest document (version, dev CSP).
    Manifest,
}

impl Transform {
    pub fn describe(self) -> &'static str {
        match self {
            Transform::Verbatim => "verbatim",
            Transform::Template => "template",
            Transform::Manifest => "manifest",
        }
    }
}

/// One packaging rule: copy `from` (relative to the source tree) to `to`
/// (relative to the dist directory), applying `transform`.
#[derive(Debug, Clone)]
pub struct CopyRule {
    pub from: &'static str,
    pub to: &'static str,
    pub transform: Transform,
    /// File names skipped inside a verbatim directory copy.
    pub ignore: &'static [&'static str],
}

impl CopyRule {
    const fn verbatim(from: &'static str, to: &'static str) -> Self {
        Self {
            from,
            to,
            transform: Transform::Verbatim,
            ignore: &[],
        }
    }

    const fn template(from: &'static str, to: &'static str) -> Self {
        Self {
            from,
            to,
            transform: Transform::Template,
            ignore: &[],
        }
    }
}

/// The extension packaging rule table.
///
/// Locale bundles, icons, and sounds are copied as-is (minus the GIMP
/// authoring file); the popup and options pages go through template
/// rendering; manifest.json gets the version/CSP patch.
pub fn default_rules() -> Vec<CopyRule> {
    vec![
        CopyRule::verbatim("_locales", "_locales"),
        CopyRule {
            from: "icons",
            to: "icons",
            transform: Transform::Verbatim,
            ignore: &["icon.xcf"],
        },
        CopyRule::verbatim("sounds", "sounds"),
        CopyRule::template("popup/popup.html", "popup/popup.html"),
        CopyRule::template("options/options.html", "options/options.html"),
        CopyRule {
            from: "manifest.json",
            to: "manifest.json",
            transform: Transform::Manifest,
            ignore: &[],
        },
    ]
}
