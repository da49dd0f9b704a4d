//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::rules::default_rules;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the packaging rule table
    Rules,
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Rules => {
            println!("Packaging rules:");
            for rule in default_rules() {
                if rule.ignore.is_empty() {
                    println!("  {} -> {} [{}]", rule.from, rule.to, rule.transform.describe());
                } else {
                    println!(
                        "  {} -> {} [{}] (ignoring {})",
                        rule.from,
                        rule.to,
                        rule.transform.describe(),
                        rule.ignore.join(", ")
                    );
                }
            }
        }
    }
    Ok(())
}
