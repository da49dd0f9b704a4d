//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `pack` - Run the packaging step
//! - `clean` - Remove the dist directory
//! - `show` - Display information
//! - `preflight` - Check source tree inputs before packaging

pub mod clean;
pub mod pack;
pub mod preflight;
pub mod show;

pub use clean::cmd_clean;
pub use pack::cmd_pack;
pub use preflight::cmd_preflight;
pub use show::cmd_show;
