//! Run configuration for agentsmd using Figment
//!
//! Settings are merged from several sources, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A project config file in the working directory (`agentsmd.toml`,
//!    `.agentsmd.toml`, `agentsmd.yaml`, `.agentsmd.yaml`) or an explicit
//!    `--config` file
//! 3. `AGENTSMD_`-prefixed environment variables
//! 4. Command-line flags that were actually given
//!
//! Relative paths are resolved against the [`RunContext`] passed in, never
//! against the process working directory.
//!
//! ```no_run
//! use agentsmd_common::RunContext;
//! use agentsmd_config::{CliOverrides, ConfigProvider};
//!
//! let ctx = RunContext::from_current_dir()?;
//! let config = ConfigProvider::new(ctx).load(&CliOverrides::default())?;
//! println!("writing {}", config.out.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Example TOML configuration
//!
//! ```toml
//! out = "docs/AGENTS.md"
//! mode = "reference"
//! write_mode = "append"
//! backup = false
//! ```

#![warn(missing_docs)]

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use agentsmd_common::RunContext;
pub use discovery::{ConfigFile, ConfigFormat, FileDiscovery, CONFIG_FILE_NAMES};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{AgentsMdConfig, CliOverrides, ResolvedConfig};

/// Resolve configuration for `ctx` with the given overrides
///
/// Convenience wrapper around [`ConfigProvider`].
pub fn load_configuration(
    ctx: &RunContext,
    overrides: &CliOverrides,
    explicit_file: Option<&std::path::Path>,
) -> ConfigResult<ResolvedConfig> {
    let mut provider = ConfigProvider::new(ctx.clone());
    if let Some(path) = explicit_file {
        provider = provider.with_config_file(path);
    }
    provider.load(overrides)
}

#[cfg(test)]
mod tests;
