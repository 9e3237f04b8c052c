//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    types::{AgentsMdConfig, CliOverrides, ResolvedConfig},
    ConfigResult,
};
use agentsmd_common::{Pretty, RunContext};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "AGENTSMD_";

/// Loads [`ResolvedConfig`] from all sources
///
/// Nothing is cached; each [`load`](Self::load) reads the sources afresh.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    ctx: RunContext,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    /// Provider discovering config files in the context's working directory
    pub fn new(ctx: RunContext) -> Self {
        Self {
            ctx,
            explicit_file: None,
        }
    }

    /// Use this file instead of discovery
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.explicit_file = Some(self.ctx.resolve(path));
        self
    }

    /// Merge every source and resolve paths
    ///
    /// # Errors
    ///
    /// Fails if an explicit config file is missing or any source holds a
    /// value of the wrong type, such as `mode = "fancy"`.
    pub fn load(&self, overrides: &CliOverrides) -> ConfigResult<ResolvedConfig> {
        let config: AgentsMdConfig = self.build_figment(overrides)?.extract()?;
        let resolved = config.resolve(&self.ctx);
        debug!("Resolved configuration: {}", Pretty(&resolved));
        Ok(resolved)
    }

    /// Build the figment with sources in precedence order
    fn build_figment(&self, overrides: &CliOverrides) -> ConfigResult<Figment> {
        debug!("Building figment configuration with precedence order");

        let mut figment = Figment::from(Serialized::defaults(AgentsMdConfig::default()));
        for file in self.config_files()? {
            figment = figment.merge(Self::load_config_file(&file));
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides)))
    }

    fn config_files(&self) -> ConfigResult<Vec<ConfigFile>> {
        match &self.explicit_file {
            Some(path) => {
                trace!("Using explicit config file {}", path.display());
                Ok(vec![ConfigFile::explicit(path.clone())?])
            }
            None => Ok(FileDiscovery::new(self.ctx.working_dir()).discover_all()),
        }
    }

    fn load_config_file(config_file: &ConfigFile) -> Figment {
        let path = &config_file.path;
        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }
}
