//! ---
//! nrpc_section: "03-configuration"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Configuration loading for the version tooling."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use nanorpc_logging::LogFormat;
use nanorpc_version::HandshakePolicy;
use serde::{Deserialize, Serialize};

/// Configuration for `nanorpcctl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub handshake: HandshakeConfig,
}

/// Metadata describing where a [`ToolConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedToolConfig {
    pub config: ToolConfig,
    /// `None` when no file was found and defaults apply.
    pub source: Option<PathBuf>,
}

impl ToolConfig {
    pub const ENV_CONFIG_PATH: &'static str = "NANORPC_CONFIG";

    /// Load configuration, respecting the `NANORPC_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration together with the effective source path.
    ///
    /// Falls back to defaults when no candidate exists. A path named by
    /// `NANORPC_CONFIG` must exist.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedToolConfig> {
        let env_path = std::env::var(Self::ENV_CONFIG_PATH).ok();
        Self::resolve(env_path.as_deref(), candidates)
    }

    /// Blank overrides count as unset.
    fn resolve<P: AsRef<Path>>(
        override_path: Option<&str>,
        candidates: &[P],
    ) -> Result<LoadedToolConfig> {
        if let Some(env_path) = override_path {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedToolConfig {
                    config,
                    source: Some(path),
                });
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedToolConfig {
                    config,
                    source: Some(path.to_path_buf()),
                });
            }
        }

        Ok(LoadedToolConfig {
            config: Self::default(),
            source: None,
        })
    }

    /// Read, parse and validate a single file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<ToolConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

/// Logging section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive, e.g. `debug` or `nanorpc=trace`.
    #[serde(default)]
    pub filter: Option<String>,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match &self.filter {
            Some(filter) if filter.trim().is_empty() => {
                Err(anyhow!("logging.filter cannot be empty; omit it instead"))
            }
            _ => Ok(()),
        }
    }
}

/// What `show` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Bare `major.minor.patch`.
    #[default]
    Text,
    /// JSON object with the components and the string.
    Json,
    /// Banner plus build metadata.
    Extended,
}

/// Output section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Handshake section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeConfig {
    #[serde(default)]
    pub policy: HandshakePolicy,
}
