//! Configuration loading facade: layered sources with fixed precedence.

use super::{merge, sources, LinkbackConfig};
use crate::error::ConfigError;
use config::{Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration for an annotation run.
///
/// Precedence, lowest to highest: registered defaults, the global file under
/// the user config directory, `linkback.toml` in the project root,
/// `LINKBACK_*` environment variables, and finally the host-supplied table
/// from the build request.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for a project root.
    pub fn load(project_root: &Path) -> Result<LinkbackConfig, ConfigError> {
        Self::load_with_overrides(project_root, None)
    }

    /// Load layered configuration with the host's table merged on top.
    pub fn load_with_overrides(
        project_root: &Path,
        host_table: Option<&serde_json::Value>,
    ) -> Result<LinkbackConfig, ConfigError> {
        let mut builder = merge::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        builder = sources::workspace_file::add_to_builder(builder, project_root)?;
        builder = builder.add_source(
            Environment::with_prefix("LINKBACK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(table) = host_table {
            let rendered = serde_json::to_string(table).map_err(|e| {
                ConfigError::LoadError(format!("Invalid host configuration table: {}", e))
            })?;
            builder = builder.add_source(File::from_str(&rendered, FileFormat::Json));
            debug!("host configuration table merged");
        }

        let config = builder.build()?.try_deserialize::<LinkbackConfig>()?;
        Ok(config)
    }

    /// Load configuration from a single explicit file, bypassing layering.
    pub fn load_from_file(path: &Path) -> Result<LinkbackConfig, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the global configuration file, if a home directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }
}
