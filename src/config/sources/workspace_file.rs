//! Workspace config file source: <project root>/linkback.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Add the project's own config file to the builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let config_path = project_root.join("linkback.toml");
    if config_path.exists() {
        builder = builder.add_source(File::from(config_path).required(false));
    }

    Ok(builder)
}
