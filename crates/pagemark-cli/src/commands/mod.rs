//! CLI subcommands.

pub mod config;
pub mod engine;
pub mod outline;
pub mod read;

use std::path::Path;

use pagemark_core::PagemarkConfig;

/// Load the configuration from an explicit path, then the default location,
/// then built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PagemarkConfig> {
    if let Some(path) = config_path {
        return Ok(PagemarkConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        return Ok(PagemarkConfig::from_file(&default_path)?);
    }

    Ok(PagemarkConfig::default())
}
