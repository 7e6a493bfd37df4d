//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["diagnostics.toml", ".diagnostics.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./diagnostics.toml` or `./.diagnostics.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/car-diagnostics/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/car-diagnostics/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("car-diagnostics").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./diagnostics.toml or ./.diagnostics.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
