use anyhow::{Context, Result};
use directories::ProjectDirs;
use projectdeck_core::domain::{CatalogLayout, SortOption};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::CliArgs;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    /// Where the project catalog lives on disk
    pub data_file: PathBuf,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UiConfig {
    pub default_layout: CatalogLayout,
    pub default_sort: SortOption,
    pub autosave_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            data_file: get_default_data_path().unwrap_or_else(|_| PathBuf::from("projects.toml")),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_layout: CatalogLayout::Grid,
            default_sort: SortOption::DateAsc,
            autosave_on_exit: true,
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "projectdeck")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("projectdeck.toml"))
}

pub fn get_default_data_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "projectdeck")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().join("projects.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: CliArgs, config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load(config_path)?;

        // CLI args override config file
        if let Some(data_file) = cli_args.data_file {
            config.data_file = data_file;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.ui.default_layout, CatalogLayout::Grid);
        assert_eq!(config.ui.default_sort, SortOption::DateAsc);
        assert!(config.ui.autosave_on_exit);
    }

    #[test]
    fn test_config_serialization_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.data_file = PathBuf::from("/test/projects.toml");
        config.ui.default_layout = CatalogLayout::List;
        config.ui.autosave_on_exit = false;

        let toml_str = toml::to_string(&config)?;
        let parsed_config: Config = toml::from_str(&toml_str)?;

        assert_eq!(config, parsed_config);
        Ok(())
    }

    #[test]
    fn test_config_load_nonexistent_creates_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(config_path.clone()))?;

        assert_eq!(config.version, 1);
        assert!(config_path.exists());

        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test.toml");

        let mut config = Config::default();
        config.data_file = PathBuf::from("/custom/projects.toml");
        config.ui.default_sort = SortOption::NameAsc;

        config.save(&config_path)?;
        let loaded_config = Config::load(Some(config_path))?;

        assert_eq!(config.data_file, loaded_config.data_file);
        assert_eq!(config.ui.default_sort, loaded_config.ui.default_sort);

        Ok(())
    }

    #[test]
    fn test_cli_override() -> Result<()> {
        let cli_args = CliArgs {
            config: None,
            data_file: Some(PathBuf::from("/override/projects.toml")),
            log: None,
        };

        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test.toml");

        let original_config = Config {
            data_file: PathBuf::from("/original/projects.toml"),
            ..Config::default()
        };
        original_config.save(&config_path)?;

        let final_config = Config::from_cli_and_file(cli_args, Some(config_path))?;
        assert_eq!(
            final_config.data_file,
            PathBuf::from("/override/projects.toml")
        );

        Ok(())
    }

    #[test]
    fn test_get_default_config_path() -> Result<()> {
        let path = get_default_config_path()?;
        assert!(path.ends_with("projectdeck.toml"));
        Ok(())
    }
}
