use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use crate::manager::ManagerName;
use crate::resolver::DEFAULT_COREPACK_BIN;

pub const CONFIG_FILE: &str = "pmprovision.toml";

/// Represents the contents of a `pmprovision.toml` file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Job id stamped on every log line. `cli` (or no id at all) marks a local run.
    pub job_id: Option<String>,
    pub log_level: String,
    /// Executable used for `install <name>@<version> --global --cache-only`.
    pub corepack_bin: String,
    /// Managers set up when none are given on the command line, in order.
    pub managers: Vec<ManagerName>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            job_id: None,
            log_level: "info".to_string(),
            corepack_bin: DEFAULT_COREPACK_BIN.to_string(),
            managers: vec![ManagerName::Yarn, ManagerName::Pnpm],
        }
    }
}

impl Config {
    /// Loads a `Config` from a file path.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or deserialized.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
    /// Saves the `Config` to the given file path in pretty TOML format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
    /// Finds the config for a project: `<project>/pmprovision.toml` first, then the
    /// global one, then the defaults.
    pub fn discover<P: AsRef<Path>>(project_dir: P) -> Result<Config> {
        let local = project_dir.as_ref().join(CONFIG_FILE);
        if local.exists() {
            return Config::load(local);
        }
        if let Ok(global) = get_global_config_file() {
            if global.exists() {
                return Config::load(global);
            }
        }
        Ok(Config::default())
    }
}

pub fn get_global_config_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("org", "pmprovision", "pmprovision")
        .ok_or_else(|| anyhow!("Could not get project directories"))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

pub fn get_global_config_file() -> Result<PathBuf> {
    Ok(get_global_config_dir()?.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("job_id = \"42\"\n").unwrap();
        assert_eq!(config.job_id.as_deref(), Some("42"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.corepack_bin, "corepack");
        assert_eq!(config.managers, vec![ManagerName::Yarn, ManagerName::Pnpm]);
    }

    #[test]
    fn test_managers_parse_lowercase() {
        let config: Config = toml::from_str("managers = [\"pnpm\"]\n").unwrap();
        assert_eq!(config.managers, vec![ManagerName::Pnpm]);
        assert!(toml::from_str::<Config>("managers = [\"bun\"]\n").is_err());
    }

    #[test]
    fn test_save_and_discover_local_config() {
        let dir = tempdir().unwrap();
        let config = Config {
            corepack_bin: "echo".to_string(),
            ..Config::default()
        };
        config.save(dir.path().join(CONFIG_FILE)).unwrap();
        let found = Config::discover(dir.path()).unwrap();
        assert_eq!(found, config);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "log_level = [").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
