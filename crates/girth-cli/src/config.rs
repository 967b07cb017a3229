//! Configuration file loading for the CLI
//!
//! This module handles finding and loading the TOML application
//! configuration from various locations (explicit path, local directory,
//! system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use crate::error::CliError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Controls how perimeters are printed. Arithmetic is unaffected.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Number of digits printed after the decimal point.
    #[serde(default = "OutputConfig::default_decimals")]
    decimals: usize,
}

impl OutputConfig {
    fn default_decimals() -> usize {
        6
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decimals: Self::default_decimals(),
        }
    }
}

/// Loads the application configuration.
///
/// An explicit path must exist. Otherwise the first existing file among
/// [`candidate_paths`] is used, and defaults apply when none exists.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        info!(path = path.as_ref().display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    match candidate_paths().into_iter().find(|path| path.exists()) {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading configuration");
            load_config_file(path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit configuration locations, highest priority first: the
/// project-local `girth/config.toml`, then the platform config directory.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("girth/config.toml")];
    match ProjectDirs::from("com", "girth", "girth") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();
    let content = read_toml_source(path)?;

    toml::from_str(&content).map_err(|err| CliError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Reads a TOML file, distinguishing a missing file from other I/O failures.
pub(crate) fn read_toml_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::MissingFile(PathBuf::from(path)));
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_decimals() {
        assert_eq!(AppConfig::default().output().decimals(), 6);
    }

    #[test]
    fn test_load_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndecimals = 3").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.output().decimals(), 3);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = NamedTempFile::new().unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.output().decimals(), 6);
    }

    #[test]
    fn test_candidate_paths_prefer_local_file() {
        let paths = candidate_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from("girth/config.toml")));
        assert!(paths.iter().skip(1).all(|path| path.ends_with("config.toml")));
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, CliError::MissingFile(_)));
    }

    #[test]
    fn test_malformed_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndecimals = \"many\"").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }
}
