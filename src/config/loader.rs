use std::path::{Path, PathBuf};

use crate::error::{CardError, Result};

use super::FileConfig;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<FileConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<FileConfig>;
}

pub const LOCAL_CONFIG_NAME: &str = ".stat-cards.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration from the filesystem.
///
/// `load()` looks for `.stat-cards.toml` in the current directory and returns
/// `FileConfig::default()` if there is none.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn parse_config(path: &Path, content: &str) -> Result<FileConfig> {
        toml::from_str(content).map_err(|e| {
            CardError::Config(format!("invalid config file {}: {e}", path.display()))
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<FileConfig> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => {
                log::debug!("Using config file {}", path.display());
                self.load_from_path(&path)
            }
            _ => Ok(FileConfig::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<FileConfig> {
        let content = self.fs.read_to_string(path).map_err(|e| {
            CardError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::parse_config(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
