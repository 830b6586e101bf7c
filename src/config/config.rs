use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// BGZF compression level used when `--compress` is not given.
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
    /// Extra writer threads used when `--threads` is not given.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_compression_level() -> u32 {
    8
}

fn default_threads() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression_level: default_compression_level(),
            threads: default_threads(),
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "bamghoster", "bamghoster")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.compression_level > 9 {
            bail!(
                "compression_level must be between 0 and 9, got {}",
                config.compression_level
            );
        }
        Ok(config)
    }
}
