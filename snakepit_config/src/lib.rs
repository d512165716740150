use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// The largest accepted `snake.first_id`. Leaves room for 2^63 ids before the
/// counter could overflow.
pub const MAX_FIRST_ID: u64 = u64::MAX >> 1;

/// Loads and merges the given TOML files. Later files override earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let config: Config = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;

    config.check()?;
    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub snake: SnakeConfig,
    pub contact: ContactConfig,
}

impl Config {
    fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.snake.first_id <= MAX_FIRST_ID,
            "Invalid config: snake.first_id must not exceed {MAX_FIRST_ID}, got {}",
            self.snake.first_id
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SnakeConfig {
    /// The first id issued to a new snake.
    pub first_id: u64,
    /// Populate the board with the demo snakes on startup.
    pub seed_demo: bool,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub log_submissions: bool,
}
