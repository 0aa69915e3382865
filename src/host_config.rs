//! Host configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use log::LevelFilter;

use basetris::core::GameConfig;
use basetris::types::{MAX_BOARD_DIM, MIN_BOARD_DIM};

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub seed: u32,
    pub game: GameConfig,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl HostConfig {
    /// Read `BASETRIS_SEED`, `BASETRIS_WIDTH`, `BASETRIS_HEIGHT`,
    /// `BASETRIS_LOG_PATH` and `BASETRIS_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match var("BASETRIS_SEED") {
            Some(s) => s
                .parse()
                .with_context(|| format!("BASETRIS_SEED must be a u32, got {:?}", s))?,
            None => clock_seed(),
        };

        let defaults = GameConfig::default();
        let width = parse_dim(var("BASETRIS_WIDTH"), "BASETRIS_WIDTH", defaults.board_width)?;
        let height = parse_dim(var("BASETRIS_HEIGHT"), "BASETRIS_HEIGHT", defaults.board_height)?;

        let log_level = match var("BASETRIS_LOG_LEVEL") {
            Some(s) => s
                .parse()
                .with_context(|| format!("BASETRIS_LOG_LEVEL must be a log level, got {:?}", s))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            seed,
            game: defaults.with_board_size(width, height),
            log_path: var("BASETRIS_LOG_PATH"),
            log_level,
        })
    }
}

fn parse_dim(value: Option<String>, key: &str, default: u8) -> Result<u8> {
    let Some(s) = value else {
        return Ok(default);
    };
    let dim: u8 = s
        .parse()
        .with_context(|| format!("{} must be a number, got {:?}", key, s))?;
    ensure!(
        (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&dim),
        "{} must be in {}..={}, got {}",
        key,
        MIN_BOARD_DIM,
        MAX_BOARD_DIM,
        dim
    );
    Ok(dim)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
