use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure.
///
/// Only the generator drivers consume this; the oracle and scorer are
/// fully determined by their input files.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Tuning for random dataset/query synthesis
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Inclusive range for generated x coordinates (points and circle centers)
    #[serde(default = "default_coord_range")]
    pub x_range: (i64, i64),
    /// Inclusive range for generated y coordinates
    #[serde(default = "default_coord_range")]
    pub y_range: (i64, i64),
    /// Inclusive range for generated circle radii
    #[serde(default = "default_radius_range")]
    pub radius_range: (i64, i64),
    /// Optional RNG seed for reproducible runs; unset means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_coord_range() -> (i64, i64) {
    (-100, 100)
}

fn default_radius_range() -> (i64, i64) {
    (10, 50)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            x_range: default_coord_range(),
            y_range: default_coord_range(),
            radius_range: default_radius_range(),
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Looks for the config file in this order:
    /// 1. Path specified in the RANGEBENCH_CONFIG environment variable
    /// 2. ./rangebench.toml in the current directory
    ///
    /// A missing file is not an error; defaults are used so the drivers
    /// work out of the box.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("RANGEBENCH_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("rangebench.toml"));

        if !config_path.exists() {
            log::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Config {
                generator: GeneratorConfig::default(),
            });
        }

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let g = &self.generator;
        for (name, (lo, hi)) in [
            ("x_range", g.x_range),
            ("y_range", g.y_range),
            ("radius_range", g.radius_range),
        ] {
            if lo > hi {
                anyhow::bail!("generator.{name} is empty: {lo} > {hi}");
            }
        }
        if g.radius_range.0 < 0 {
            anyhow::bail!("generator.radius_range must be non-negative");
        }
        Ok(())
    }
}
