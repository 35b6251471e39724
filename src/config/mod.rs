pub mod models;

use anyhow::{Context, Result};
use std::{fs::File, io::Read};
use validator::Validate;

pub use models::Config;

/// Read the YAML file at `config_file`, apply `REGRU_*` environment overrides
/// and validate the result.
pub fn load_config(config_file: &str) -> Result<Config> {
    let mut file = File::open(config_file)
        .with_context(|| format!("Failed to open config file: {}", config_file))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_file))?;

    let mut config = parse_config(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file))?;
    config.apply_overrides(|key| std::env::var(key).ok());

    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", config_file))?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(contents)?)
}
