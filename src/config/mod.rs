pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_config_path, Validate};
use clap::Parser;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "small-calc")]
#[command(about = "Reads two numbers and an operator, prints the result")]
pub struct CliConfig {
    /// Path to a TOML file overriding the prompt texts
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file named by `--config`, or the built-in prompts.
    pub fn load_toml(&self) -> Result<TomlConfig> {
        let config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_config_path("config", path)?;
        }
        Ok(())
    }
}
