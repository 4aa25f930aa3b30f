use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_prompt, Validate};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_FIRST_OPERAND_PROMPT: &str = "First number: ";
pub const DEFAULT_OPERATOR_PROMPT: &str = "Operator (+ - * /): ";
pub const DEFAULT_SECOND_OPERAND_PROMPT: &str = "Second number: ";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub prompts: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub first_operand: String,
    pub operator: String,
    pub second_operand: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            first_operand: DEFAULT_FIRST_OPERAND_PROMPT.to_string(),
            operator: DEFAULT_OPERATOR_PROMPT.to_string(),
            second_operand: DEFAULT_SECOND_OPERAND_PROMPT.to_string(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.prompts.validate()
    }
}

impl Validate for PromptConfig {
    fn validate(&self) -> Result<()> {
        validate_prompt("prompts.first_operand", &self.first_operand)?;
        validate_prompt("prompts.operator", &self.operator)?;
        validate_prompt("prompts.second_operand", &self.second_operand)?;
        Ok(())
    }
}

impl ConfigProvider for PromptConfig {
    fn first_operand_prompt(&self) -> &str {
        &self.first_operand
    }

    fn operator_prompt(&self) -> &str {
        &self.operator
    }

    fn second_operand_prompt(&self) -> &str {
        &self.second_operand
    }
}
