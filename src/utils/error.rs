use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid number '{input}': {source}")]
    ParseError {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Unexpected end of input while reading '{prompt}'")]
    UnexpectedEof { prompt: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Short label for log lines. Never shown to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::ParseError { .. } => "parse",
            CalcError::UnknownOperator(_) => "unknown_operator",
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::UnexpectedEof { .. } => "eof",
            CalcError::IoError(_) => "io",
            CalcError::TomlError(_) => "toml",
            CalcError::ConfigError { .. } => "config",
            CalcError::InvalidConfigValueError { .. } => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
