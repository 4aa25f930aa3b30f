pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::StdioConsole;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::calculator::{calculate, parse_operand};
pub use crate::core::session::{Outcome, Session};
pub use domain::model::Operator;
pub use utils::error::{CalcError, Result};
