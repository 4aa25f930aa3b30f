use crate::utils::error::Result;

/// Line-oriented interactive I/O.
pub trait Console {
    /// Shows `prompt` (no newline) and returns the next line without its terminator.
    fn prompt(&mut self, prompt: &str) -> Result<String>;
    fn print_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn first_operand_prompt(&self) -> &str;
    fn operator_prompt(&self) -> &str;
    fn second_operand_prompt(&self) -> &str;
}
