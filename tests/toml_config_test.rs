use anyhow::Result;
use small_calc::utils::validation::Validate;
use small_calc::{CliConfig, Outcome, Session, StdioConsole, TomlConfig};
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_custom_prompts_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("calc.toml");
    std::fs::write(
        &path,
        r#"
[prompts]
first_operand = "a = "
operator = "op = "
second_operand = "b = "
"#,
    )?;

    let cli = CliConfig {
        config: Some(path.to_string_lossy().into_owned()),
        verbose: false,
    };
    cli.validate()?;
    let config = cli.load_toml()?;

    let console = StdioConsole::new(Cursor::new("3\n-\n1\n"), Vec::new());
    let mut session = Session::new(console, config.prompts);
    assert_eq!(session.run_and_report(), Outcome::Success(2.0));

    let stdout = String::from_utf8(session.into_console().into_writer())?;
    assert_eq!(stdout, "a = op = b = Result: 2.0\n");
    Ok(())
}

#[test]
fn test_blank_prompt_in_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("calc.toml");
    std::fs::write(&path, "[prompts]\noperator = \"\"\n")?;

    let config = TomlConfig::from_file(&path)?;
    assert!(config.validate().is_err());

    let cli = CliConfig {
        config: Some(path.to_string_lossy().into_owned()),
        verbose: false,
    };
    assert!(cli.load_toml().is_err());
    Ok(())
}

#[test]
fn test_malformed_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("calc.toml");
    std::fs::write(&path, "prompts = 5\n")?;

    let err = TomlConfig::from_file(&path).unwrap_err();
    assert_eq!(err.kind(), "toml");
    Ok(())
}
