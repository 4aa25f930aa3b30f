use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const PROMPTS: &str = "First number: Operator (+ - * /): Second number: ";

fn run_binary(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_small-calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn test_success_exits_zero() -> Result<()> {
    let output = run_binary(&[], "4\n+\n5\n")?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, format!("{PROMPTS}Result: 9.0\n"));
    Ok(())
}

#[test]
fn test_division_by_zero_exits_zero() -> Result<()> {
    let output = run_binary(&[], "1\n/\n0\n")?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        format!("{PROMPTS}Error: Cannot divide by zero\n")
    );
    Ok(())
}

#[test]
fn test_parse_failure_exits_zero() -> Result<()> {
    let output = run_binary(&[], "abc\n+\n1\n")?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "First number: Error: Invalid number 'abc': invalid float literal\n"
    );
    Ok(())
}

#[test]
fn test_digit_separators_accepted() -> Result<()> {
    let output = run_binary(&[], "1_000\n+\n1\n")?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, format!("{PROMPTS}Result: 1001.0\n"));
    Ok(())
}

#[test]
fn test_verbose_logs_stay_off_stdout() -> Result<()> {
    for input in ["4\n*\n2\n", "1\n/\n0\n"] {
        let output = run_binary(&["-v"], input)?;
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.starts_with(PROMPTS), "stdout: {stdout:?}");
        assert_eq!(stdout.lines().count(), 1, "stdout: {stdout:?}");
        assert!(!String::from_utf8(output.stderr)?.is_empty());
    }
    Ok(())
}

#[test]
fn test_bad_config_file_exits_one() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("calc.toml");
    std::fs::write(&path, "[prompts]\noperator = \"\"\n")?;

    let output = run_binary(&["--config", &path.to_string_lossy()], "4\n+\n5\n")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.starts_with("Error: "));
    Ok(())
}
