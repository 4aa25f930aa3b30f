use clap::Parser;
use small_calc::utils::{logger, validation::Validate};
use small_calc::{CliConfig, Outcome, Session, StdioConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let toml_config = match config.validate().and_then(|_| config.load_toml()) {
        Ok(toml_config) => toml_config,
        Err(e) => {
            tracing::error!("Configuration failed (kind: {}): {}", e.kind(), e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(StdioConsole::stdio(), toml_config.prompts);

    // Handled calculation errors still exit 0.
    match session.run_and_report() {
        Outcome::Success(value) => tracing::info!("Calculation succeeded: {}", value),
        Outcome::Failure(message) => tracing::info!("Calculation reported error: {}", message),
    }

    Ok(())
}
