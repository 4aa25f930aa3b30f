use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "small_calc=debug,info"
    } else {
        "small_calc=warn"
    }
}

/// Installs a compact stderr subscriber. `RUST_LOG` wins over `verbose`.
///
/// stdout carries only prompts and the result line, so nothing here may
/// write to it.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
