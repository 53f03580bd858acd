//! BigMul: big-integer multiplication engine.

use bigmul_core::constants::exit_codes;
use bigmul_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    let code = match app::run(&config) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => errors::report(&err),
    };
    std::process::exit(code);
}
