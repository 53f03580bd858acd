//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{debug, info};

use bigmul_cli::output::{benchmarks_to_json, format_duration, write_to_file};
use bigmul_cli::presenter::CLIResultPresenter;
use bigmul_core::{parse_operand, Algorithm, AlgorithmFactory, DefaultFactory, Multiplier};
use bigmul_orchestration::algorithm_selection::get_algorithms_to_run;
use bigmul_orchestration::interfaces::ResultPresenter;
use bigmul_orchestration::orchestrator::{analyze_products, multiply_all, run_benchmarks};
use bigmul_orchestration::payload::generate_random_data;

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let factory = DefaultFactory::new();

    match &config.command {
        Command::Multiply { x, y, algo } => run_multiply(&presenter, &factory, x, y, algo),
        Command::Keygen { algo } => {
            let algorithm = factory.get(algo)?;
            presenter.present_keys(algorithm.name(), &algorithm.generate_key_pair());
            Ok(())
        }
        Command::Encode { text, key, algo } => {
            let algorithm = factory.get(algo)?;
            let key = parse_operand(key)?;
            let encoded = algorithm.encode_str(text, &key)?;
            debug!(algorithm = algorithm.name(), chars = encoded.value.len(), "encoded");
            println!("{}", encoded.value);
            if config.verbose {
                eprintln!("Encode time: {}", format_duration(encoded.elapsed));
            }
            Ok(())
        }
        Command::Decode { text, key, algo } => {
            let algorithm = factory.get(algo)?;
            let key = parse_operand(key)?;
            let decoded = algorithm.decode_str(text, &key)?;
            println!("{}", decoded.value);
            if config.verbose {
                eprintln!("Decode time: {}", format_duration(decoded.elapsed));
            }
            Ok(())
        }
        Command::Bench {
            size,
            data,
            mode,
            algo,
            json,
            output,
        } => {
            let algorithms = get_algorithms_to_run(algo, &factory)?;
            let payload = data.clone().unwrap_or_else(|| generate_random_data(*size));
            info!(
                algorithms = algorithms.len(),
                bytes = payload.len(),
                ?mode,
                "starting benchmarks"
            );
            let reports = run_benchmarks(&algorithms, &payload, (*mode).into());

            if *json || output.is_some() {
                let rendered = benchmarks_to_json(&reports)?;
                if let Some(path) = output {
                    write_to_file(path, &rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                }
                if *json {
                    println!("{rendered}");
                }
            }
            if !*json {
                presenter.present_benchmarks(&reports);
            }
            Ok(())
        }
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            bigmul_cli::completion::generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_multiply(
    presenter: &CLIResultPresenter,
    factory: &DefaultFactory,
    x: &str,
    y: &str,
    algo: &str,
) -> Result<()> {
    let x = parse_operand(x)?;
    let y = parse_operand(y)?;
    let algorithms = get_algorithms_to_run(algo, factory)?;
    let results = multiply_all(&algorithms, &x, &y);

    if results.len() > 1 {
        let agreement = analyze_products(&results);
        if let Some(first) = results.iter().find(|r| r.outcome.is_ok()) {
            presenter.present_product(first);
        }
        presenter.present_agreement(&results, &agreement);
        agreement?;
        return Ok(());
    }

    for result in &results {
        match &result.outcome {
            Ok(_) => presenter.present_product(result),
            Err(e) => return Err(e.clone().into()),
        }
    }
    Ok(())
}
