//! Hallucination report generator binary entry point.
//!
//! Loads the facts and sources resources, then prints `REPORT_COUNT`
//! reports as pretty JSON on stdout. All logs go to stderr.
//!
//! If either resource fails to load, a load-failure notice is printed in
//! place of the reports and the process exits normally.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use serde::Serialize;

use hallucination_reports::compiler::{GenerationState, ReportCompiler};
use hallucination_reports::config::Config;
use hallucination_reports::error::AppError;
use hallucination_reports::report::LoadFailureNotice;
use hallucination_reports::store::{FsLoader, InputStore};
use hallucination_reports::traits::RngSource;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for report JSON)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run() -> Result<(), AppError> {
    // Load configuration from environment
    let config = Config::from_env()?;

    tracing::info!(
        "Configuration loaded: facts={}, sources={}, reports={}, seed={:?}",
        config.facts_path,
        config.sources_path,
        config.report_count,
        config.rng_seed
    );

    let store = match InputStore::load(&FsLoader, &config.facts_path, &config.sources_path).await {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("Input load failed: {e}");
            print_json(&LoadFailureNotice::new(&config.display_name, &e));
            return Ok(());
        }
    };

    let compiler = ReportCompiler::from_config(&config);
    let mut state = GenerationState::new();
    let mut rng = RngSource::from_seed_option(config.rng_seed);

    for _ in 0..config.report_count {
        let report = compiler.generate(&store, &mut state, &mut rng);
        print_json(report);
    }

    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to serialize output: {e}"),
    }
}
