// Air quality evaluation CLI
//
// Purpose: Generate the synthetic dataset, print the evaluation report, then
// classify one sample read from stdin.
// Usage: cargo run --bin aqi_predictor
// Config: AQI_SEED, AQI_SAMPLE_COUNT, AQI_TRAIN_FRACTION, AQI_REPORT_FORMAT, RUST_LOG

use aqi_predictor_rust::formatters::text::PROMPT;
use aqi_predictor_rust::formatters::{render_prediction, render_report};
use aqi_predictor_rust::{read_query, Evaluator, ReportFormat, RunConfig};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqi_predictor_rust=info,aqi_predictor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = RunConfig::from_env().context("Failed to load configuration")?;
    let seed = config.seed_or_random();

    tracing::info!("Configuration:");
    tracing::info!("  Seed: {}", seed);
    tracing::info!("  Samples: {}", config.sample_count);
    tracing::info!("  Train fraction: {}", config.train_fraction);
    tracing::info!("  Report format: {}", config.format);

    let mut rng = StdRng::seed_from_u64(seed);
    let evaluator = Evaluator::new(config.evaluation_settings(seed));
    let outcome = evaluator.run(&mut rng).context("Evaluation failed")?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render_report(config.format, &outcome.report)?)?;

    // Keep stdout machine-readable in JSON mode
    if config.format == ReportFormat::Json {
        eprint!("{}", PROMPT);
    } else {
        write!(stdout, "{}", PROMPT)?;
    }
    stdout.flush()?;

    let query = read_query(&mut io::stdin().lock());
    let prediction = evaluator.classify_sample(query.readings, query.source);
    write!(stdout, "{}", render_prediction(config.format, &prediction)?)?;

    Ok(())
}
