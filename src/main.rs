//! podcast-tts-rs CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use podcast_tts_rs::backend::HttpBackend;
use podcast_tts_rs::cli::Args;
use podcast_tts_rs::config::Config;
use podcast_tts_rs::engine::BatchSynthesizer;
use podcast_tts_rs::mapping::IdMapping;
use podcast_tts_rs::report::RunReport;
use podcast_tts_rs::script::parse_script;
use podcast_tts_rs::voice::load_references;
use tracing_subscriber::EnvFilter;

const RULE: &str = "============================================================";

fn main() -> Result<ExitCode> {
    // Missing .env is fine; the system environment is used instead
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::from_args(args)?;
    print_banner(&config);

    if config.check_only {
        println!("Configuration check complete (--check-only)");
        return Ok(ExitCode::SUCCESS);
    }

    let report = run(&config)?;
    print_summary(&config, &report);

    let result_path = report
        .write(&config.output_dir)
        .context("Failed to write result report")?;
    println!("Result saved to: {}", result_path.display());

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<RunReport> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let references =
        load_references(&config.voices).context("Failed to load voice references")?;

    let mapping = IdMapping::load(Some(&config.mapping_path));

    let segments = parse_script(
        &config.script,
        config.arxiv_id_override.as_deref(),
        &mapping,
    )
    .context("Failed to parse podcast script")?;

    let backend = HttpBackend::new(&config.base_url, &config.api_key, config.timeout)
        .context("Failed to create TTS client")?;

    let synthesizer = BatchSynthesizer::new(backend, references, &config.output_dir)
        .with_model(config.model.clone(), config.max_tokens)
        .with_default_channel(config.channel_id.clone());

    Ok(RunReport::from_batch(&synthesizer.run(&segments)))
}

fn print_banner(config: &Config) {
    println!("{RULE}");
    println!("Podcast audio generator");
    println!("{RULE}");
    println!("  Script: {}", config.script.display());
    println!("  Output dir: {}", config.output_dir.display());
    println!("  API URL: {}", config.base_url);
    println!("  API key: {}", config.masked_api_key());
    println!("  Model: {}", config.model);
    println!("{RULE}");
}

fn print_summary(config: &Config, report: &RunReport) {
    println!();
    println!("{RULE}");
    println!("Generation summary");
    println!("{RULE}");
    println!("  Success: {}", report.success);
    println!("  Failed: {}", report.failed);
    println!("  Elapsed: {:.2}s", report.elapsed_time);
    println!("  Output dir: {}", config.output_dir.display());
    println!("{RULE}");
}
