//! Resume matcher: rank resumes against a job description

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::error::MatcherError;
use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use resume_matcher::output::report::MatchReport;
use resume_matcher::processing::matcher::MatchEngine;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
    {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Match {
            job,
            resumes,
            keywords,
            output,
            detailed,
            save,
        } => {
            run_match(&config, job, resumes, keywords, output, detailed, save).await
        }

        Commands::Skills => {
            let vocabulary = config.vocabulary();
            println!("Skill catalog ({} entries):", vocabulary.skill_count());
            for skill in vocabulary.skills() {
                println!("  • {}", skill);
            }
            println!("\nRole suffixes: {}", vocabulary.role_suffixes().join(", "));
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content =
                    toml::to_string_pretty(&config).context("Failed to serialize config")?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("Configuration reset to defaults: {}", config_path.display());
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

async fn run_match(
    config: &Config,
    job: Option<PathBuf>,
    resumes: Vec<PathBuf>,
    keywords: Vec<String>,
    output: Option<String>,
    detailed: bool,
    save: Option<PathBuf>,
) -> Result<()> {
    info!("Starting resume matching");

    if let Some(job) = &job {
        cli::validate_file_extension(job, &["txt", "md"])
            .map_err(|e| MatcherError::InvalidInput(format!("Job description file: {}", e)))?;
    }
    for resume in &resumes {
        cli::validate_file_extension(resume, &["txt", "md"])
            .map_err(|e| MatcherError::InvalidInput(format!("Resume file {}: {}", resume.display(), e)))?;
    }

    let output_format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(MatcherError::InvalidInput)?,
        None => config.output.format,
    };

    let input_manager = InputManager::new();
    let job_text = match &job {
        Some(path) => Some(
            input_manager
                .extract_text(path)
                .await
                .with_context(|| format!("Failed to read job description {}", path.display()))?,
        ),
        None => None,
    };
    let resume_texts = input_manager
        .extract_all(resumes.as_slice())
        .await
        .context("Failed to read resumes")?;

    let engine = MatchEngine::new(&config.vocabulary(), config.normalizer_mode())
        .context("Failed to build the matching engine")?;
    let outcome = engine.match_resumes(job_text.as_deref(), &resume_texts, Some(keywords.as_slice()));
    if outcome.is_degraded() {
        warn!("Matching produced no usable signal");
    }

    let job_source = match &job {
        Some(path) => path.display().to_string(),
        None => format!("keywords: {}", keywords.join(", ")),
    };
    let sources: Vec<String> = resumes
        .iter()
        .map(|p| {
            p.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect();
    let report = MatchReport::new(job_source, outcome, &sources);

    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed || config.output.detailed,
        true,
    );
    let rendered = generator.generate_report(&report, &output_format)?;

    match save {
        Some(path) => {
            save_report_to_file(&rendered, &path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
