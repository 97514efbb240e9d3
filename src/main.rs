//! ats-resume: keyword extraction, summary generation and ATS scoring for resumes

use anyhow::{Context, Result};
use ats_resume::cli::{self, Cli, Commands, ConfigAction};
use ats_resume::config::{Config, OutputFormat};
use ats_resume::input::InputManager;
use ats_resume::output::formatter::{save_report_to_file, suggest_filename};
use ats_resume::output::ReportGenerator;
use ats_resume::processing::engine::ResumeEngine;
use ats_resume::resume::ResumeRecord;
use clap::Parser;
use colored::Colorize;
use log::{error, info};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config.as_deref()).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to read config file {}", path.display())),
        None => Config::load().context("Failed to load default configuration"),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Keywords { job } => {
            cli::validate_file_extension(&job, cli::JOB_EXTENSIONS)
                .map_err(anyhow::Error::msg)
                .context("Job description file")?;

            let engine = ResumeEngine::new(&config).context("Failed to build analysis engine")?;
            let mut input_manager = InputManager::new();
            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;

            let keywords = engine.extract_keywords(&job_text);
            info!("Extracted {} keywords", keywords.len());
            for keyword in keywords {
                println!("{}", keyword);
            }
        }

        Commands::Summary { resume, job } => {
            let engine = ResumeEngine::new(&config).context("Failed to build analysis engine")?;
            let mut input_manager = InputManager::new();
            let mut record = load_record(&mut input_manager, &resume, job.as_deref()).await?;

            record.keywords = engine.extract_keywords(&record.job_description);
            println!("{}", engine.generate_summary(&record));
        }

        Commands::Score {
            resume,
            job,
            output,
            detailed,
            save,
            report: report_path,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };

            let engine = ResumeEngine::new(&config).context("Failed to build analysis engine")?;
            let mut input_manager = InputManager::new();
            let mut record = load_record(&mut input_manager, &resume, job.as_deref()).await?;

            let report = engine.analyze(&record);
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator
                .generate_report(&report, output_format)
                .context("Failed to render report")?;
            println!("{}", rendered);

            if let Some(report_path) = report_path {
                // Files never carry terminal color codes
                let plain = ReportGenerator::with_options(false, detailed || config.output.detailed, true, true)
                    .generate_report(&report, output_format)
                    .context("Failed to render report")?;
                save_report_to_file(&plain, &report_path)
                    .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
                info!("Report written to {}", report_path.display());
            }

            if let Some(save_path) = save {
                record.keywords = report.keywords.clone();
                record.generated_summary = Some(report.summary.clone());

                let save_path = if save_path.is_dir() {
                    save_path.join(suggest_filename(OutputFormat::Json, &resume.to_string_lossy(), false))
                } else {
                    save_path
                };

                input_manager
                    .save_resume(&record, &save_path)
                    .await
                    .with_context(|| format!("Failed to save resume to {}", save_path.display()))?;
                println!("{} {}", "Saved updated resume to".green(), save_path.display());
            }
        }

        Commands::Config { action } => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
                    println!("# {}\n", path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default()
                        .save_to(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("{} {}", "Configuration reset:".green(), path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Load a resume record, replacing its job description when a job file is given
async fn load_record(
    input_manager: &mut InputManager,
    resume: &Path,
    job: Option<&Path>,
) -> Result<ResumeRecord> {
    cli::validate_file_extension(resume, cli::RESUME_EXTENSIONS)
        .map_err(anyhow::Error::msg)
        .context("Resume file")?;

    let mut record = input_manager
        .load_resume(resume)
        .await
        .with_context(|| format!("Failed to load resume {}", resume.display()))?;

    if let Some(job) = job {
        cli::validate_file_extension(job, cli::JOB_EXTENSIONS)
            .map_err(anyhow::Error::msg)
            .context("Job description file")?;
        record.job_description = input_manager
            .extract_text(job)
            .await
            .with_context(|| format!("Failed to read job description {}", job.display()))?;
    }

    Ok(record)
}
