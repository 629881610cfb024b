//! ATS resume scorer: heuristic ATS compatibility scoring for PDF and DOCX resumes

use ats_resume_scorer::cli::{self, Cli};
use ats_resume_scorer::config::Config;
use ats_resume_scorer::error::{AtsScorerError, Result};
use ats_resume_scorer::input::InputManager;
use ats_resume_scorer::output::{save_report_to_file, ReportGenerator};
use ats_resume_scorer::processing::Scorer;
use clap::Parser;
use log::{debug, info};
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; the report owns stdout
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        debug!("Run aborted: {:?}", e);
        println!("{}", e.user_message());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!("Effective configuration:\n{}", config.to_toml()?);

    let format = match cli.output.as_deref() {
        Some(format) => cli::parse_output_format(format).map_err(AtsScorerError::Configuration)?,
        None => config.output.format,
    };
    let detailed = cli.detailed || config.output.detailed;
    let use_colors = config.output.color_output && !cli.no_color;

    let scorer = Scorer::from_config(&config.scoring)?;

    let resume = match cli.resume {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            cli::prompt_for_path(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let document = InputManager::new().extract_document(&resume)?;
    let report = scorer.score(&document.text).with_metadata(&document);
    info!(
        "Scored {} ({}): {:.2} / {:.0}",
        resume.display(),
        document.file_type,
        report.total_score,
        report.max_total
    );

    let generator = ReportGenerator::with_options(use_colors, detailed);
    let rendered = generator.generate_report(&report, &format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    if let Some(path) = &cli.save {
        let plain = ReportGenerator::with_options(false, detailed).generate_report(&report, &format)?;
        save_report_to_file(&plain, path)?;
        info!("Report saved to {}", path.display());
    }

    Ok(())
}
