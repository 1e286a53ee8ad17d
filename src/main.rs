use clap::Parser;
use quiz_game::app::App;
use quiz_game::config::{QuestionBank, QuizConfig};
use quiz_game::game::sample_questions;
use quiz_game::error::user_friendly_message;
use quiz_game::{QuizError, Result, APP_NAME, LOG_ENV, LOG_FILE};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quiz-game", version, about = "Terminal quiz game")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Question bank file (.toml or .json), overrides the config
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Send logs to a file; stdout belongs to the TUI
fn init_logging(verbose: u8) -> Result<Option<WorkerGuard>> {
    let Some(log_dir) = dirs::cache_dir().map(|dir| dir.join(APP_NAME)) else {
        return Ok(None);
    };
    std::fs::create_dir_all(&log_dir)?;

    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => QuizConfig::load_from(path)?,
        None => QuizConfig::load()?,
    };
    if let Some(path) = cli.questions {
        config = config.with_question_bank(path);
    }

    let questions = match &config.question_bank {
        Some(path) => QuestionBank::load(path)?,
        None => sample_questions()?,
    };
    info!(questions = questions.len(), "starting quiz");

    let mut app = App::new(config, questions)?;
    app.init()?;
    let outcome = app.run();
    finish(outcome, app.restore())
}

/// Combine the game result with the terminal restore result, keeping the
/// game error when both fail
fn finish(outcome: Result<()>, restored: Result<()>) -> Result<()> {
    match (outcome, restored) {
        (Err(e), Err(restore_err)) => {
            error!(error = %restore_err, "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

fn main() {
    let cli = Cli::parse();

    let guard = match init_logging(cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            None
        }
    };

    if let Err(e) = run(cli) {
        error!(error = %e, "quiz exited with error");
        eprintln!("{}", user_friendly_message(&e));
        let code = match e {
            QuizError::Config(_) | QuizError::Validation(_) => 2,
            _ => 1,
        };
        // Flush pending log lines before exiting
        drop(guard);
        std::process::exit(code);
    }
}
