// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use epistula::app_config::{self, Config};
use epistula::providers::openai::OpenAI;
use epistula::text::{split_paragraphs, split_sentences};
use epistula::translation::{render_stage, Stage};
use epistula::{
    BatchProcessor, ChunkTranslator, FixtureLetterSource, Letter, LetterTranslation, LogContext,
    PromptSet, TranslationOrchestrator,
};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Which stage to print after translation
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum CliStage {
    Direct,
    Rhetorical,
    /// Every stage, as JSON records
    All,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a letter file or a directory of letter files
    Translate(TranslateArgs),

    /// Print the paragraphs and sentence units of letters without translating
    Segment {
        /// Letter file or directory of letter files
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Generate shell completions for epistula
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Letter file or directory of letter files
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config: PathBuf,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Previous exchanges sent with each request
    #[arg(long)]
    max_context: Option<usize>,

    /// Stage to print
    #[arg(short, long, value_enum, default_value = "rhetorical")]
    stage: CliStage,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// epistula - two-phase translation of historical letters
///
/// Each sentence is translated literally first, then rewritten into
/// idiomatic modern English, keeping the original and both translations
/// aligned sentence by sentence.
#[derive(Parser, Debug)]
#[command(name = "epistula")]
#[command(version)]
#[command(about = "Two-phase translation of historical letters")]
#[command(long_about = "epistula translates letters in two phases: a literal pass and a rhetorical rewrite.

EXAMPLES:
    epistula translate letters/letter_1.txt             # Print the rhetorical translation
    epistula translate --stage direct letters/         # Literal translation of every letter
    epistula translate --stage all letters/ > out.json # All stages as JSON
    epistula segment letters/letter_1.txt              # Inspect sentence splitting
    epistula completions bash > epistula.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. The API key is read from OPENAI_API_KEY when
    the config file leaves it empty.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    // The level is adjusted after the config is read, via log::set_max_level.
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "epistula", &mut std::io::stdout());
            Ok(())
        }
        Commands::Segment { path } => run_segment(&path),
        Commands::Translate(args) => run_translate(args).await,
    }
}

/// Load one letter file, or every letter file of a directory
fn load_letters(path: &Path) -> Result<Vec<Letter>> {
    if path.is_file() {
        let letter = Letter::from_file(path)
            .with_context(|| format!("Failed to load letter: {}", path.display()))?;
        Ok(vec![letter])
    } else if path.is_dir() {
        let letters = FixtureLetterSource::new(path)
            .fetch_all_letters()
            .with_context(|| format!("Failed to load letters from: {}", path.display()))?;
        if letters.is_empty() {
            return Err(anyhow!("No letter files found in: {}", path.display()));
        }
        Ok(letters)
    } else {
        Err(anyhow!("Input path does not exist: {}", path.display()))
    }
}

fn run_segment(path: &Path) -> Result<()> {
    for letter in load_letters(path)? {
        println!("Letter {}: {}", letter.roman, letter.title);
        for (i, paragraph) in split_paragraphs(&letter.content).iter().enumerate() {
            println!();
            println!("[paragraph {}]", i + 1);
            for sentence in split_sentences(paragraph) {
                println!("  | {}", sentence);
            }
        }
        println!();
    }
    Ok(())
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(level) = options.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config)?;

    // Override config with CLI options if provided
    if let Some(model) = &options.model {
        config.model.name = model.clone();
    }
    if let Some(max_context) = options.max_context {
        config.model.max_context = max_context;
    }
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    let letters = load_letters(&options.path)?;

    let api_key = config.resolve_api_key()?;
    let endpoint = config.resolve_endpoint()?;
    let provider = Arc::new(
        OpenAI::new(api_key, endpoint, config.model.timeout_secs).context("Failed to create OpenAI client")?,
    );
    let prompts = PromptSet::from_config(&config.prompts).context("Failed to load prompts")?;

    info!("Translating {} letter(s) with {}", letters.len(), config.model.name);

    let translator = ChunkTranslator::from_config(provider, &config.model);
    let orchestrator = TranslationOrchestrator::new(translator, prompts, LogContext::default())
        .with_history_policy(config.history_policy);
    let mut batch = BatchProcessor::new(orchestrator);

    let progress_bar = if letters.len() > 1 {
        let progress_bar = ProgressBar::new(letters.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} letters ({percent}%) {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        let bar = progress_bar.clone();
        batch = batch.with_progress(move |done, _total| bar.set_position(done as u64));
        Some(progress_bar)
    } else {
        None
    };

    let results = batch.process_letters(&letters).await?;

    if let Some(progress_bar) = progress_bar {
        progress_bar.finish_and_clear();
    }

    print_results(&results, options.stage)
}

fn print_results(results: &[LetterTranslation], stage: CliStage) -> Result<()> {
    let stage = match stage {
        CliStage::All => {
            let json = serde_json::to_string_pretty(results)
                .context("Failed to serialize translations to JSON")?;
            println!("{}", json);
            return Ok(());
        }
        CliStage::Direct => Stage::Direct,
        CliStage::Rhetorical => Stage::Rhetorical,
    };

    for result in results {
        println!("Letter {}: {}", result.letter.roman, result.letter.title);
        println!();
        println!("{}", render_stage(&result.stages, stage));
        println!();
    }

    Ok(())
}
