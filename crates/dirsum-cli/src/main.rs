//! dirsum CLI: Summarize a directory and chat about its files

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dirsum_core::{
    extract, validate_inputs, Assistant, ChatEvent, Config, ContentLimit, DirsumError,
    GeminiClient, ProgressEvent, Role, ScanSession, ScanStats, Transcript, CONFIG_FILE,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(Parser)]
#[command(name = "dirsum")]
#[command(about = "Summarize a directory with an LLM and chat about its files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (JSON); defaults are used if it doesn't exist
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// File that diagnostic logs are appended to
    #[arg(long, global = true, default_value = "app.log")]
    log_file: PathBuf,

    /// Don't write a log file
    #[arg(long, global = true)]
    no_log_file: bool,
}

#[derive(Args)]
struct ApiKeyArgs {
    /// Google Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and print a summary of every supported file
    Scan {
        /// Directory to scan
        dir: PathBuf,

        #[command(flatten)]
        key: ApiKeyArgs,

        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan a directory, then answer questions about its files
    Chat {
        /// Directory to scan
        dir: PathBuf,

        #[command(flatten)]
        key: ApiKeyArgs,
    },

    /// Print the text extracted from a single file
    Extract {
        /// File to read
        file: PathBuf,

        /// Don't truncate to the summary length
        #[arg(long)]
        full: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging((!cli.no_log_file).then_some(cli.log_file.as_path()));

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Commands::Scan { dir, key, json } => cmd_scan(config, &dir, key, json)?,
        Commands::Chat { dir, key } => cmd_chat(config, &dir, key)?,
        Commands::Extract { file, full } => cmd_extract(&config, &file, full)?,
        Commands::Config { write } => cmd_config(&config, &cli.config, write)?,
    }

    Ok(())
}

/// Console logs at WARN (overridable with RUST_LOG), file logs at DEBUG.
fn init_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let console = fmt::layer().with_writer(io::stderr).with_filter(
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
    );

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path.file_name().unwrap_or("app.log".as_ref());
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("warn,dirsum=debug,dirsum_core=debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    guard
}

/// Check inputs and build an assistant backed by the Gemini client.
fn build_assistant(config: Config, dir: &Path, key: ApiKeyArgs) -> Result<Assistant> {
    let api_key = key.api_key.unwrap_or_default();
    match validate_inputs(&api_key, dir) {
        Ok(()) => {}
        Err(DirsumError::MissingApiKey) => {
            bail!("Please provide a Gemini API key (--api-key or GEMINI_API_KEY).")
        }
        Err(DirsumError::InvalidDirectory(path)) => {
            bail!("Please provide a valid directory path: {}", path.display())
        }
        Err(e) => return Err(e.into()),
    }

    let client = GeminiClient::new(api_key, &config)?;
    Ok(Assistant::new(config, Box::new(client)))
}

fn cmd_scan(config: Config, dir: &Path, key: ApiKeyArgs, json: bool) -> Result<()> {
    let mut assistant = build_assistant(config, dir, key)?;
    let stats = run_scan(&mut assistant, dir)?;

    if json {
        let files: Vec<_> = assistant.session().iter().collect();
        println!("{}", serde_json::to_string_pretty(&files)?);
        eprintln!(
            "{} found, {} summarized, {} failed, {} unreadable, {} empty",
            stats.files_discovered,
            stats.files_summarized,
            stats.files_failed,
            stats.files_unreadable,
            stats.files_empty
        );
    } else {
        print_summaries(assistant.session());
        print_stats(&stats);
    }

    Ok(())
}

fn cmd_chat(config: Config, dir: &Path, key: ApiKeyArgs) -> Result<()> {
    let mut assistant = build_assistant(config, dir, key)?;
    let stats = run_scan(&mut assistant, dir)?;
    print_summaries(assistant.session());
    print_stats(&stats);

    println!();
    println!("Ask a question about your files. Mention a filename to have it read in full.");
    println!("Commands: /summaries, /history, /rescan, /quit");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("\x1b[1;36m>\x1b[0m ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/summaries" => print_summaries(assistant.session()),
            "/history" => print_history(assistant.transcript()),
            "/rescan" => {
                let stats = run_scan(&mut assistant, dir)?;
                print_summaries(assistant.session());
                print_stats(&stats);
            }
            question => {
                let pb = spinner("Thinking...");
                assistant.set_chat_callback(Box::new({
                    let pb = pb.clone();
                    move |event: ChatEvent<'_>| match event {
                        ChatEvent::ReadingFullFile { name } => pb.println(format!(
                            "\x1b[33m⚠ You mentioned {name}. Reading the ENTIRE file to answer; \
                             a large file may use a significant part of your API quota.\x1b[0m"
                        )),
                    }
                }));

                let answer = assistant.ask(question);
                pb.finish_and_clear();
                println!("{answer}\n");
            }
        }
    }

    Ok(())
}

fn cmd_extract(config: &Config, file: &Path, full: bool) -> Result<()> {
    let limit = if full {
        ContentLimit::Full
    } else {
        ContentLimit::Chars(config.summary_char_limit)
    };

    match extract(file, limit) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => bail!("Could not read {}: {}", file.display(), e),
    }
}

fn cmd_config(config: &Config, path: &Path, write: bool) -> Result<()> {
    if write {
        config
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote configuration to {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(())
}

/// Scan and summarize with a progress bar.
fn run_scan(assistant: &mut Assistant, dir: &Path) -> Result<ScanStats> {
    let display_dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    println!("Scanning: {}", display_dir.display());

    let pb = spinner("Starting scan...");
    assistant.set_progress_callback(Box::new({
        let pb = pb.clone();
        move |event: ProgressEvent<'_>| match event {
            ProgressEvent::Started { total } => {
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                        .unwrap()
                        .progress_chars("█▓░"),
                );
                pb.set_length(total as u64);
            }
            ProgressEvent::Processing {
                current,
                total,
                name,
            } => {
                pb.set_message(format!("Processing {current}/{total}: {name}"));
            }
            ProgressEvent::Completed { completed, .. } => {
                pb.set_position(completed as u64);
            }
        }
    }));

    let stats = assistant.scan(dir);
    pb.finish_and_clear();
    Ok(stats?)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summaries(session: &ScanSession) {
    if session.is_empty() {
        println!("No supported files found.");
        return;
    }

    println!();
    for file in session.iter() {
        println!("\x1b[1m📄 {}\x1b[0m", file.name);
        println!("\x1b[2m   {}\x1b[0m", file.path.display());
        for line in file.summary.as_str().lines() {
            println!("   > {line}");
        }
        println!();
    }
}

fn print_stats(stats: &ScanStats) {
    println!("✓ Scan complete:");
    println!("  Files found:      {}", stats.files_discovered);
    println!("  Files summarized: {}", stats.files_summarized);
    println!("  API failures:     {}", stats.files_failed);
    println!("  Files unreadable: {}", stats.files_unreadable);
    println!("  Files empty:      {}", stats.files_empty);
}

fn print_history(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("No questions asked yet.");
        return;
    }

    for turn in transcript.turns() {
        let label = match turn.role {
            Role::User => "\x1b[1;36myou\x1b[0m",
            Role::Assistant => "\x1b[1;32massistant\x1b[0m",
        };
        println!("{label}: {}\n", turn.content);
    }
}
