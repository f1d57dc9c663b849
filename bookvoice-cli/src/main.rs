//! Bookvoice CLI - read PDF and EPUB books aloud

mod pipeline;
mod report;

use bookvoice_core::speech::{DEFAULT_PROGRAM, DEFAULT_SPEED, DEFAULT_VOICE};
use bookvoice_core::SpeechOptions;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the start page (must be at least 1)
fn parse_start_page(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("Starting page must be a positive integer".to_string()),
    }
}

/// Parse and validate the speech rate (must be at least 1)
fn parse_speed(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("Speed must be a positive integer".to_string()),
    }
}

/// Convert a PDF or EPUB book to text and read it aloud into a wave file
#[derive(Parser)]
#[command(name = "bookvoice")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Path to the PDF or EPUB file
    book: PathBuf,

    /// Page (PDF) or chapter (EPUB) to start from
    #[arg(default_value = "1", value_parser = parse_start_page)]
    start_page: usize,

    /// Voice passed to the speech engine
    #[arg(long, default_value = DEFAULT_VOICE)]
    voice: String,

    /// Speech rate in words per minute
    #[arg(long, default_value_t = DEFAULT_SPEED, value_parser = parse_speed)]
    speed: u32,

    /// Speech engine program (espeak-compatible)
    #[arg(long, env = "BOOKVOICE_ENGINE", default_value = DEFAULT_PROGRAM)]
    engine: String,

    /// Only write the text file, skip audio generation
    #[arg(long)]
    text_only: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures. A failed
            // write here has no other channel to be reported on.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing
    let filter = if cli.verbose {
        "bookvoice_cli=debug,bookvoice_core=debug"
    } else {
        "bookvoice_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request = pipeline::Request {
        book: cli.book,
        start_page: cli.start_page,
        options: SpeechOptions {
            voice: cli.voice,
            speed: cli.speed,
        },
        engine: cli.engine,
        text_only: cli.text_only,
    };

    match pipeline::run(request).await {
        Ok(outcome) => {
            println!("Text file created: {}", outcome.text_file.path.display());
            if let Some(audio) = &outcome.audio {
                println!("Audio file generated: {}", audio.display());
            }
            println!("Conversion completed successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report::report(&err);
            ExitCode::FAILURE
        }
    }
}
