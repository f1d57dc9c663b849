//! Book to text to speech, end to end

use anyhow::{Context, Result};
use bookvoice_core::{convert_book_to_text, generate_audio_file, BookFile, Espeak};
use bookvoice_core::{SpeechOptions, TextFile};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Everything a single run needs
pub struct Request {
    pub book: PathBuf,
    pub start_page: usize,
    pub options: SpeechOptions,
    /// Speech engine program
    pub engine: String,
    pub text_only: bool,
}

/// Files produced by a successful run
pub struct Outcome {
    pub text_file: TextFile,
    pub audio: Option<PathBuf>,
}

/// Convert the requested book to text, then to audio
pub async fn run(request: Request) -> Result<Outcome> {
    let book = BookFile::from_path(&request.book)?;

    tracing::info!(
        "Converting {} file: {}",
        book.format.as_str().to_uppercase(),
        book.path.display()
    );
    tracing::info!("Starting from page: {}", request.start_page);

    // Set up progress spinner
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = convert_and_speak(&request, book, &pb).await;
    pb.finish_and_clear();
    result
}

async fn convert_and_speak(request: &Request, book: BookFile, pb: &ProgressBar) -> Result<Outcome> {
    pb.set_message("Converting book to text...");
    let start_page = request.start_page;
    let text_book = book.clone();
    let text_file = tokio::task::spawn_blocking(move || convert_book_to_text(&text_book, start_page))
        .await
        .context("Text conversion task failed")??;

    tracing::info!("Text file created: {}", text_file.path.display());

    if request.text_only {
        return Ok(Outcome {
            text_file,
            audio: None,
        });
    }

    let output = book.audio_path();
    pb.set_message("Generating audio file...");

    let engine = Espeak::with_program(request.engine.as_str());
    generate_audio_file(&engine, &text_file, &output, &request.options).await?;

    Ok(Outcome {
        text_file,
        audio: Some(output),
    })
}
