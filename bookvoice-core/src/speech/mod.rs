//! Speech synthesis through external engines

mod espeak;

pub use espeak::{Espeak, DEFAULT_PROGRAM};

use crate::error::Result;
use crate::types::TextFile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default voice passed to the engine
pub const DEFAULT_VOICE: &str = "en-us";

/// Default speech rate in words per minute
pub const DEFAULT_SPEED: u32 = 400;

/// Voice and rate used for synthesis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeechOptions {
    pub voice: String,

    /// Words per minute
    pub speed: u32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            speed: DEFAULT_SPEED,
        }
    }
}

/// A text-to-speech program that can render a text file to audio
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Name of the engine, used in messages
    fn name(&self) -> &str;

    /// Fail with `SpeechEngineUnavailable` if the engine cannot be run
    async fn ensure_available(&self) -> Result<()>;

    /// Render `text` to a wave file at `output`
    async fn synthesize(&self, text: &TextFile, output: &Path, options: &SpeechOptions)
        -> Result<()>;
}

/// Generate an audio file from extracted text
///
/// Checks the engine first, so nothing is written when it is missing.
pub async fn generate_audio_file(
    engine: &dyn SpeechEngine,
    text: &TextFile,
    output: &Path,
    options: &SpeechOptions,
) -> Result<()> {
    engine.ensure_available().await?;
    engine.synthesize(text, output, options).await?;

    info!(
        engine = engine.name(),
        voice = %options.voice,
        speed = options.speed,
        output = %output.display(),
        "Audio file generated"
    );
    Ok(())
}
