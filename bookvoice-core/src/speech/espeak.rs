//! eSpeak command-line engine

use super::{SpeechEngine, SpeechOptions};
use crate::error::{BookvoiceError, Result};
use crate::types::TextFile;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Default program name looked up on `PATH`
pub const DEFAULT_PROGRAM: &str = "espeak";

/// Runs `espeak` (or a compatible program such as `espeak-ng`)
pub struct Espeak {
    program: String,
}

impl Espeak {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use another program with the same command-line interface
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn failed(&self, message: String) -> BookvoiceError {
        BookvoiceError::SpeechExecution {
            program: self.program.clone(),
            message,
        }
    }

    fn unavailable(&self) -> BookvoiceError {
        BookvoiceError::SpeechEngineUnavailable {
            program: self.program.clone(),
        }
    }
}

impl Default for Espeak {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechEngine for Espeak {
    fn name(&self) -> &str {
        &self.program
    }

    async fn ensure_available(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                debug!(program = %self.program, "Failed to spawn speech engine: {e}");
                self.unavailable()
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(self.unavailable())
        }
    }

    async fn synthesize(
        &self,
        text: &TextFile,
        output: &Path,
        options: &SpeechOptions,
    ) -> Result<()> {
        debug!(
            program = %self.program,
            input = %text.path.display(),
            output = %output.display(),
            "Running speech engine"
        );

        let result = Command::new(&self.program)
            .arg("-v")
            .arg(&options.voice)
            .arg("-s")
            .arg(options.speed.to_string())
            .arg("-f")
            .arg(&text.path)
            .arg("-w")
            .arg(output)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.failed(format!("Failed to run {}: {}", self.program, e)))?;

        if result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        let detail = if stderr.trim().is_empty() {
            result.status.to_string()
        } else {
            stderr.trim().to_string()
        };

        Err(self.failed(format!("Failed to generate audio file: {}", detail)))
    }
}
