use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::TicklistError;

/// Recognition locale passed to the transcriber. Fixed; there is no
/// internationalization surface.
const LOCALE: &str = "en-US";

/// Default transcriber executable probed on PATH when no override is set.
const DEFAULT_PROGRAM: &str = "dictate";

/// Speech-to-text capability. Probed once per invocation and checked
/// explicitly before use, so a host without a transcriber gets a clean
/// error instead of a spawn fault.
pub enum Dictation {
    Available(Engine),
    Unavailable,
}

impl Dictation {
    /// $TICKLIST_DICTATION_CMD names the transcriber if set; otherwise a
    /// `dictate` executable on PATH is used. Neither present → Unavailable.
    pub fn detect() -> Self {
        if let Some(program) = env::var_os("TICKLIST_DICTATION_CMD") {
            if !program.is_empty() {
                return Self::Available(Engine::new(program));
            }
        }
        match find_on_path(DEFAULT_PROGRAM) {
            Some(path) => Self::Available(Engine::new(path)),
            None => Self::Unavailable,
        }
    }

    pub fn engine(&self) -> Result<&Engine, TicklistError> {
        match self {
            Self::Available(engine) => Ok(engine),
            Self::Unavailable => Err(TicklistError::dictation_unavailable()),
        }
    }
}

/// Handle on a concrete transcriber program.
pub struct Engine {
    program: OsString,
}

impl Engine {
    fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run one recognition session and return the first finalized
    /// transcript: the first non-empty stdout line, trimmed. The session is
    /// not continuous; the program is expected to exit after one result.
    pub fn transcribe(&self) -> Result<String, TicklistError> {
        let output = Command::new(&self.program)
            .args(["--language", LOCALE])
            .output()
            .map_err(|e| {
                TicklistError::dictation_failed(format!(
                    "Failed to run transcriber {}: {e}",
                    Path::new(&self.program).display()
                ))
            })?;
        if !output.status.success() {
            return Err(TicklistError::dictation_failed(format!(
                "Transcriber exited with {}",
                output.status
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| TicklistError::dictation_failed("No speech detected"))
    }
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
