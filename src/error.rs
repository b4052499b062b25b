use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    TaskNotFound,
    AmbiguousRef,
    ValidationError,
    StorageError,
    DictationUnavailable,
    DictationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::AmbiguousRef => "AMBIGUOUS_REF",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::DictationUnavailable => "DICTATION_UNAVAILABLE",
            Self::DictationFailed => "DICTATION_FAILED",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TicklistError {
    pub code: ErrorCode,
    pub message: String,
}

impl TicklistError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn task_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {reference}"),
        )
    }

    pub fn ambiguous_ref(reference: &str, candidates: &[String]) -> Self {
        Self::new(
            ErrorCode::AmbiguousRef,
            format!(
                "Ambiguous reference '{}'. Candidates: {}",
                reference,
                candidates.join(", ")
            ),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    pub fn dictation_unavailable() -> Self {
        Self::new(
            ErrorCode::DictationUnavailable,
            "No dictation engine available. Set TICKLIST_DICTATION_CMD or put `dictate` on PATH.",
        )
    }

    pub fn dictation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DictationFailed, message)
    }
}

impl From<rusqlite::Error> for TicklistError {
    fn from(e: rusqlite::Error) -> Self {
        Self::storage(e.to_string())
    }
}
