use serde::{Deserialize, Serialize};

/// Persisted category literals are capitalized ("Work"), CLI input is
/// lowercase ("work").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Urgent,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Urgent => "Urgent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Create a new open task with a fresh ULID. `text` must already be
    /// trimmed and non-empty; the store enforces that.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            text: text.into(),
            category,
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
