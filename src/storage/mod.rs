pub mod sqlite;

pub use sqlite::*;

use crate::error::TicklistError;

/// Key holding the serialized task list snapshot.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the theme literal ("dark" or "light").
pub const THEME_KEY: &str = "theme";

/// Key-value persistence port. The task store is the only caller; the CLI
/// and output layers never touch storage directly.
pub trait StoragePort {
    fn load(&self, key: &str) -> Result<Option<String>, TicklistError>;
    fn save(&self, key: &str, value: &str) -> Result<(), TicklistError>;
}
