use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "ticklist",
    version = VERSION,
    about = "Persistent to-do list CLI with categories, a productivity score, and voice dictation",
    after_help = "\
NOTE:
  State lives at $TICKLIST_HOME/ticklist.db (default: ~/.ticklist/ticklist.db).
  The store is created on first use; no init step is needed.

BEHAVIOR NOTES:
  `add` with empty or whitespace-only text is a silent no-op (exit 0).
  `toggle`/`delete` accept a full task id or any unique id prefix.
  `speak` needs a transcriber: $TICKLIST_DICTATION_CMD, or `dictate` on PATH.

EXIT CODES:
  0  Success
  1  Error (unknown task, storage failure, dictation unavailable, etc.)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task text (leading/trailing whitespace is trimmed)
        text: String,

        /// Task category
        #[arg(long, default_value = "work")]
        category: String,
    },

    /// List tasks with the productivity score
    List,

    /// Toggle a task's completed flag
    Toggle {
        /// Task id or unique prefix
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task id or unique prefix
        id: String,
    },

    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },

    /// Dictate a task via the speech transcriber
    #[command(after_help = "\
NOTE:
  Runs one recognition session (locale en-US) and adds a task from the first
  finalized transcript. A whitespace-only transcript adds nothing, like `add`.")]
    Speak {
        /// Category for the dictated task
        #[arg(long, default_value = "work")]
        category: String,
    },

    /// Show task counts, score, and theme
    Status,
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch to dark mode
    Dark,
    /// Switch to light mode
    Light,
    /// Flip between light and dark
    Toggle,
}
