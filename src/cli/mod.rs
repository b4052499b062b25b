pub mod commands;
pub mod add;
pub mod list;
pub mod toggle;
pub mod delete;
pub mod theme;
pub mod speak;
pub mod status;

pub use commands::*;

use crate::error::TicklistError;
use crate::output;
use crate::storage::SqliteStorage;
use crate::store::TaskStore;

pub(crate) fn open_store() -> Result<TaskStore<SqliteStorage>, TicklistError> {
    TaskStore::open(SqliteStorage::open_default()?)
}

pub(crate) fn report_error(e: &TicklistError, json_output: bool) -> i32 {
    if json_output {
        output::json::print(&output::json::error(e));
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}
