use serde_json::json;

use crate::cli;
use crate::error::TicklistError;
use crate::models::Category;
use crate::output;

pub fn run(text: &str, category: &str, json_output: bool) -> i32 {
    match run_inner(text, category, json_output) {
        Ok(code) => code,
        Err(e) => cli::report_error(&e, json_output),
    }
}

fn run_inner(text: &str, category: &str, json_output: bool) -> Result<i32, TicklistError> {
    let category = parse_category(category)?;
    let mut store = cli::open_store()?;

    match store.add_task(text, category)? {
        Some(task) => {
            if json_output {
                output::json::print(&output::json::success(json!({
                    "added": output::json::task_json(task)
                })));
            } else {
                println!("Added task: {} ({})", task.text, task.id);
            }
        }
        None => {
            // Empty after trimming: silent no-op.
            if json_output {
                output::json::print(&output::json::success(json!({ "added": null })));
            }
        }
    }
    Ok(0)
}

pub(crate) fn parse_category(s: &str) -> Result<Category, TicklistError> {
    Category::from_str(s).ok_or_else(|| {
        TicklistError::validation(format!(
            "Unknown category '{s}'. Expected one of: work, personal, urgent."
        ))
    })
}
