use serde_json::json;

use crate::cli;
use crate::error::TicklistError;
use crate::output;
use crate::score::productivity_score;

pub fn run(id: &str, json_output: bool) -> i32 {
    match run_inner(id, json_output) {
        Ok(code) => code,
        Err(e) => cli::report_error(&e, json_output),
    }
}

fn run_inner(id: &str, json_output: bool) -> Result<i32, TicklistError> {
    let mut store = cli::open_store()?;
    let removed = store.delete_task(id)?;
    let score = productivity_score(store.tasks());

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": output::json::task_json(&removed),
            "score": score
        })));
    } else {
        println!("Deleted task: {} ({})", removed.text, removed.id);
        println!("Productivity score: {score}%");
    }
    Ok(0)
}
