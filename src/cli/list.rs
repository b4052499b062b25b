use crate::cli;
use crate::error::TicklistError;
use crate::output;
use crate::score::productivity_score;

pub fn run(json_output: bool) -> i32 {
    match run_inner(json_output) {
        Ok(code) => code,
        Err(e) => cli::report_error(&e, json_output),
    }
}

fn run_inner(json_output: bool) -> Result<i32, TicklistError> {
    let store = cli::open_store()?;
    let tasks = store.tasks();
    let score = productivity_score(tasks);

    if json_output {
        output::json::print(&output::json::success(output::json::list_json(
            tasks, score,
        )));
    } else {
        output::text::print_task_list(tasks, score);
    }
    Ok(0)
}
