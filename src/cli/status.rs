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
    let total = tasks.len();
    let done = tasks.iter().filter(|t| t.completed).count();
    let score = productivity_score(tasks);
    let theme = store.theme();

    if json_output {
        output::json::print(&output::json::success(output::json::status_json(
            total, done, score, theme,
        )));
    } else {
        output::text::print_status(total, done, score, theme);
    }
    Ok(0)
}
