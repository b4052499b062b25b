use serde_json::json;

use crate::cli;
use crate::dictation::Dictation;
use crate::error::TicklistError;
use crate::output;

pub fn run(category: &str, json_output: bool) -> i32 {
    match run_inner(category, json_output) {
        Ok(code) => code,
        Err(e) => cli::report_error(&e, json_output),
    }
}

fn run_inner(category: &str, json_output: bool) -> Result<i32, TicklistError> {
    let category = cli::add::parse_category(category)?;

    // Capability check before anything touches the store.
    let dictation = Dictation::detect();
    let transcript = dictation.engine()?.transcribe()?;

    let mut store = cli::open_store()?;
    match store.add_task(&transcript, category)? {
        Some(task) => {
            if json_output {
                output::json::print(&output::json::success(json!({
                    "transcript": transcript,
                    "added": output::json::task_json(task)
                })));
            } else {
                println!("Heard: {transcript}");
                println!("Added task: {} ({})", task.text, task.id);
            }
        }
        None => {
            // Transcript trimmed to nothing: same silent no-op as `add`.
            if json_output {
                output::json::print(&output::json::success(json!({
                    "transcript": transcript,
                    "added": null
                })));
            }
        }
    }
    Ok(0)
}
