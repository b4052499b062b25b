use serde_json::{json, Value};

use crate::error::TicklistError;
use crate::models::{Task, Theme};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TicklistError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "text": t.text,
        "category": t.category.as_str(),
        "completed": t.completed,
        "created_at": t.created_at
    })
}

pub fn list_json(tasks: &[Task], score: u8) -> Value {
    json!({
        "tasks": tasks.iter().map(task_json).collect::<Vec<_>>(),
        "score": score
    })
}

pub fn status_json(total: usize, done: usize, score: u8, theme: Theme) -> Value {
    json!({
        "total": total,
        "open": total - done,
        "done": done,
        "score": score,
        "theme": theme.as_str()
    })
}

pub fn theme_json(theme: Theme) -> Value {
    json!({ "theme": theme.as_str() })
}

/// Print the envelope. All command output funnels through here or the text
/// printers so the view layer stays presentation-only.
pub fn print(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}
