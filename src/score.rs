use crate::models::Task;

/// Productivity percentage: completed tasks over all tasks, rounded to the
/// nearest integer. The empty list scores 0, not a division error.
/// Always derived from the current list, never stored.
pub fn productivity_score(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
}
