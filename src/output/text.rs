use crate::models::{Task, Theme};

pub fn print_task(t: &Task) {
    let mark = if t.completed { "x" } else { " " };
    println!(
        "  [{}] [{}] {} ({})",
        mark,
        t.category.as_str(),
        t.text,
        &t.id[..std::cmp::min(8, t.id.len())]
    );
}

pub fn print_task_list(tasks: &[Task], score: u8) {
    println!("Productivity score: {score}%");
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for t in tasks {
        print_task(t);
    }
}

pub fn print_status(total: usize, done: usize, score: u8, theme: Theme) {
    println!("Tasks: {} open, {} done, {} total", total - done, done, total);
    println!("Productivity score: {score}%");
    println!("Theme: {}", theme.as_str());
}

pub fn print_theme(theme: Theme) {
    println!("Theme: {}", theme.as_str());
}
