use crate::cli;
use crate::cli::commands::ThemeCommands;
use crate::error::TicklistError;
use crate::models::Theme;
use crate::output;

pub fn run(cmd: Option<ThemeCommands>, json_output: bool) -> i32 {
    match run_inner(cmd, json_output) {
        Ok(code) => code,
        Err(e) => cli::report_error(&e, json_output),
    }
}

fn run_inner(cmd: Option<ThemeCommands>, json_output: bool) -> Result<i32, TicklistError> {
    let mut store = cli::open_store()?;

    let theme = match cmd.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => store.theme(),
        ThemeCommands::Dark => {
            store.set_theme(Theme::Dark)?;
            Theme::Dark
        }
        ThemeCommands::Light => {
            store.set_theme(Theme::Light)?;
            Theme::Light
        }
        ThemeCommands::Toggle => {
            let flipped = store.theme().toggled();
            store.set_theme(flipped)?;
            flipped
        }
    };

    if json_output {
        output::json::print(&output::json::success(output::json::theme_json(theme)));
    } else {
        output::text::print_theme(theme);
    }
    Ok(0)
}
