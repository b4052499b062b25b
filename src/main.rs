use clap::Parser;
use std::process;

use ticklist::cli;
use ticklist::cli::commands::{Cli, Commands};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command {
        Commands::Add { text, category } => cli::add::run(&text, &category, json_output),
        Commands::List => cli::list::run(json_output),
        Commands::Toggle { id } => cli::toggle::run(&id, json_output),
        Commands::Delete { id } => cli::delete::run(&id, json_output),
        Commands::Theme { command } => cli::theme::run(command, json_output),
        Commands::Speak { category } => cli::speak::run(&category, json_output),
        Commands::Status => cli::status::run(json_output),
    };

    process::exit(exit_code);
}
