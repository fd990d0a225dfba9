use clap::Parser;
use std::process;
use todo::TaskError;
use todo::cli::{Cli, Commands};
use todo::cli_handlers;
use todo::config::Config;
use todo::output::{EMPTY_TITLE, TASK_NOT_FOUND};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let result = match cli.command {
        Some(Commands::Init) => cli_handlers::handle_init(&config),
        Some(Commands::Add { title, priority }) => {
            cli_handlers::handle_add(&config, &title, priority)
        }
        Some(Commands::List { json }) => cli_handlers::handle_list(&config, json),
        Some(Commands::Toggle { id }) => cli_handlers::handle_toggle(&config, &id),
        Some(Commands::Delete { id }) => cli_handlers::handle_delete(&config, &id),
        Some(Commands::Show { id }) => cli_handlers::handle_show(&config, &id),
        Some(Commands::Menu) | None => cli_handlers::handle_menu(&config),
    };

    if let Err(e) = result {
        match &e {
            TaskError::TaskNotFound(_) => eprintln!("{TASK_NOT_FOUND}"),
            TaskError::EmptyTitle => eprintln!("{EMPTY_TITLE}"),
            e if e.is_user_error() => eprintln!("[!] {e}"),
            _ => eprintln!("Error: {e}"),
        }
        process::exit(1);
    }
}
