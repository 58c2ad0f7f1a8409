//! Task Manager - interactive terminal to-do tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;
use task_manager::cli::{self, Cli, Commands, Prompt};
use task_manager::task::Storage;

fn main() -> Result<()> {
    if std::env::var("TASK_MANAGER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_manager=debug")
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "task-manager", &mut io::stdout());
        return Ok(());
    }

    let storage = Storage::new(&cli.data_dir);
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    cli::menu::run(&storage, &mut prompt)?;
    Ok(())
}
