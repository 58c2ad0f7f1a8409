//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "task-manager")]
#[command(about = "Interactive terminal to-do tracker")]
#[command(version)]
pub struct Cli {
    /// Directory holding tareas.json and the legacy tareas.txt
    #[arg(long, env = "TASK_MANAGER_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}
