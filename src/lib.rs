//! Task Manager library - task store, JSON persistence and the interactive menu

pub mod cli;
pub mod migrations;
pub mod task;
