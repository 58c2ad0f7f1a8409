//! Interactive main menu
//!
//! Loads the collection, loops over the numbered menu until the user saves
//! and exits, then returns the final store. Every prompt goes through
//! [`Prompt`], so a session can be scripted from any reader.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

use super::prompt::Prompt;
use super::render;
use crate::task::{
    parse_tags, parse_task_id, LoadOutcome, Storage, TaskDraft, TaskError, TaskFilter, TaskId,
    TaskPriority, TaskStatus, TaskStore, TaskUpdate,
};

const MENU_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    ListPending,
    ListCompleted,
    Add,
    Edit,
    Delete,
    Search,
    Stats,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        Self::ListAll,
        Self::ListPending,
        Self::ListCompleted,
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Search,
        Self::Stats,
        Self::SaveAndExit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .zip(1..)
            .find(|(_, number)| number.to_string() == input)
            .map(|(choice, _)| *choice)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ListAll => "View all tasks",
            Self::ListPending => "View pending tasks",
            Self::ListCompleted => "View completed tasks",
            Self::Add => "Add task",
            Self::Edit => "Edit task",
            Self::Delete => "Delete task",
            Self::Search => "Search tasks",
            Self::Stats => "Statistics",
            Self::SaveAndExit => "Save and exit",
        }
    }
}

/// Answers that confirm a deletion. Anything else cancels.
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

pub fn run<R: BufRead, W: Write>(
    storage: &Storage,
    prompt: &mut Prompt<R, W>,
) -> Result<TaskStore> {
    writeln!(prompt.out(), "🚀 Starting Task Manager...")?;

    let mut store = TaskStore::new();
    match store.load(storage) {
        Ok(LoadOutcome::Loaded(count)) => writeln!(prompt.out(), "✅ Loaded {} tasks.", count)?,
        Ok(LoadOutcome::Migrated { count, save_error }) => {
            writeln!(
                prompt.out(),
                "✅ Migrated {} tasks to the new format.",
                count
            )?;
            if let Some(e) = save_error {
                writeln!(prompt.out(), "⚠️ Error saving: {}", e)?;
            }
        }
        Ok(LoadOutcome::Empty) => {}
        Err(e) => {
            warn!("Starting with an empty task list: {}", e);
            writeln!(prompt.out(), "⚠️ Error loading tasks: {}", e)?;
        }
    }

    loop {
        write_menu(prompt.out())?;

        let Some(input) = prompt.ask("\n🎯 Choose an option (1-9): ")? else {
            // Input closed: treat as save and exit.
            save_tasks(&store, storage, prompt)?;
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::ListAll) => list_tasks(&store, &TaskFilter::All, prompt.out())?,
            Some(MenuChoice::ListPending) => {
                list_tasks(&store, &TaskFilter::from_selector(Some("pending")), prompt.out())?
            }
            Some(MenuChoice::ListCompleted) => list_tasks(
                &store,
                &TaskFilter::from_selector(Some("completed")),
                prompt.out(),
            )?,
            Some(MenuChoice::Add) => add_task(&mut store, prompt)?,
            Some(MenuChoice::Edit) => edit_task(&mut store, prompt)?,
            Some(MenuChoice::Delete) => delete_task(&mut store, prompt)?,
            Some(MenuChoice::Search) => search_tasks(&store, prompt)?,
            Some(MenuChoice::Stats) => show_stats(&store, prompt.out())?,
            Some(MenuChoice::SaveAndExit) => {
                if save_tasks(&store, storage, prompt)? {
                    break;
                }
            }
            None => writeln!(prompt.out(), "❌ Invalid option. Try again.")?,
        }
    }

    Ok(store)
}

fn write_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(MENU_WIDTH))?;
    writeln!(out, "  📋 TASK MANAGER")?;
    writeln!(out, "{}", "=".repeat(MENU_WIDTH))?;
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{:<3} {}", format!("{}.", index + 1), choice.label())?;
    }
    writeln!(out, "{}", "=".repeat(MENU_WIDTH))?;
    Ok(())
}

/// Returns whether the save succeeded.
fn save_tasks<R: BufRead, W: Write>(
    store: &TaskStore,
    storage: &Storage,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    match store.save(storage) {
        Ok(()) => {
            writeln!(prompt.out(), "\n💾 Data saved. Goodbye! 👋")?;
            Ok(true)
        }
        Err(e) => {
            warn!("Save failed: {}", e);
            writeln!(prompt.out(), "⚠️ Error saving: {}", e)?;
            Ok(false)
        }
    }
}

fn list_tasks(store: &TaskStore, filter: &TaskFilter, out: &mut impl Write) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "\n📋 No tasks registered.")?;
        return Ok(());
    }

    let tasks = store.filter(filter);
    if tasks.is_empty() {
        writeln!(out, "\n📋 No tasks match the filter.")?;
        return Ok(());
    }

    render::write_task_table(out, &tasks)?;
    Ok(())
}

fn write_priority_options(out: &mut impl Write) -> Result<()> {
    for (index, priority) in [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low]
        .iter()
        .enumerate()
    {
        writeln!(out, "{}. {}", index + 1, priority)?;
    }
    Ok(())
}

fn add_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    writeln!(prompt.out(), "\n--- ADD NEW TASK ---")?;

    let Some(name) = prompt.ask("📝 Task name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(prompt.out(), "❌ {}", TaskError::EmptyName)?;
        return Ok(());
    }

    let Some(description) = prompt.ask("📄 Description (optional): ")? else {
        return Ok(());
    };

    writeln!(prompt.out(), "\n🎯 Priority:")?;
    write_priority_options(prompt.out())?;
    let Some(priority) = prompt.ask("Choose priority (1-3): ")? else {
        return Ok(());
    };

    let Some(category) = prompt.ask("📂 Category (e.g. Work, Personal, Study): ")? else {
        return Ok(());
    };

    writeln!(
        prompt.out(),
        "\n🏷️ Tags (comma separated, e.g. urgent,important):"
    )?;
    let Some(tags) = prompt.ask("Tags: ")? else {
        return Ok(());
    };

    writeln!(prompt.out(), "\n📅 Due date (DD/MM/YYYY, optional):")?;
    let Some(due_date) = prompt.ask("Date: ")? else {
        return Ok(());
    };

    let draft = TaskDraft {
        name,
        description,
        priority: TaskPriority::from_choice(&priority).unwrap_or_default(),
        category,
        tags: parse_tags(&tags),
        due_date,
    };

    match store.add(draft) {
        Ok(task) => writeln!(prompt.out(), "\n✅ Task added with ID {}.", task.id)?,
        Err(e) => writeln!(prompt.out(), "❌ {}", e)?,
    }
    Ok(())
}

/// Show the full list, then ask for an ID and resolve it.
///
/// Returns `None` when the operation should stop; the reason has already
/// been reported.
fn select_task<R: BufRead, W: Write>(
    store: &TaskStore,
    prompt: &mut Prompt<R, W>,
    action: &str,
) -> Result<Option<TaskId>> {
    if store.is_empty() {
        writeln!(prompt.out(), "\n📋 No tasks to {}.", action)?;
        return Ok(None);
    }

    list_tasks(store, &TaskFilter::All, prompt.out())?;

    let Some(input) = prompt.ask(&format!("\n🔢 ID of the task to {}: ", action))? else {
        return Ok(None);
    };

    let lookup = parse_task_id(&input)
        .and_then(|id| store.get(id).map(|t| t.id).ok_or(TaskError::NotFound(id)));
    match lookup {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            writeln!(prompt.out(), "❌ {}", e)?;
            Ok(None)
        }
    }
}

fn edit_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let Some(id) = select_task(store, prompt, "edit")? else {
        return Ok(());
    };
    let Some(task) = store.get(id).cloned() else {
        return Ok(());
    };

    writeln!(prompt.out(), "\n--- EDITING: {} ---", task.name)?;

    writeln!(prompt.out(), "\nCurrent name: {}", task.name)?;
    let Some(name) = prompt.ask("New name (Enter to keep): ")? else {
        return Ok(());
    };

    writeln!(prompt.out(), "\nCurrent description: {}", task.description)?;
    let Some(description) = prompt.ask("New description (Enter to keep): ")? else {
        return Ok(());
    };

    writeln!(prompt.out(), "\n🔄 Change status:")?;
    for (index, status) in [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ]
    .iter()
    .enumerate()
    {
        writeln!(prompt.out(), "{}. {}", index + 1, status)?;
    }
    let Some(status) = prompt.ask("Choose (Enter to keep): ")? else {
        return Ok(());
    };

    writeln!(prompt.out(), "\n🎯 Change priority:")?;
    write_priority_options(prompt.out())?;
    let Some(priority) = prompt.ask("Choose (Enter to keep): ")? else {
        return Ok(());
    };

    let changes = TaskUpdate::from_input(&name, &description, &status, &priority);
    match store.update(id, changes) {
        Ok(_) => writeln!(prompt.out(), "\n✅ Task updated.")?,
        Err(e) => writeln!(prompt.out(), "❌ {}", e)?,
    }
    Ok(())
}

fn delete_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let Some(id) = select_task(store, prompt, "delete")? else {
        return Ok(());
    };
    let Some(name) = store.get(id).map(|t| t.name.clone()) else {
        return Ok(());
    };

    let Some(answer) = prompt.ask(&format!("⚠️ Delete '{}'? (y/n): ", name))? else {
        return Ok(());
    };

    if !is_affirmative(&answer) {
        writeln!(prompt.out(), "❌ Operation cancelled.")?;
        return Ok(());
    }

    match store.remove(id) {
        Ok(_) => writeln!(prompt.out(), "✅ Task deleted.")?,
        Err(e) => writeln!(prompt.out(), "❌ {}", e)?,
    }
    Ok(())
}

fn search_tasks<R: BufRead, W: Write>(
    store: &TaskStore,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let Some(term) = prompt.ask("\n🔍 Search tasks: ")? else {
        return Ok(());
    };
    if term.is_empty() {
        return Ok(());
    }

    list_tasks(store, &TaskFilter::from_selector(Some(&term)), prompt.out())
}

fn show_stats(store: &TaskStore, out: &mut impl Write) -> Result<()> {
    match store.stats() {
        Some(stats) => render::write_stats(out, &stats)?,
        None => writeln!(out, "\n📋 No tasks to show statistics for.")?,
    }
    Ok(())
}
