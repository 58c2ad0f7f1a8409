//! Table and report rendering

use std::io::{self, Write};

use super::{pad, truncate};
use crate::task::{Task, TaskStats};

const TABLE_COL_ID: usize = 5;
const TABLE_COL_NAME: usize = 25;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_STATUS: usize = 10;
const TABLE_COL_CATEGORY: usize = 15;
const TABLE_WIDTH: usize = 80;
const DESCRIPTION_PREVIEW: usize = 60;
const REPORT_WIDTH: usize = 50;

fn write_table_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(TABLE_WIDTH))?;
    writeln!(
        out,
        "{:<width_id$} {:<width_name$} {:<10} {:<12} {:<width_category$}",
        "ID",
        "NAME",
        "PRIORITY",
        "STATUS",
        "CATEGORY",
        width_id = TABLE_COL_ID,
        width_name = TABLE_COL_NAME,
        width_category = TABLE_COL_CATEGORY
    )?;
    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))
}

fn write_task_row(out: &mut impl Write, task: &Task) -> io::Result<()> {
    writeln!(
        out,
        "{:<width_id$} {} {} {} {} {} {}",
        task.id,
        pad(truncate(&task.name, TABLE_COL_NAME - 1), TABLE_COL_NAME),
        task.priority.emoji(),
        pad(task.priority.label(), TABLE_COL_PRIORITY),
        task.status.emoji(),
        pad(task.status.label(), TABLE_COL_STATUS),
        pad(
            truncate(&task.category, TABLE_COL_CATEGORY - 1),
            TABLE_COL_CATEGORY
        ),
        width_id = TABLE_COL_ID
    )?;

    if !task.description.is_empty() {
        let preview: String = task.description.chars().take(DESCRIPTION_PREVIEW).collect();
        writeln!(out, "      Description: {}", preview)?;
    }

    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|tag| format!("#{}", tag)).collect();
        writeln!(out, "      Tags: {}", tags.join(", "))?;
    }

    if !task.due_date.is_empty() {
        writeln!(out, "      📅 Due: {}", task.due_date)?;
    }

    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))
}

/// Print tasks as a table, one row per task plus optional detail lines.
pub fn write_task_table(out: &mut impl Write, tasks: &[&Task]) -> io::Result<()> {
    write_table_header(out)?;
    for task in tasks {
        write_task_row(out, task)?;
    }
    Ok(())
}

pub fn write_stats(out: &mut impl Write, stats: &TaskStats) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(REPORT_WIDTH))?;
    writeln!(out, "📊 TASK STATISTICS")?;
    writeln!(out, "{}", "=".repeat(REPORT_WIDTH))?;
    writeln!(out, "Total tasks: {}", stats.total)?;

    writeln!(out, "\n📈 By status:")?;
    for (icon, label, count) in [
        ("⏳", "Pending", stats.pending),
        ("🔄", "In progress", stats.in_progress),
        ("✅", "Completed", stats.completed),
    ] {
        writeln!(
            out,
            "  {} {}: {} ({:.1}%)",
            icon,
            label,
            count,
            stats.percent(count)
        )?;
    }

    writeln!(out, "\n🎯 By priority:")?;
    writeln!(out, "  🔴 High: {}", stats.high)?;
    writeln!(out, "  🟡 Medium: {}", stats.medium)?;
    writeln!(out, "  🟢 Low: {}", stats.low)?;
    writeln!(out, "{}", "=".repeat(REPORT_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskPriority, TaskStatus};

    fn render_table(tasks: &[Task]) -> String {
        let refs: Vec<&Task> = tasks.iter().collect();
        let mut out = Vec::new();
        write_task_table(&mut out, &refs).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_row_shows_core_columns() {
        let mut task = Task::new(12, "Buy milk");
        task.priority = TaskPriority::High;
        task.category = "Home".to_string();

        let output = render_table(&[task]);
        assert!(output.contains("ID    NAME"));
        assert!(output.contains("12    Buy milk"));
        assert!(output.contains("🔴 Alta"));
        assert!(output.contains("⏳ Pendiente"));
        assert!(output.contains("Home"));
        assert!(!output.contains("Description:"));
        assert!(!output.contains("Tags:"));
        assert!(!output.contains("Due:"));
    }

    #[test]
    fn test_row_detail_lines() {
        let mut task = Task::new(1, "Report");
        task.status = TaskStatus::Completed;
        task.description = "x".repeat(80);
        task.tags = vec!["work".to_string(), "urgent".to_string()];
        task.due_date = "31/12/2026".to_string();

        let output = render_table(&[task]);
        assert!(output.contains("✅ Completada"));
        assert!(output.contains(&format!("Description: {}\n", "x".repeat(60))));
        assert!(output.contains("Tags: #work, #urgent"));
        assert!(output.contains("📅 Due: 31/12/2026"));
    }

    #[test]
    fn test_long_name_is_truncated() {
        let task = Task::new(1, "A very long task name that overflows");
        let output = render_table(&[task]);

        assert!(output.contains("A very long task name th "));
        assert!(!output.contains("overflows"));
    }

    #[test]
    fn test_stats_report() {
        let mut done = Task::new(2, "b");
        done.status = TaskStatus::Completed;
        done.priority = TaskPriority::Low;
        let tasks = vec![Task::new(1, "a"), done, Task::new(3, "c")];
        let stats = TaskStats::compute(&tasks).unwrap();

        let mut out = Vec::new();
        write_stats(&mut out, &stats).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Total tasks: 3"));
        assert!(output.contains("Pending: 2 (66.7%)"));
        assert!(output.contains("In progress: 0 (0.0%)"));
        assert!(output.contains("Completed: 1 (33.3%)"));
        assert!(output.contains("🟡 Medium: 2"));
        assert!(output.contains("🟢 Low: 1"));
    }
}
