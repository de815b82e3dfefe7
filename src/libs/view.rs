//! Console table rendering for tasks.

use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the task list table: id, title, due date, priority and
    /// status, plus tags when enabled.
    pub fn tasks(tasks: &[Task], show_tags: bool) -> Result<()> {
        let mut table = Table::new();

        if show_tags {
            table.add_row(row!["ID", "TITLE", "DUE DATE", "PRIORITY", "STATUS", "TAGS"]);
        } else {
            table.add_row(row!["ID", "TITLE", "DUE DATE", "PRIORITY", "STATUS"]);
        }
        for task in tasks {
            if show_tags {
                table.add_row(row![task.id.unwrap_or(0), task.title, task.due_date, task.priority, task.status, task.tags]);
            } else {
                table.add_row(row![task.id.unwrap_or(0), task.title, task.due_date, task.priority, task.status]);
            }
        }
        table.printstd();

        Ok(())
    }

    /// Renders a single task as a field/value table, used for the edit
    /// preview.
    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["DUE DATE", task.due_date]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["TAGS", task.tags]);
        table.add_row(row!["ARCHIVED", task.archived]);
        table.printstd();

        Ok(())
    }
}
