//! Task commands: add, list, edit, archive, delete and filter by priority.
//!
//! Every handler resolves the current [`Session`] first and only ever
//! touches tasks that belong to the session user. A task owned by another
//! user is reported as not found, so ids never leak across accounts.

use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        session::Session,
        task::{filter_by_priority, Task, TaskUpdate},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a new task
    Add {
        /// Task title
        #[arg(short, long)]
        title: Option<String>,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date, free text such as 2026-09-01
        #[arg(long)]
        due: Option<String>,
        /// Numeric priority
        #[arg(short, long)]
        priority: Option<i32>,
        /// Comma separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// List your tasks
    List {
        /// Show archived tasks instead of active ones
        #[arg(short, long)]
        archived: bool,
    },
    /// Edit a task
    Edit {
        /// Task ID to edit
        id: i32,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description, an empty string clears it
        #[arg(short, long)]
        description: Option<String>,
        /// New due date, an empty string clears it
        #[arg(long)]
        due: Option<String>,
        /// New priority
        #[arg(short, long)]
        priority: Option<i32>,
        /// New tags, an empty string clears them
        #[arg(long)]
        tags: Option<String>,
    },
    /// Archive a task
    Archive {
        /// Task ID to archive
        id: i32,
    },
    /// Delete a task permanently
    Delete {
        /// Task ID to delete
        id: i32,
    },
    /// Show active tasks with an exact priority
    Filter {
        /// Priority to match
        priority: Option<i32>,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Add {
            title,
            description,
            due,
            priority,
            tags,
        }) => handle_add(title, description, due, priority, tags),
        Some(TaskCommand::List { archived }) => handle_list(archived),
        Some(TaskCommand::Edit {
            id,
            title,
            description,
            due,
            priority,
            tags,
        }) => handle_edit(
            id,
            TaskUpdate {
                title,
                description,
                due_date: due,
                priority,
                tags,
            },
        ),
        Some(TaskCommand::Archive { id }) => handle_archive(id),
        Some(TaskCommand::Delete { id }) => handle_delete(id),
        Some(TaskCommand::Filter { priority }) => handle_filter(priority),
        None => handle_interactive(),
    }
}

fn handle_add(title: Option<String>, description: Option<String>, due: Option<String>, priority: Option<i32>, tags: Option<String>) -> Result<()> {
    let session = Session::require()?;

    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let description = match description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let due_date = match due {
        Some(due) => due,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let priority = match priority {
        Some(priority) => priority,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskPriority.to_string())
            .default(1)
            .interact_text()?,
    };
    let tags = match tags {
        Some(tags) => tags,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTags.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let task = Task::new(session.user_id, &title, &description, &due_date, priority, &tags);
    Tasks::new()?.add(&task)?;

    msg_success!(Message::TaskAdded(title));
    Ok(())
}

fn handle_list(archived: bool) -> Result<()> {
    let session = Session::require()?;
    let tasks = Tasks::new()?.fetch(session.user_id, archived)?;

    if tasks.is_empty() {
        if archived {
            msg_info!(Message::NoArchivedTasksFound);
        } else {
            msg_info!(Message::NoTasksFound);
        }
        return Ok(());
    }

    if archived {
        msg_print!(Message::ArchivedTasksHeader, true);
    } else {
        msg_print!(Message::TasksHeader, true);
    }
    View::tasks(&tasks, Config::read()?.show_tags())?;
    Ok(())
}

fn handle_edit(task_id: i32, update: TaskUpdate) -> Result<()> {
    let session = Session::require()?;
    let mut tasks_db = Tasks::new()?;

    let task = match owned_task(&mut tasks_db, &session, task_id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(task_id));
            return Ok(());
        }
    };

    // Flags given on the command line are applied as-is, no prompting
    if !update.is_empty() {
        let updated = tasks_db.edit(task_id, &update)?;
        msg_success!(Message::TaskUpdatedWithTitle(updated.title));
        return Ok(());
    }

    msg_print!(Message::CurrentTaskState, true);
    View::task(&task)?;

    let update = prompt_update(&task)?;
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let mut preview = task.clone();
    update.apply(&mut preview);
    msg_print!(Message::TaskEditPreview, true);
    View::task(&preview)?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmTaskUpdate.to_string())
        .default(true)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let updated = tasks_db.edit(task_id, &update)?;
    msg_success!(Message::TaskUpdatedWithTitle(updated.title));
    Ok(())
}

fn handle_archive(task_id: i32) -> Result<()> {
    let session = Session::require()?;
    let mut tasks_db = Tasks::new()?;

    let task = match owned_task(&mut tasks_db, &session, task_id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(task_id));
            return Ok(());
        }
    };

    // Archive is idempotent; only the message differs
    tasks_db.archive(task_id)?;
    if task.archived {
        msg_warning!(Message::TaskAlreadyArchived(task_id));
    } else {
        msg_success!(Message::TaskArchived(task_id));
    }
    Ok(())
}

fn handle_delete(task_id: i32) -> Result<()> {
    let session = Session::require()?;
    let mut tasks_db = Tasks::new()?;

    if owned_task(&mut tasks_db, &session, task_id)?.is_none() {
        msg_error!(Message::TaskNotFoundWithId(task_id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task_id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        tasks_db.delete(task_id)?;
        msg_success!(Message::TaskDeleted(task_id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_filter(priority: Option<i32>) -> Result<()> {
    let session = Session::require()?;

    let level = match priority {
        Some(level) => level,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFilterPriority.to_string())
            .interact_text()?,
    };

    let tasks = Tasks::new()?.fetch(session.user_id, false)?;
    let matching = filter_by_priority(tasks, level);

    if matching.is_empty() {
        msg_info!(Message::NoTasksMatchPriority(level));
        return Ok(());
    }

    msg_print!(Message::TasksWithPriorityHeader(level), true);
    View::tasks(&matching, Config::read()?.show_tags())?;
    Ok(())
}

/// Fetches a task and checks it belongs to the session user. A task owned
/// by someone else looks exactly like a missing one.
fn owned_task(tasks_db: &mut Tasks, session: &Session, task_id: i32) -> Result<Option<Task>> {
    Ok(tasks_db.get(task_id)?.filter(|task| session.owns(task)))
}

/// Prompts for every editable field with the current value as the default
/// and keeps only the ones the operator actually changed.
fn prompt_update(task: &Task) -> Result<TaskUpdate> {
    let mut update = TaskUpdate::default();

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;
    if title != task.title {
        update.title = Some(title);
    }

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone())
        .allow_empty(true)
        .interact_text()?;
    if description != task.description {
        update.description = Some(description);
    }

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date.clone())
        .allow_empty(true)
        .interact_text()?;
    if due_date != task.due_date {
        update.due_date = Some(due_date);
    }

    let priority: i32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default(task.priority)
        .interact_text()?;
    if priority != task.priority {
        update.priority = Some(priority);
    }

    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTags.to_string())
        .default(task.tags.clone())
        .allow_empty(true)
        .interact_text()?;
    if tags != task.tags {
        update.tags = Some(tags);
    }

    Ok(update)
}

fn handle_interactive() -> Result<()> {
    let options = vec![
        "Add task",
        "List tasks",
        "List archived tasks",
        "Edit task",
        "Archive task",
        "Delete task",
        "Filter by priority",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_add(None, None, None, None, None),
        1 => handle_list(false),
        2 => handle_list(true),
        3 => match select_task(Message::SelectTaskToEdit)? {
            Some(task_id) => handle_edit(task_id, TaskUpdate::default()),
            None => Ok(()),
        },
        4 => match select_task(Message::SelectTaskToArchive)? {
            Some(task_id) => handle_archive(task_id),
            None => Ok(()),
        },
        5 => match select_task(Message::SelectTaskToDelete)? {
            Some(task_id) => handle_delete(task_id),
            None => Ok(()),
        },
        6 => handle_filter(None),
        _ => Ok(()),
    }
}

/// Lists the session user's active tasks and lets the operator pick one.
/// `None` when there is nothing to pick from.
fn select_task(prompt: Message) -> Result<Option<i32>> {
    let session = Session::require()?;
    let tasks = Tasks::new()?.fetch(session.user_id, false)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|task| format!("[{}] {}", task.id.unwrap_or(0), task.title)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(tasks[selection].id)
}
