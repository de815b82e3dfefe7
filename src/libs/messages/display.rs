//! Display implementation for tali application messages.
//!
//! Converts [`Message`] variants into the human-readable text the terminal
//! shows. Keeping all wording in one match arm per variant makes the
//! catalog easy to audit and leaves room for localization later.
//!
//! One wording rule matters for security: the bad-username and bad-password
//! cases of login share the single `InvalidCredentials` text, so the output
//! never reveals whether a username exists.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === USER & AUTH MESSAGES ===
            Message::UserCreated(username) => format!("User '{}' created successfully", username),
            Message::UserAlreadyExists(username) => format!("User '{}' already exists", username),
            Message::LoginSuccessful(username) => format!("Login successful! Welcome {}", username),
            Message::InvalidCredentials => "Invalid credentials".to_string(),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "Not logged in. Run 'tali login <USERNAME>' first.".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added successfully", title),
            Message::TaskUpdatedWithTitle(title) => format!("Task '{}' updated successfully", title),
            Message::TaskArchived(id) => format!("Task {} archived", id),
            Message::TaskAlreadyArchived(id) => format!("Task {} is already archived", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoArchivedTasksFound => "No archived tasks found".to_string(),
            Message::NoTasksMatchPriority(level) => format!("No tasks with priority {}", level),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::ArchivedTasksHeader => "Archived tasks:".to_string(),
            Message::TasksWithPriorityHeader(level) => format!("Tasks with priority {}:", level),
            Message::CurrentTaskState => "Current task:".to_string(),
            Message::TaskEditPreview => "Task after changes:".to_string(),
            Message::ConfirmTaskUpdate => "Save changes?".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Are you sure you want to delete task {}? This cannot be undone.", id),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed".to_string(),
            Message::ConfigParseFailed => "Configuration file is corrupted. Run 'tali init' to recreate it.".to_string(),
            Message::ConfigModuleAuth => "Auth settings".to_string(),
            Message::ConfigModuleView => "View settings".to_string(),
            Message::HashCostRange => "Cost factor must be between 4 and 31".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordConfirm => "Confirm password".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskTags => "Tags (comma separated)".to_string(),
            Message::PromptFilterPriority => "Priority to filter by".to_string(),
            Message::PromptHashCost => "Bcrypt cost factor".to_string(),
            Message::PromptShowTags => "Show tags column in task tables?".to_string(),
            Message::SelectTaskAction => "What do you want to do?".to_string(),
            Message::SelectTaskToEdit => "Select a task to edit".to_string(),
            Message::SelectTaskToArchive => "Select a task to archive".to_string(),
            Message::SelectTaskToDelete => "Select a task to delete".to_string(),
        };

        write!(f, "{}", text)
    }
}
