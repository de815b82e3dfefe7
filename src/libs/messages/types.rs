#[derive(Debug, Clone)]
pub enum Message {
    // === USER & AUTH MESSAGES ===
    UserCreated(String),
    UserAlreadyExists(String),
    LoginSuccessful(String),
    InvalidCredentials,
    LoggedOut,
    NotLoggedIn,
    PasswordMismatch,

    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskUpdatedWithTitle(String),
    TaskArchived(i32),
    TaskAlreadyArchived(i32),
    TaskDeleted(i32),
    TaskNotFoundWithId(i32),
    NoTasksFound,
    NoArchivedTasksFound,
    NoTasksMatchPriority(i32),
    TasksHeader,
    ArchivedTasksHeader,
    TasksWithPriorityHeader(i32),
    CurrentTaskState,
    TaskEditPreview,
    ConfirmTaskUpdate,
    ConfirmDeleteTask(i32),
    NoChangesDetected,
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigRemoved,
    ConfigParseFailed,
    ConfigModuleAuth,
    ConfigModuleView,
    HashCostRange,

    // === PROMPT MESSAGES ===
    PromptSelectModules,
    PromptPassword,
    PromptPasswordConfirm,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskPriority,
    PromptTaskTags,
    PromptFilterPriority,
    PromptHashCost,
    PromptShowTags,
    SelectTaskAction,
    SelectTaskToEdit,
    SelectTaskToArchive,
    SelectTaskToDelete,
}
