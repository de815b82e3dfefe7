#[cfg(test)]
mod tests {
    use tali::db::error::StoreError;
    use tali::db::tasks::Tasks;
    use tali::db::users::Users;
    use tali::libs::task::{filter_by_priority, Task, TaskUpdate, STATUS_PENDING};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const TEST_COST: u32 = 4;

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_and_get_roundtrip(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new(1001, "Water the plants", "Balcony first", "2026-08-30", 2, "home,garden");
        let task_id = tasks.add(&task).unwrap();
        assert!(task_id > 0);

        let stored = tasks.get(task_id).unwrap().unwrap();
        assert_eq!(stored.id, Some(task_id));
        assert_eq!(stored.owner_id, 1001);
        assert_eq!(stored.title, "Water the plants");
        assert_eq!(stored.description, "Balcony first");
        assert_eq!(stored.due_date, "2026-08-30");
        assert_eq!(stored.priority, 2);
        assert_eq!(stored.tags, "home,garden");

        // Storage decides the initial state, not the caller
        assert_eq!(stored.status, STATUS_PENDING);
        assert!(!stored.archived);
        assert!(stored.created_at.is_some());
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_does_not_require_user_row(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // owner_id is a declared relationship only; inserting for an owner
        // with no users row must succeed
        let task_id = tasks.add(&Task::new(999, "Orphan owner", "", "", 1, "")).unwrap();

        let stored = tasks.get(task_id).unwrap().unwrap();
        assert_eq!(stored.owner_id, 999);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_missing_returns_none(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.get(424242).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_partitions_by_archived(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.add(&Task::new(1003, "First", "", "", 1, "")).unwrap();
        let second = tasks.add(&Task::new(1003, "Second", "", "", 1, "")).unwrap();
        let third = tasks.add(&Task::new(1003, "Third", "", "", 1, "")).unwrap();

        tasks.archive(second).unwrap();

        // Active and archived listings split the owner's tasks in id order
        let active = tasks.fetch(1003, false).unwrap();
        let active_ids: Vec<i32> = active.iter().filter_map(|t| t.id).collect();
        assert_eq!(active_ids, vec![first, third]);

        let archived = tasks.fetch(1003, true).unwrap();
        let archived_ids: Vec<i32> = archived.iter().filter_map(|t| t.id).collect();
        assert_eq!(archived_ids, vec![second]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_scoped_to_owner(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mine = tasks.add(&Task::new(1004, "Mine", "", "", 1, "")).unwrap();
        tasks.add(&Task::new(1005, "Someone else's", "", "", 1, "")).unwrap();

        let fetched = tasks.fetch(1004, false).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, Some(mine));
        assert_eq!(fetched[0].owner_id, 1004);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_merges_present_fields(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.add(&Task::new(1006, "Old title", "Keep me", "2026-09-15", 1, "keep")).unwrap();

        let update = TaskUpdate {
            title: Some("New title".to_string()),
            priority: Some(4),
            ..Default::default()
        };
        let updated = tasks.edit(task_id, &update).unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.priority, 4);
        // Absent fields keep their stored values
        assert_eq!(updated.description, "Keep me");
        assert_eq!(updated.due_date, "2026-09-15");
        assert_eq!(updated.tags, "keep");

        // The returned task matches what a fresh read sees
        let stored = tasks.get(task_id).unwrap().unwrap();
        assert_eq!(stored.title, updated.title);
        assert_eq!(stored.priority, updated.priority);
        assert_eq!(stored.updated_at, updated.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_sets_explicit_empty_and_zero(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.add(&Task::new(1007, "Task", "Has text", "2026-10-01", 3, "tagged")).unwrap();

        // An empty string or zero is a real value, not "leave unchanged"
        let update = TaskUpdate {
            description: Some(String::new()),
            due_date: Some(String::new()),
            priority: Some(0),
            tags: Some(String::new()),
            ..Default::default()
        };
        let updated = tasks.edit(task_id, &update).unwrap();

        assert_eq!(updated.description, "");
        assert_eq!(updated.due_date, "");
        assert_eq!(updated.priority, 0);
        assert_eq!(updated.tags, "");
        assert_eq!(updated.title, "Task");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_with_no_fields_refreshes_updated_at(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.add(&Task::new(1008, "Untouched", "same", "2026-11-11", 2, "same")).unwrap();
        let before = tasks.get(task_id).unwrap().unwrap();

        // Timestamps have second precision, so cross a second boundary
        std::thread::sleep(std::time::Duration::from_millis(1100));

        let updated = tasks.edit(task_id, &TaskUpdate::default()).unwrap();

        assert_eq!(updated.title, before.title);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.due_date, before.due_date);
        assert_eq!(updated.priority, before.priority);
        assert_eq!(updated.tags, before.tags);
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at > before.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_missing_task_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.edit(515151, &TaskUpdate::default()).unwrap_err();
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::TaskNotFound(task_id)) => assert_eq!(*task_id, 515151),
            other => panic!("expected TaskNotFound, got {:?}", other),
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_archive_is_permanent_and_idempotent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.add(&Task::new(1009, "Done with this", "", "", 1, "")).unwrap();

        tasks.archive(task_id).unwrap();
        assert!(tasks.fetch(1009, false).unwrap().is_empty());
        assert_eq!(tasks.fetch(1009, true).unwrap().len(), 1);

        // Archiving again succeeds and changes nothing
        tasks.archive(task_id).unwrap();
        assert!(tasks.get(task_id).unwrap().unwrap().archived);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_archive_missing_task_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.archive(616161).unwrap_err();
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::TaskNotFound(task_id)) => assert_eq!(*task_id, 616161),
            other => panic!("expected TaskNotFound, got {:?}", other),
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_reports_affected_rows(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.add(&Task::new(1010, "Short-lived", "", "", 1, "")).unwrap();

        assert_eq!(tasks.delete(task_id).unwrap(), 1);
        assert!(tasks.get(task_id).unwrap().is_none());

        // Deleting a missing id is a no-op, not an error
        assert_eq!(tasks.delete(task_id).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_works_on_archived_tasks(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.add(&Task::new(1011, "Archived then gone", "", "", 1, "")).unwrap();
        tasks.archive(task_id).unwrap();

        assert_eq!(tasks.delete(task_id).unwrap(), 1);
        assert!(tasks.get(task_id).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_full_user_journey(_ctx: &mut TaskTestContext) {
        let mut users = Users::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        let alice_id = users.create("e2e_alice", "alice-pw", TEST_COST).unwrap();
        let bob_id = users.create("e2e_bob", "bob-pw", TEST_COST).unwrap();

        // Alice signs in and plans her day
        assert_eq!(users.authenticate("e2e_alice", "alice-pw").unwrap(), Some(alice_id));

        let groceries = tasks.add(&Task::new(alice_id, "Buy groceries", "milk, bread", "2026-08-30", 2, "errands")).unwrap();
        let report = tasks.add(&Task::new(alice_id, "Write report", "", "2026-09-01", 3, "work")).unwrap();
        let bobs_task = tasks.add(&Task::new(bob_id, "Bob's own task", "", "", 1, "")).unwrap();

        assert_eq!(tasks.fetch(alice_id, false).unwrap().len(), 2);

        // She bumps the report priority
        let update = TaskUpdate {
            priority: Some(5),
            ..Default::default()
        };
        let updated = tasks.edit(report, &update).unwrap();
        assert_eq!(updated.priority, 5);
        assert_eq!(updated.title, "Write report");

        // Filtering her active tasks by the new priority finds exactly it
        let matching = filter_by_priority(tasks.fetch(alice_id, false).unwrap(), 5);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, Some(report));

        // Groceries are done, off to the archive
        tasks.archive(groceries).unwrap();
        let active = tasks.fetch(alice_id, false).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, Some(report));
        let archived = tasks.fetch(alice_id, true).unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].id, Some(groceries));

        // Bob's list never changed
        let bobs_active = tasks.fetch(bob_id, false).unwrap();
        assert_eq!(bobs_active.len(), 1);
        assert_eq!(bobs_active[0].id, Some(bobs_task));

        // Alice clears the archived entry out for good
        assert_eq!(tasks.delete(groceries).unwrap(), 1);
        assert!(tasks.get(groceries).unwrap().is_none());
        assert!(tasks.fetch(alice_id, true).unwrap().is_empty());
    }
}
