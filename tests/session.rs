#[cfg(test)]
mod tests {
    use tali::libs::session::Session;
    use tali::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_owns_checks_owner_id() {
        let session = Session::new(7, "alice");

        assert!(session.owns(&Task::new(7, "Mine", "", "", 1, "")));
        assert!(!session.owns(&Task::new(8, "Not mine", "", "", 1, "")));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_lifecycle(_ctx: &mut SessionTestContext) {
        // Fresh environment has no session
        assert!(Session::load().unwrap().is_none());
        assert!(Session::require().is_err());

        Session::new(42, "alice").save().unwrap();

        let loaded = Session::load().unwrap().unwrap();
        assert_eq!(loaded.user_id, 42);
        assert_eq!(loaded.username, "alice");

        let required = Session::require().unwrap();
        assert_eq!(required.user_id, 42);

        // Logging in again replaces the stored session
        Session::new(43, "bob").save().unwrap();
        assert_eq!(Session::load().unwrap().unwrap().username, "bob");

        Session::clear().unwrap();
        assert!(Session::load().unwrap().is_none());

        let err = Session::require().unwrap_err();
        assert!(err.to_string().contains("Not logged in"));

        // Clearing twice is fine
        Session::clear().unwrap();
    }
}
