#[cfg(test)]
mod tests {
    use tali::libs::config::{AuthConfig, Config, ViewConfig, CONFIG_FILE_NAME};
    use tali::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.auth.is_none());
        assert!(config.view.is_none());

        // Unconfigured modules fall back to usable values
        assert_eq!(config.hash_cost(), bcrypt::DEFAULT_COST);
        assert!(!config.show_tags());
    }

    #[test]
    fn test_auth_config_default_cost() {
        assert_eq!(AuthConfig::default().hash_cost, bcrypt::DEFAULT_COST);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        // No file yet: read() falls back to defaults
        let config = Config::read().unwrap();
        assert!(config.auth.is_none());
        assert!(config.view.is_none());

        let config = Config {
            auth: Some(AuthConfig { hash_cost: 10 }),
            view: Some(ViewConfig { show_tags: true }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.auth, Some(AuthConfig { hash_cost: 10 }));
        assert_eq!(read_config.view, Some(ViewConfig { show_tags: true }));
        assert_eq!(read_config.hash_cost(), 10);
        assert!(read_config.show_tags());

        // A file that exists but does not parse is an error, not a default
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&config_path, "{ not json").unwrap();
        let err = Config::read().unwrap_err();
        assert!(err.to_string().contains("corrupted"));
    }
}
