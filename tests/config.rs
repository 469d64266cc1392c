#[cfg(test)]
mod tests {
    use shiftshift::libs::config::{CloudConfig, Config};
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

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_when_no_config_exists(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config.username, "");
        assert_eq!(config.hourly_wage, 0.0);
        assert!((config.net_wage_factor - 0.69).abs() < 1e-9);
        assert!(config.show_earnings);
        assert!(config.cloud.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            username: "J. Janssen".to_string(),
            hourly_wage: 18.75,
            show_earnings: false,
            cloud: Some(CloudConfig {
                api_url: "https://records.example.com".to_string(),
            }),
            ..Config::default()
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_fields_fall_back_to_defaults(_ctx: &mut ConfigTestContext) {
        let path = Config::file_path().unwrap();
        std::fs::write(&path, r#"{"username": "J. Janssen"}"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.username, "J. Janssen");
        assert!((config.net_wage_factor - 0.69).abs() < 1e-9);
        assert!(config.show_earnings);
    }
}
