#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timebank::libs::config::{Config, LedgerConfig, MonitorConfig, ServerConfig};

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
    fn test_missing_file_falls_back_to_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert!(config.ledger.is_none());
        assert!(config.monitor.is_none());
        assert!(config.server.is_none());
    }

    #[test]
    fn test_module_defaults() {
        let ledger = LedgerConfig::default();
        assert_eq!(ledger.baseline, 120);
        assert_eq!(ledger.reward_rate, 15);

        let monitor = MonitorConfig::default();
        assert_eq!(monitor.inactivity_threshold, 3600);
        assert_eq!(monitor.poll_interval, 60_000);
        assert_eq!(monitor.activity_threshold, 30);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            ledger: Some(LedgerConfig {
                baseline: 90,
                reward_rate: 10,
            }),
            monitor: Some(MonitorConfig {
                inactivity_threshold: 1800,
                poll_interval: 30_000,
                activity_threshold: 15,
            }),
            server: Some(ServerConfig {
                api_url: "https://family.example.com/api".to_string(),
                auth_token: "secret".to_string(),
            }),
        };

        config.save().unwrap();
        let loaded = Config::read().unwrap();

        assert_eq!(loaded.ledger, config.ledger);
        assert_eq!(loaded.monitor, config.monitor);
        assert_eq!(loaded.server, config.server);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_are_omitted_from_the_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            ledger: Some(LedgerConfig::default()),
            monitor: None,
            server: None,
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert!(loaded.ledger.is_some());
        assert!(loaded.monitor.is_none());
        assert!(loaded.server.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_removes_the_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            ledger: Some(LedgerConfig::default()),
            monitor: None,
            server: None,
        };
        config.save().unwrap();

        Config::delete().unwrap();
        let loaded = Config::read().unwrap();
        assert!(loaded.ledger.is_none());

        // Deleting again is fine.
        Config::delete().unwrap();
    }
}
