#[cfg(test)]
mod tests {
    use catfeed::libs::config::{Config, FeederConfig, ServerConfig, API_URL_ENV, CONFIG_FILE_NAME, DEFAULT_API_URL, DEFAULT_DEVICE_ID};
    use catfeed::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Config tests run against a throwaway data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        api_url: String,
        device_id: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("catfeed"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
                api_url: "https://feeder.example.com/".to_string(),
                device_id: "aa:bb:cc:dd:ee:ff".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.server.is_none());
        assert!(config.feeder.is_none());

        let feeder = config.feeder();
        assert_eq!(feeder.device_id, DEFAULT_DEVICE_ID);
        assert_eq!(feeder.feed_amount, 100);
        assert_eq!(feeder.poll_interval, 30);
        assert_eq!(feeder.capture_countdown, 5);
        assert_eq!(feeder.processing_wait, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
            }),
            feeder: Some(FeederConfig {
                device_id: ctx.device_id.clone(),
                feed_amount: 80,
                ..FeederConfig::default()
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        assert!(ctx.storage.base_path().join(CONFIG_FILE_NAME).is_file());
        let read_config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.feeder().feed_amount, 80);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, r#"{ "server": { "api_url": "http://10.0.0.5:3333" } }"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config.server.unwrap().api_url, "http://10.0.0.5:3333");
        assert!(config.feeder.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }

    // Environment changes stay inside this one test so parallel tests never see them.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_url_resolution(ctx: &mut ConfigTestContext) {
        std::env::remove_var(API_URL_ENV);
        assert_eq!(Config::default().api_url(), DEFAULT_API_URL);

        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
            }),
            feeder: None,
        };
        assert_eq!(config.api_url(), "https://feeder.example.com");

        std::env::set_var(API_URL_ENV, "http://192.168.1.20:3333/");
        assert_eq!(config.api_url(), "http://192.168.1.20:3333");

        std::env::set_var(API_URL_ENV, "  ");
        assert_eq!(config.api_url(), "https://feeder.example.com");

        std::env::remove_var(API_URL_ENV);
    }
}
