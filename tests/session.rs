#[cfg(test)]
mod tests {
    use catfeed::libs::data_storage::DataStorage;
    use catfeed::libs::session::{AppSession, SessionError, SESSION_FILE};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        email: String,
        token: String,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path());
            SessionTestContext {
                _temp_dir: temp_dir,
                storage,
                email: "owner@example.com".to_string(),
                token: "eyJhbGciOiJIUzI1NiJ9.test".to_string(),
            }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_no_session_initially(ctx: &mut SessionTestContext) {
        assert!(AppSession::load(&ctx.storage).unwrap().is_none());

        let err = AppSession::require(&ctx.storage).unwrap_err();
        assert_eq!(err.downcast_ref::<SessionError>(), Some(&SessionError::NotLoggedIn));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_create_and_load(ctx: &mut SessionTestContext) {
        let created = AppSession::create(&ctx.storage, &ctx.email, &ctx.token).unwrap();
        assert!(created.current_cat_id.is_none());

        let loaded = AppSession::require(&ctx.storage).unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.token, ctx.token);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_file_is_encrypted(ctx: &mut SessionTestContext) {
        AppSession::create(&ctx.storage, &ctx.email, &ctx.token).unwrap();

        let raw = fs::read_to_string(ctx.storage.base_path().join(SESSION_FILE)).unwrap();
        assert!(!raw.contains(&ctx.email));
        assert!(!raw.contains(&ctx.token));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_select_cat_persists(ctx: &mut SessionTestContext) {
        let mut session = AppSession::create(&ctx.storage, &ctx.email, &ctx.token).unwrap();
        session.select_cat("12", "Luna");
        session.save(&ctx.storage).unwrap();

        let loaded = AppSession::require(&ctx.storage).unwrap();
        assert_eq!(loaded.current_cat_id.as_deref(), Some("12"));
        assert_eq!(loaded.current_pet.as_deref(), Some("Luna"));

        let mut cleared = loaded;
        cleared.clear_cat();
        assert!(cleared.current_cat_id.is_none());
        assert!(cleared.current_pet.is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_destroy(ctx: &mut SessionTestContext) {
        AppSession::create(&ctx.storage, &ctx.email, &ctx.token).unwrap();

        assert!(AppSession::destroy(&ctx.storage).unwrap());
        assert!(AppSession::load(&ctx.storage).unwrap().is_none());
        // Logging out twice is fine
        assert!(!AppSession::destroy(&ctx.storage).unwrap());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_unreadable_session_counts_as_logged_out(ctx: &mut SessionTestContext) {
        let path = ctx.storage.get_path(SESSION_FILE).unwrap();
        fs::write(&path, "definitely not base64 ciphertext").unwrap();

        assert!(AppSession::load(&ctx.storage).unwrap().is_none());
        assert!(!path.exists());
    }
}
