//! End-to-end registry initialization from a real configuration file.

use std::path::PathBuf;
use std::sync::Arc;

use log_registry::{ConfigError, Registry, BASELINE_CHANNELS};

/// Write a config to a unique temp path; caller removes it when done.
fn write_config(tag: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "log_registry_{}_{}.toml",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_initialize_creates_baseline_channels() {
    let path = write_config(
        "baseline",
        r#"
        [handlers.out]
        type = "stream"
        target = "stderr"

        [channels.app]
        handlers = ["out"]
        "#,
    );

    let registry = Registry::initialize(&path).unwrap();

    assert!(registry.has_channel("app"));
    for name in BASELINE_CHANNELS {
        let channel = registry.get_channel(name).unwrap();
        assert_eq!(channel.name(), name);
        assert!(!channel.handlers().is_empty());
    }

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_baseline_and_adhoc_inherit_app_handlers() {
    // app is configured with two handlers; cli (baseline) and ldap
    // (created after init) must both carry exactly those two.
    let path = write_config(
        "inherit",
        r#"
        [handlers.h1]
        type = "stream"
        target = "stderr"

        [handlers.h2]
        type = "stream"
        target = "stdout"
        level = "error"

        [channels.app]
        handlers = ["h1", "h2"]
        "#,
    );

    let registry = Registry::initialize(&path).unwrap();
    let app = registry.get_channel("app").unwrap();
    assert_eq!(app.handlers().len(), 2);

    let cli = registry.get_channel("cli").unwrap();
    let ldap = registry.create_channel("ldap", None, None);

    for channel in [&cli, &ldap] {
        assert_eq!(channel.handlers().len(), 2);
        for (a, b) in app.handlers().iter().zip(channel.handlers()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_configured_channel_keeps_own_wiring() {
    let path = write_config(
        "own_wiring",
        r#"
        [handlers.everything]
        type = "stream"

        [handlers.errors_only]
        type = "stream"
        level = "error"

        [processors.pid]
        type = "pid"

        [channels.app]
        handlers = ["everything"]
        processors = ["pid"]

        [channels.db]
        handlers = ["errors_only"]
        "#,
    );

    let registry = Registry::initialize(&path).unwrap();

    // db was configured explicitly and must not inherit from app.
    let db = registry.get_channel("db").unwrap();
    assert_eq!(db.handlers().len(), 1);
    assert!(db.processors().is_empty());

    // auth was not configured and does inherit.
    let auth = registry.get_channel("auth").unwrap();
    assert_eq!(auth.processors().len(), 1);

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_create_channel_returns_same_instance() {
    let path = write_config(
        "idempotent",
        r#"
        [handlers.out]
        type = "stream"

        [channels.app]
        handlers = ["out"]
        "#,
    );

    let registry = Registry::initialize(&path).unwrap();
    let first = registry.create_channel("ldap", None, None);
    let second = registry.create_channel("ldap", None, None);
    assert!(Arc::ptr_eq(&first, &second));

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_missing_config_path_aborts() {
    let err = Registry::initialize(std::path::Path::new("/nonexistent/logger.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_config_aborts() {
    let path = write_config("malformed", "timezone = [not toml");
    let err = Registry::initialize(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_file_handler_writes_through_registry() {
    let log_path = std::env::temp_dir().join(format!(
        "log_registry_output_{}.log",
        std::process::id()
    ));
    let path = write_config(
        "file_sink",
        &format!(
            r#"
            [handlers.file]
            type = "file"
            path = "{}"
            format = "json"

            [channels.app]
            handlers = ["file"]
            "#,
            log_path.display()
        ),
    );

    let registry = Registry::initialize(&path).unwrap();
    registry.get_channel("app").unwrap().error("boom");

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let record: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(record["channel"], "app");
    assert_eq!(record["level"], "error");
    assert_eq!(record["message"], "boom");

    std::fs::remove_file(&path).unwrap_or_default();
    std::fs::remove_file(&log_path).unwrap_or_default();
}
