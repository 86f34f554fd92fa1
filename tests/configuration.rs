//! Tests for the configuration system

use northlight::Config;
use northlight::config::ContentMode;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.email.is_none());
    assert_eq!(config.content.mode, ContentMode::Static);
    assert!(!config.maintenance.enabled);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_default_config_passes_validation() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_loads_from_explicit_path() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.path().join("production.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[email]
api_key = "re_live_key"

[content]
mode = "remote"

[content.remote]
base_url = "https://content.example.com/v1"
token = "sk_read_only"

[maintenance]
enabled = true
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config from path");

    assert_eq!(config.server.port, 8080);

    let email = config.email.as_ref().expect("email section should load");
    assert_eq!(email.api_key, "re_live_key");
    // Defaults fill the fields the file leaves out
    assert_eq!(email.api_base, "https://api.resend.com");
    assert!(email.from_address.contains("noreply@northlight.ai"));

    assert_eq!(config.content.mode, ContentMode::Remote);
    let remote = config.content.remote.as_ref().unwrap();
    assert_eq!(remote.base_url, "https://content.example.com/v1");
    assert_eq!(remote.dataset, "production");

    assert!(config.maintenance.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_incomplete_remote_config_fails_validation() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[content]
mode = "remote"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Load should succeed; validation catches the gap");

    assert!(config.validate().is_err());
}
