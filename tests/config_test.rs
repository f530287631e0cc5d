//! Tests for config module

use std::io::Write;
use std::path::{Path, PathBuf};

use maleda::config::Config;
use serial_test::serial;
use tempfile::NamedTempFile;

const ENV_KEYS: &[&str] = &[
    "MALEDA_BIND_ADDRESS",
    "MALEDA_ENABLE_CORS",
    "MALEDA_REQUEST_LOGGING",
    "MALEDA_DATA_PATH",
    "MALEDA_PAGE_SIZE",
    "MALEDA_TOP_CATEGORIES",
    "MALEDA_TRENDING_LIMIT",
    "MALEDA_SENTINEL_THRESHOLD",
    "MALEDA_LOG_LEVEL",
    "MALEDA_LOG_FORMAT",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_config_file_exists() {
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
    assert!(
        config_path.exists(),
        "config.toml should exist in project root"
    );
}

#[test]
fn test_config_toml_sections() {
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
    let content = std::fs::read_to_string(&config_path).expect("Should be able to read config.toml");

    for section in ["[server]", "[catalog]", "[feed]", "[logging]"] {
        assert!(content.contains(section), "config.toml should have {section} section");
    }

    let config = Config::from_file(&config_path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.feed.page_size, 5);
    assert_eq!(config.catalog.data_path, PathBuf::from("data/articles.json"));
}

#[test]
fn test_invalid_toml_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[feed\npage_size = ").unwrap();
    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_load_rejects_invalid_values() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[feed]\npage_size = 0\n").unwrap();
    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = Config::from_env().unwrap();
    assert_eq!(config.server.bind_address.port(), 3000);
    assert_eq!(config.feed.trending_limit, 3);
    assert_eq!(config.logging.format, "text");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("MALEDA_BIND_ADDRESS", "127.0.0.1:8080");
    std::env::set_var("MALEDA_PAGE_SIZE", "10");
    std::env::set_var("MALEDA_ENABLE_CORS", "false");
    std::env::set_var("MALEDA_DATA_PATH", "/srv/articles.json");
    std::env::set_var("MALEDA_LOG_FORMAT", "json");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.server.bind_address.to_string(), "127.0.0.1:8080");
    assert_eq!(config.feed.page_size, 10);
    assert!(!config.server.enable_cors);
    assert_eq!(config.catalog.data_path, PathBuf::from("/srv/articles.json"));
    assert_eq!(config.logging.format, "json");
}

#[test]
#[serial]
fn test_from_env_ignores_unparsable_values() {
    clear_env();
    std::env::set_var("MALEDA_PAGE_SIZE", "many");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.feed.page_size, 5);
}
