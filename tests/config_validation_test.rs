use std::io::Write;

use item_api::config::{AppConfig, CatalogSection, LogFormat, ServerConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_are_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.bind_address(), "0.0.0.0:8000");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.catalog.max_page_size, 100);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn file_values_override_defaults() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9090

[logging]
level = "debug"
format = "json"

[catalog]
max_page_size = 2
"#,
    );

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:9090");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.catalog.max_page_size, 2);
}

#[test]
fn zero_port_is_rejected() {
    let config = AppConfig {
        server: ServerConfig {
            port: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn zero_page_size_is_rejected() {
    let file = write_config("[catalog]\nmax_page_size = 0\n");
    assert!(AppConfig::load_from(file.path()).is_err());

    let config = AppConfig {
        catalog: CatalogSection { max_page_size: 0 },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
