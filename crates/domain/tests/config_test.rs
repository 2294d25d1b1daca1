use arpa_ptr_domain::{CliOverrides, Config, ConfigError, LocalDnsRecord};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"
[dns]
zone = "example.com."

[[dns.hosts]]
hostname = "web"
record_type = "A"
ip = "10.0.0.5"

[[dns.hosts]]
hostname = "web"
record_type = "aaaa"
ip = "fd00::5"

[logging]
level = "debug"
"#;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(config.dns.zone.is_none());
    assert!(config.dns.hosts.is_empty());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.dns.effective_zone().as_str(), "local.");
}

#[test]
fn test_config_from_toml() {
    let config = Config::from_toml(SAMPLE).unwrap();

    assert_eq!(config.dns.zone.as_deref(), Some("example.com."));
    assert_eq!(config.dns.hosts.len(), 2);
    assert_eq!(config.dns.hosts[1].record_type, "aaaa");
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml("[dns]\n").unwrap();
    assert_eq!(config, Config::default());

    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_record_type_defaults_to_a() {
    let config = Config::from_toml(
        r#"
[[dns.hosts]]
hostname = "nas"
ip = "192.168.1.10"
"#,
    )
    .unwrap();

    assert_eq!(config.dns.hosts[0].record_type, "A");
}

#[test]
fn test_config_parse_error() {
    let result = Config::from_toml("[dns\nzone = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_bad_records() {
    let cases = vec![
        LocalDnsRecord::new("", "A", "10.0.0.1"),
        LocalDnsRecord::new("web", "MX", "10.0.0.1"),
        LocalDnsRecord::new("web", "A", "10.0.0.256"),
        LocalDnsRecord::new("web", "A", "fd00::1"),
        LocalDnsRecord::new("web", "AAAA", "10.0.0.1"),
    ];

    for record in cases {
        let mut config = Config::default();
        config.dns.hosts.push(record.clone());
        assert!(
            matches!(config.validate(), Err(ConfigError::Validation(_))),
            "{:?} should be rejected",
            record
        );
    }
}

#[test]
fn test_load_from_file_with_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file.flush().unwrap();

    let overrides = CliOverrides {
        zone: Some("home.lan".to_string()),
        log_level: None,
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.dns.zone.as_deref(), Some("home.lan"));
    assert_eq!(config.dns.effective_zone().as_str(), "home.lan.");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(Some("/nonexistent/arpa-ptr.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_save_and_reload() {
    let config = Config::from_toml(SAMPLE).unwrap();
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    config.save(path).unwrap();
    let reloaded = Config::from_file(path).unwrap();

    assert_eq!(reloaded, config);
}
