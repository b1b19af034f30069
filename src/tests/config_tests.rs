//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{
    CaseNormalization, ConfigLoader, LogConfig, RecommenderConfig, TrieConfig, Validate,
};
use crate::error::{ConfigError, TrieError};

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = RecommenderConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.case_normalization, CaseNormalization::Ascii);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = RecommenderConfig::default();

    config.trie.max_word_length = Some(0);
    assert!(config.validate().is_err());

    config.trie.max_word_length = Some(16);
    config.log.level = "verbose".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [trie]
            case_normalization = "simple"
            max_word_length = 32
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.case_normalization, CaseNormalization::Simple);
    assert_eq!(config.trie.max_word_length, Some(32));

    // Other values should be defaults
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.json",
            r#"{ "log": { "level": "warn", "json": true } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();

    assert_eq!(config.log.level, "warn");
    assert!(config.log.json);
    assert_eq!(config.trie, TrieConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
            [trie]
            max_word_length = 32
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__MAX_WORD_LENGTH", "8");
    fixture.set_env("TEST_ENV__TRIE__CASE_NORMALIZATION", "preserve");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.trie.max_word_length, Some(8));
    assert_eq!(config.trie.case_normalization, CaseNormalization::Preserve);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("missing.toml");

    let err = ConfigLoader::new(Some(&config_path), "TEST_MISSING")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(path) if path == config_path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();

    let config_path = fixture
        .create_file("invalid.toml", "[trie\nmax_word_length = ten\"")
        .unwrap();
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));

    let config_path = fixture.create_file("config.ini", "level=info").unwrap();
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a file with out-of-range values fails validation.
#[test]
fn test_load_config_validates() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("zero.toml", "[trie]\nmax_word_length = 0\n")
        .unwrap();

    let err = ConfigLoader::new(Some(&config_path), "TEST_VALIDATE")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_write_default_config() {
    let fixture = TestFixture::new().unwrap();
    let output = fixture.temp_dir.path().join("nested/dir/default.toml");

    ConfigLoader::write_default(&output).unwrap();
    let rendered = std::fs::read_to_string(&output).unwrap();
    assert!(rendered.contains("[trie]"));
    assert!(rendered.contains("case_normalization = \"ascii\""));

    let config = ConfigLoader::new(Some(&output), "TEST_WRITE_DEFAULT")
        .load()
        .unwrap();
    assert_eq!(config, RecommenderConfig::default());
}

/// Test that `load_trie` applies the loaded trie settings.
#[test]
fn test_load_trie_uses_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "trie.toml",
            "[trie]\ncase_normalization = \"preserve\"\nmax_word_length = 4\n",
        )
        .unwrap();

    let mut trie = crate::load_trie(Some(&config_path)).unwrap();
    assert_eq!(trie.config().case_normalization, CaseNormalization::Preserve);
    assert!(trie.insert("Rust").unwrap());
    assert!(!trie.contains("rust"));
    assert!(matches!(
        trie.insert("Rusty"),
        Err(TrieError::WordTooLong { max_length: 4, .. })
    ));
}
