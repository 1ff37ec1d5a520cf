/*!
 * Tests for application configuration functionality
 */

use epistula::app_config::{Config, LogLevel, API_KEY_ENV, ENDPOINT_ENV};
use epistula::errors::ConfigError;
use epistula::translation::HistoryPolicy;
use epistula::PromptSet;
use log::LevelFilter;

use crate::common::{create_temp_dir, create_test_file};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.model.name, "gpt-4o");
    assert_eq!(config.model.temperature, 0.7);
    assert_eq!(config.model.max_context, 2);
    assert!(config.model.api_key.is_empty());
    assert_eq!(config.history_policy, HistoryPolicy::PerParagraph);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default file round-trips through JSON
#[test]
fn test_config_serialization_shouldUseDocumentedKeys() {
    let json = serde_json::to_value(Config::default()).unwrap();

    assert_eq!(json["model"]["name"], "gpt-4o");
    assert_eq!(json["model"]["endpoint"], "https://api.openai.com/v1");
    assert_eq!(json["model"]["timeout_secs"], 120);
    assert!(json["prompts"]["directory"].is_null());
    assert_eq!(json["history_policy"], "per_paragraph");
    assert_eq!(json["log_level"], "info");
}

#[test]
fn test_loadOrCreate_existingFile_shouldReadIt() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        dir.path(),
        "conf.json",
        r#"{
            "model": { "name": "gpt-4o-mini", "temperature": 0.2, "max_context": 3 },
            "history_policy": "per_letter",
            "log_level": "debug"
        }"#,
    )
    .unwrap();

    let config = Config::load_or_create(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4o-mini");
    assert_eq!(config.model.temperature, 0.2);
    assert_eq!(config.model.max_context, 3);
    assert_eq!(config.model.timeout_secs, 120);
    assert_eq!(config.history_policy, HistoryPolicy::PerLetter);
    assert_eq!(config.log_level.to_level_filter(), LevelFilter::Debug);
}

#[test]
fn test_loadOrCreate_invalidJson_shouldFailWithPath() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(dir.path(), "conf.json", "{ not json").unwrap();

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("conf.json"));
}

#[test]
fn test_promptsFromConfig_directory_shouldLoadFiles() {
    let dir = create_temp_dir().unwrap();
    create_test_file(dir.path(), "direct.v1.txt", "Literal.").unwrap();
    create_test_file(dir.path(), "rhetorical.v1.txt", "Idiomatic.").unwrap();

    let mut config = Config::default();
    config.prompts.directory = Some(dir.path().to_path_buf());

    let prompts = PromptSet::from_config(&config.prompts).unwrap();
    assert_eq!(prompts, PromptSet::new("Literal.", "Idiomatic."));
}

#[test]
fn test_promptsFromConfig_missingDirectory_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let mut config = Config::default();
    config.prompts.directory = Some(dir.path().join("absent"));

    assert!(matches!(
        PromptSet::from_config(&config.prompts),
        Err(ConfigError::PromptFile { .. })
    ));
}

#[test]
fn test_resolve_withLookup_shouldReadNamedVariables() {
    let config = Config::default();
    let lookup = |name: &str| match name {
        n if n == API_KEY_ENV => Some("sk-test".to_string()),
        n if n == ENDPOINT_ENV => Some("http://127.0.0.1:8080/v1".to_string()),
        _ => None,
    };

    assert_eq!(config.resolve_api_key_with(lookup).unwrap(), "sk-test");
    assert_eq!(config.resolve_endpoint_with(lookup).unwrap(), "http://127.0.0.1:8080/v1");
}

#[test]
fn test_resolveEndpoint_invalidOverride_shouldFail() {
    let config = Config::default();
    let result = config.resolve_endpoint_with(|_| Some("localhost without scheme".to_string()));
    assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
}
