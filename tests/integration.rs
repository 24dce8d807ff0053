// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::config::{self, Config, DEFAULT_ENDPOINT};
use iced_vitrine::i18n::fluent::I18n;
use iced_vitrine::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: Some(ThemeMode::System),
        endpoint: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert!(i18n_en.tr("catalog-loading").contains("Loading"));

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: Some(ThemeMode::System),
        endpoint: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert!(i18n_fr.tr("catalog-loading").contains("Chargement"));

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_endpoint_resolution_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let config_with_endpoint = Config {
        language: None,
        theme_mode: Some(ThemeMode::System),
        endpoint: Some("http://localhost:4321/products".to_string()),
    };
    config::save_to_path(&config_with_endpoint, &temp_config_file_path)
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");

    // Config file wins over the built-in default, CLI wins over both.
    assert_eq!(
        config::resolve_endpoint(None, &loaded),
        "http://localhost:4321/products"
    );
    assert_eq!(
        config::resolve_endpoint(Some("http://cli/products".to_string()), &loaded),
        "http://cli/products"
    );
    assert_eq!(
        config::resolve_endpoint(None, &Config::default()),
        DEFAULT_ENDPOINT
    );

    dir.close().expect("Failed to close temporary directory");
}
