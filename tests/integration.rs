// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config, DEFAULT_RADAR_DURATION_SECS};
use iced_folio::i18n::fluent::I18n;
use iced_folio::theme::{SceneColors, ThemeStore, ThemeVariant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to Indonesian
    let mut indonesian_config = Config::default();
    indonesian_config.general.language = Some("id".to_string());
    config::save_to_path(&indonesian_config, &temp_config_file_path)
        .expect("Failed to write indonesian config file");

    let loaded_indonesian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load indonesian config from path");
    let i18n_id = I18n::new(None, &loaded_indonesian_config);
    assert_eq!(i18n_id.current_locale().to_string(), "id");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_translations_differ_between_locales() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    let i18n_en = I18n::new(None, &config);

    let i18n_id = I18n::new(Some("id".to_string()), &config);

    assert_ne!(i18n_en.tr("nav-about"), i18n_id.tr("nav-about"));
}

#[test]
fn test_theme_selection_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = dir.path().to_path_buf();

    let mut store = ThemeStore::with_config_dir(ThemeVariant::Light, config_dir.clone());
    let mut surface = SceneColors::new(store.variant());
    store.cycle(&mut surface);
    store.cycle(&mut surface);
    assert_eq!(store.variant(), ThemeVariant::Gradient);

    // A fresh store (a new process, effectively) sees the persisted choice.
    let reloaded = ThemeStore::load(Some(config_dir));
    assert_eq!(reloaded.variant(), ThemeVariant::Gradient);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_radar_duration_round_trips_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = Some(dir.path().to_path_buf());

    let (mut config, warning) = config::load_with_override(config_dir.clone());
    assert!(warning.is_none());
    assert_eq!(
        config.animation.radar_duration_secs,
        Some(DEFAULT_RADAR_DURATION_SECS)
    );

    config.animation.radar_duration_secs = Some(4.5);
    config::save_with_override(&config, config_dir.clone()).expect("Failed to save config");

    let (reloaded, warning) = config::load_with_override(config_dir);
    assert!(warning.is_none());
    assert_eq!(reloaded.animation.radar_duration_secs, Some(4.5));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_corrupt_config_surfaces_a_warning_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "this is { not toml")
        .expect("Failed to write corrupt config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(
        warning.as_deref(),
        Some("notification-config-load-error")
    );

    dir.close().expect("Failed to close temporary directory");
}
