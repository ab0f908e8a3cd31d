//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use laudo_config::{ConfigError, LaudoConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
url = "https://laudos.example.com/"

[general]
default_limit = 10
"#,
        )?;

        let config: LaudoConfig = Figment::from(Serialized::defaults(LaudoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.url, "https://laudos.example.com/");
        assert_eq!(config.api.base_url(), "https://laudos.example.com");
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn missing_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_limit = 5\n")?;

        let config: LaudoConfig = Figment::from(Serialized::defaults(LaudoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.url, "http://localhost:8000");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".laudosync")?;
        jail.create_file(
            ".laudosync/config.toml",
            "[api]\nurl = \"http://10.0.0.5:8000\"\n",
        )?;

        let config = LaudoConfig::load().expect("config loads");
        assert_eq!(config.api.url, "http://10.0.0.5:8000");
        Ok(())
    });
}

#[test]
fn invalid_url_in_project_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".laudosync")?;
        jail.create_file(".laudosync/config.toml", "[api]\nurl = \"10.0.0.5\"\n")?;

        let err = LaudoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_value_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".laudosync")?;
        jail.create_file(
            ".laudosync/config.toml",
            "[general]\ndefault_limit = \"many\"\n",
        )?;

        let err = LaudoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
