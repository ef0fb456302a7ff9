//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use tk_config::TkConfig;
use tk_core::enums::Priority;

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/tasker/tasks.db"

[general]
page_size = 10
default_priority = "high"
"#,
        )?;

        let config: TkConfig = Figment::from(Serialized::defaults(TkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/tasker/tasks.db");
        assert_eq!(config.general.page_size, 10);
        assert_eq!(config.general.default_priority, Priority::High);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
page_size = 3
"#,
        )?;

        let config: TkConfig = Figment::from(Serialized::defaults(TkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.page_size, 3);
        assert_eq!(config.general.default_priority, Priority::Low);
        assert_eq!(config.database.path, ".tasker/tasker.db");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("TK_DATABASE__PATH", "from-env.db");

        let config: TkConfig = Figment::from(Serialized::defaults(TkConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TK_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn project_local_config_is_discovered() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".tasker")).expect("create .tasker");
        jail.create_file(
            ".tasker/config.toml",
            r#"
[general]
page_size = 7
"#,
        )?;

        let config = TkConfig::load().expect("config loads");
        assert_eq!(config.general.page_size, 7);
        Ok(())
    });
}

#[test]
fn zero_page_size_from_toml_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
page_size = 0
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(TkConfig::default()))
            .merge(Toml::file("config.toml"));
        assert!(TkConfig::from_figment(&figment).is_err());
        Ok(())
    });
}

#[test]
fn invalid_priority_is_an_extraction_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_priority = "urgent"
"#,
        )?;

        let result: Result<TkConfig, _> = Figment::from(Serialized::defaults(TkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract();
        assert!(result.is_err());
        Ok(())
    });
}
