//! Configuration management.
//!
//! The browser build always runs with [`Config::default`]. The native build
//! layers config files, environment variables and CLI flags on top.

use crate::themes::ThemePreference;
use mixdeck_types::Catalog;
use serde::{Deserialize, Serialize};

/// Configuration structure that matches the TOML file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Choices offered by the device and application pickers
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemePreference,
    /// Initial window width (native only)
    pub width: f32,
    /// Initial window height (native only)
    pub height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    /// If not set, uses RUST_LOG environment variable or defaults to "info"
    pub log_level: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
mod loader {
    use super::*;
    use anyhow::{bail, Context};
    use figment::{
        providers::{Env, Format, Serialized, Toml},
        Figment,
    };
    use std::path::Path;

    /// Name of the per-directory config file.
    pub const LOCAL_CONFIG_FILE: &str = ".mixdeck.toml";

    impl Config {
        /// Load configuration with full priority chain:
        /// CLI args > env vars > explicit config file > local config > user config > defaults.
        ///
        /// Config files are searched in this order:
        /// 1. `config.toml` in the user config directory (~/.config/mixdeck/ on Linux)
        /// 2. `.mixdeck.toml` in the current directory
        /// 3. the file passed with `--config`, which must exist
        pub fn from_figment(
            config_path: Option<&Path>,
            theme: Option<ThemePreference>,
            log_level: Option<String>,
        ) -> anyhow::Result<Self> {
            let user_config = directories::ProjectDirs::from("", "", "mixdeck")
                .map(|dirs| dirs.config_dir().join("config.toml"));
            let local_config = std::env::current_dir()
                .ok()
                .map(|dir| dir.join(LOCAL_CONFIG_FILE));

            // 1. Start with defaults
            let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

            // 2. Config files, lowest priority first
            for path in [user_config, local_config].into_iter().flatten() {
                if path.exists() {
                    tracing::debug!("Merging config file {}", path.display());
                    figment = figment.merge(Toml::file(path));
                }
            }
            if let Some(path) = config_path {
                if !path.exists() {
                    bail!("config file {} does not exist", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }

            // 3. Environment variables (MIXDECK_UI__THEME, MIXDECK_LOGGING__LOG_LEVEL, ...)
            figment = figment.merge(Env::prefixed("MIXDECK_").split("__"));

            // 4. CLI arguments (highest priority)
            if let Some(theme) = theme {
                figment = figment.merge(Serialized::default("ui.theme", theme));
            }
            if let Some(level) = log_level {
                figment = figment.merge(Serialized::default("logging.log_level", level));
            }

            let config: Config = figment
                .extract()
                .context("failed to read mixdeck configuration")?;

            if let Some(list) = config.catalog.first_empty_list() {
                bail!("catalog.{} must list at least one entry", list);
            }

            Ok(config)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use loader::LOCAL_CONFIG_FILE;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        std::env::remove_var("MIXDECK_UI__THEME");
        std::env::remove_var("MIXDECK_LOGGING__LOG_LEVEL");
    }

    /// Run `f` with the working directory set to `dir`.
    fn in_dir<T>(dir: &TempDir, f: impl FnOnce() -> T) -> T {
        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        let result = f();
        let _ = std::env::set_current_dir(original_dir);
        result
    }

    #[test]
    #[serial]
    fn test_from_figment_defaults() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();

        let config = in_dir(&temp_dir, || Config::from_figment(None, None, None)).unwrap();

        assert_eq!(config.catalog, Catalog::default());
        assert_eq!(config.ui.theme, ThemePreference::Studio);
        assert!(config.logging.log_level.is_none());
    }

    #[test]
    #[serial]
    fn test_local_config_file_overrides_catalog() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(LOCAL_CONFIG_FILE),
            r#"
[catalog]
applications = ["Ardour", "Firefox"]

[ui]
theme = "light"
"#,
        )
        .unwrap();

        let config = in_dir(&temp_dir, || Config::from_figment(None, None, None)).unwrap();

        assert_eq!(config.catalog.applications, vec!["Ardour", "Firefox"]);
        assert_eq!(config.catalog.input_devices, Catalog::default().input_devices);
        assert_eq!(config.ui.theme, ThemePreference::Light);
        assert_eq!(config.ui.width, 1280.0);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_and_cli_overrides_env() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(LOCAL_CONFIG_FILE),
            "[ui]\ntheme = \"light\"\n\n[logging]\nlog_level = \"warn\"\n",
        )
        .unwrap();
        std::env::set_var("MIXDECK_UI__THEME", "dark");
        std::env::set_var("MIXDECK_LOGGING__LOG_LEVEL", "debug");

        let from_env = in_dir(&temp_dir, || Config::from_figment(None, None, None)).unwrap();
        let from_cli = in_dir(&temp_dir, || {
            Config::from_figment(None, Some(ThemePreference::Studio), Some("trace".into()))
        })
        .unwrap();
        clear_env();

        assert_eq!(from_env.ui.theme, ThemePreference::Dark);
        assert_eq!(from_env.logging.log_level.as_deref(), Some("debug"));
        assert_eq!(from_cli.ui.theme, ThemePreference::Studio);
        assert_eq!(from_cli.logging.log_level.as_deref(), Some("trace"));
    }

    #[test]
    #[serial]
    fn test_explicit_config_path() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[catalog]\noutput_devices = [\"Dante Virtual\"]\n").unwrap();

        let config = in_dir(&temp_dir, || Config::from_figment(Some(path.as_path()), None, None)).unwrap();
        assert_eq!(config.catalog.output_devices, vec!["Dante Virtual"]);

        let missing = temp_dir.path().join("missing.toml");
        assert!(in_dir(&temp_dir, || Config::from_figment(Some(missing.as_path()), None, None)).is_err());
    }

    #[test]
    #[serial]
    fn test_empty_catalog_list_is_rejected() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(LOCAL_CONFIG_FILE),
            "[catalog]\ninput_devices = []\n",
        )
        .unwrap();

        let err = in_dir(&temp_dir, || Config::from_figment(None, None, None)).unwrap_err();
        assert!(err.to_string().contains("input_devices"));
    }
}
