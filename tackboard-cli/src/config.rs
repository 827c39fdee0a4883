//! Layered configuration for the `tackboard` binary
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. `~/.config/tackboard/config.toml`
//! 3. `tackboard.toml` / `tackboard.yaml` / `tackboard.json` in the working
//!    directory, or the file passed with `--config`
//! 4. `TACKBOARD_*` environment variables
//! 5. Command-line flags

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tackboard::{TackboardContext, TackboardOperationProcessor, WeekStart, DEFAULT_ACTIVITY_LIMIT};
use tracing::{debug, trace};

use crate::output::OutputFormat;

/// Project-local config file names, merged in this order
const LOCAL_FILES: &[&str] = &[
    "tackboard.toml",
    "tackboard.yaml",
    "tackboard.yml",
    "tackboard.json",
];

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    pub week_start: WeekStart,
    pub activity_limit: usize,
    pub output: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            week_start: WeekStart::Monday,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            output: OutputFormat::Json,
            actor: None,
        }
    }
}

impl Settings {
    /// A fresh, empty context configured from these settings
    pub fn context(&self) -> TackboardContext {
        TackboardContext::new()
            .with_week_start(self.week_start)
            .with_activity_limit(self.activity_limit)
    }

    pub fn processor(&self) -> TackboardOperationProcessor {
        match &self.actor {
            Some(actor) => TackboardOperationProcessor::with_actor(actor.clone()),
            None => TackboardOperationProcessor::new(),
        }
    }
}

/// Values from command-line flags; unset flags leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

/// Builds [`Settings`] from every configuration source
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    working_dir: Option<PathBuf>,
    home_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_file: None,
            working_dir: std::env::current_dir().ok(),
            home_file: dirs::home_dir()
                .map(|home| home.join(".config").join("tackboard").join("config.toml")),
        }
    }

    /// Use `path` instead of the working-directory files
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_home_file(mut self, path: Option<PathBuf>) -> Self {
        self.home_file = path;
        self
    }

    /// Assemble the figment in precedence order
    pub fn figment(&self, overrides: &Overrides) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(home_file) = self.home_file.as_deref().filter(|p| p.is_file()) {
            trace!(path = %home_file.display(), "loading user config");
            figment = figment.merge(Toml::file(home_file));
        }

        match &self.config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                figment = figment.merge(file_provider(path)?);
            }
            None => {
                if let Some(dir) = &self.working_dir {
                    for name in LOCAL_FILES {
                        let path = dir.join(name);
                        if path.is_file() {
                            trace!(path = %path.display(), "loading project config");
                            figment = figment.merge(file_provider(&path)?);
                        }
                    }
                }
            }
        }

        Ok(figment
            .merge(Env::prefixed("TACKBOARD_").map(|key| key.as_str().to_lowercase().into()))
            .merge(Serialized::defaults(overrides)))
    }

    pub fn load(&self, overrides: &Overrides) -> Result<Settings> {
        let settings: Settings = self
            .figment(overrides)?
            .extract()
            .context("invalid configuration")?;
        debug!(?settings, "loaded configuration");
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a provider from the file extension
fn file_provider(path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(Figment::from(Yaml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        _ => bail!("unsupported config format: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn loader(dir: &TempDir) -> ConfigLoader {
        ConfigLoader::new()
            .with_working_dir(dir.path())
            .with_home_file(None)
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = loader(&dir).load(&Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_project_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("tackboard.toml"),
            "week_start = \"sunday\"\nactivity_limit = 5\n",
        )
        .unwrap();

        let settings = loader(&dir).load(&Overrides::default()).unwrap();
        assert_eq!(settings.week_start, WeekStart::Sunday);
        assert_eq!(settings.activity_limit, 5);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_yaml_overrides_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tackboard.toml"), "actor = \"toml\"\n").unwrap();
        fs::write(dir.path().join("tackboard.yaml"), "actor: yaml\n").unwrap();

        let settings = loader(&dir).load(&Overrides::default()).unwrap();
        assert_eq!(settings.actor.as_deref(), Some("yaml"));
    }

    #[test]
    #[serial]
    fn test_home_file_is_lowest() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home.toml");
        fs::write(&home, "actor = \"home\"\nlog_level = \"info\"\n").unwrap();
        fs::write(dir.path().join("tackboard.json"), r#"{"actor": "project"}"#).unwrap();

        let settings = loader(&dir)
            .with_home_file(Some(home))
            .load(&Overrides::default())
            .unwrap();
        assert_eq!(settings.actor.as_deref(), Some("project"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_explicit_file_replaces_project_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tackboard.toml"), "actor = \"project\"\n").unwrap();
        let explicit = dir.path().join("other.yml");
        fs::write(&explicit, "output: yaml\n").unwrap();

        let settings = loader(&dir)
            .with_config_file(Some(explicit))
            .load(&Overrides::default())
            .unwrap();
        assert_eq!(settings.actor, None);
        assert_eq!(settings.output, OutputFormat::Yaml);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = loader(&dir)
            .with_config_file(Some(dir.path().join("nope.toml")))
            .load(&Overrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    #[serial]
    fn test_env_and_flags() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tackboard.toml"), "week_start = \"monday\"\n").unwrap();
        std::env::set_var("TACKBOARD_WEEK_START", "sunday");
        std::env::set_var("TACKBOARD_ACTOR", "env");

        let overrides = Overrides {
            actor: Some("flag".into()),
            output: None,
        };
        let settings = loader(&dir).load(&overrides);

        std::env::remove_var("TACKBOARD_WEEK_START");
        std::env::remove_var("TACKBOARD_ACTOR");

        let settings = settings.unwrap();
        assert_eq!(settings.week_start, WeekStart::Sunday);
        assert_eq!(settings.actor.as_deref(), Some("flag"));
    }

    #[test]
    #[serial]
    fn test_invalid_value() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tackboard.toml"), "week_start = \"friday\"\n").unwrap();
        assert!(loader(&dir).load(&Overrides::default()).is_err());
    }

    #[test]
    fn test_settings_build_context() {
        let settings = Settings {
            activity_limit: 7,
            actor: Some("ci".into()),
            ..Settings::default()
        };
        assert_eq!(settings.context().activity_limit(), 7);
        assert_eq!(settings.processor().actor(), Some("ci"));
    }
}
