//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wordtree/wordtree.toml`
//! 3. Local config: `<dir>/.wordtree.toml` (usually the working directory)
//! 4. Environment variables: `WORDTREE_*` prefix
//!
//! The `--store` CLI flag is applied on top by the caller.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::util::path::expand_env_vars;

/// Default word store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "words.txt";

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub store_path: Option<PathBuf>,
    pub prompt: Option<String>,
    pub color: Option<bool>,
}

/// Unified configuration for wordtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Comma-delimited word store file (default: ./words.txt)
    pub store_path: PathBuf,
    /// Prompt shown by the interactive shell
    pub prompt: String,
    /// Colored terminal output (NO_COLOR still wins)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            prompt: "> ".into(),
            color: true,
        }
    }
}

/// Get the XDG config directory for wordtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wordtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".wordtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in the store path.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.store_path.to_string_lossy().as_ref());
        self.store_path = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            store_path: overlay
                .store_path
                .clone()
                .unwrap_or_else(|| self.store_path.clone()),
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.wordtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_from(global.as_deref(), local_dir)
    }

    /// Load settings from an explicit global config file and local directory.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global_path {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply WORDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("WORDTREE").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("store_path") {
            settings.store_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("prompt") {
            settings.prompt = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Replace the store path (CLI override), expanding `~` and `$VAR`.
    pub fn with_store_path(mut self, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            self.store_path = path.to_path_buf();
            self.expand_paths();
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# wordtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/wordtree/wordtree.toml
#   Local:  ./.wordtree.toml
#   Env:    WORDTREE_* environment variables
#   CLI:    --store <PATH>

# Comma-delimited word store (~ and $VAR are expanded)
# store_path = "words.txt"

# Prompt of the interactive shell
# prompt = "> "

# Colored output
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert_eq!(settings.store_path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(settings.prompt, "> ");
    }

    #[test]
    fn given_tilde_in_store_path_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            store_path: PathBuf::from("~/words.txt"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let store = settings.store_path.to_string_lossy();
        assert!(store.starts_with(&home), "store_path should start with home: {store}");
        assert!(!store.contains('~'));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_kept() {
        let base = Settings::default();
        let overlay = RawSettings {
            prompt: Some("word? ".into()),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.prompt, "word? ");
        assert_eq!(merged.store_path, base.store_path);
        assert!(merged.color);
    }

    #[test]
    fn given_cli_store_when_applied_then_overrides() {
        let settings = Settings::default().with_store_path(Some(Path::new("/tmp/dict.txt")));
        assert_eq!(settings.store_path, PathBuf::from("/tmp/dict.txt"));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("valid template");
        assert!(raw.store_path.is_none());
    }
}
