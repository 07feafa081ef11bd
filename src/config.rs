//=========================================================================
// Configuration
//=========================================================================
//
// Game configuration loaded from `config.json`.
//
// Every field has a default, so a missing file (or a partial one) yields
// a runnable configuration. The `GameBuilder` can override individual
// values after loading.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::ConfigError;

//=== Constants ===========================================================

/// Default configuration file name, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

//=== LanguageOption ======================================================

/// A selectable UI language: code used for lookups, label shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

impl LanguageOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

//=== GameConfig ==========================================================

/// Runtime configuration for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub version: String,
    pub debug: bool,

    //--- Display ----------------------------------------------------------
    pub fps: u32,
    pub width: u32,
    pub height: u32,

    //--- Scenes -----------------------------------------------------------
    pub initial_scene: String,

    //--- Localization -----------------------------------------------------
    pub language: String,
    /// Selectable languages, in display order.
    pub languages: Vec<LanguageOption>,

    //--- Resources --------------------------------------------------------
    pub resource_dir: PathBuf,

    //--- Network ----------------------------------------------------------
    pub host: String,
    pub port: u16,
    pub max_connections: usize,

    //--- Platform ---------------------------------------------------------
    /// Capacity of the platform → core event channel.
    pub channel_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "UniverseCatch".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
            fps: 60,
            width: 800,
            height: 600,
            initial_scene: "intro".to_string(),
            language: "en".to_string(),
            languages: vec![
                LanguageOption::new("en", "English"),
                LanguageOption::new("es", "Español"),
            ],
            resource_dir: PathBuf::from("resources"),
            host: "localhost".to_string(),
            port: 5642,
            max_connections: 4,
            channel_capacity: 128,
        }
    }
}

impl GameConfig {
    //--- Loading ----------------------------------------------------------

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error, as is a configuration that fails
    /// [`GameConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Rejects configurations the client cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "display size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Invalid("at least one language is required".into()));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel capacity must be positive".into()));
        }
        Ok(())
    }

    //--- Derived Paths ----------------------------------------------------

    pub fn localizations_dir(&self) -> PathBuf {
        self.resource_dir.join("localizations")
    }

    pub fn planets_dir(&self) -> PathBuf {
        self.resource_dir.join("planets")
    }

    pub fn music_dir(&self) -> PathBuf {
        self.resource_dir.join("music")
    }

    /// Display size as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fps, 60);
        assert_eq!(config.size(), (800, 600));
        assert_eq!(config.initial_scene, "intro");
    }

    #[test]
    fn derived_paths_live_under_resource_dir() {
        let config = GameConfig::default();
        assert_eq!(config.localizations_dir(), PathBuf::from("resources/localizations"));
        assert_eq!(config.planets_dir(), PathBuf::from("resources/planets"));
        assert_eq!(config.music_dir(), PathBuf::from("resources/music"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load(dir.path().join("config.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "fps": 30, "debug": true }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();

        assert_eq!(config.fps, 30);
        assert!(config.debug);
        assert_eq!(config.width, 800);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Json { .. })));
    }

    #[test]
    fn zero_fps_is_invalid() {
        let config = GameConfig { fps: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_language_list_is_invalid() {
        let config = GameConfig { languages: vec![], ..GameConfig::default() };
        assert!(config.validate().is_err());
    }
}
