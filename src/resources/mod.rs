//=========================================================================
// Shared Resources
//=========================================================================
//
// The stores the controller owns and scenes read through `SceneContext`.
//
// Architecture:
//   Controller
//     └─ Resources
//          ├─ localizations: Localizations (read-only after startup)
//          ├─ music: Music                 (mutated via commands)
//          ├─ images: ResourceLoader       (read-only after startup)
//          └─ language: String             (mutated via commands)
//
// Scenes only ever see `&Resources`. Mutations requested by the UI arrive
// as `Command`s and are applied by the controller through each store's
// own methods.
//
//=========================================================================

//=== Module Declarations =================================================

mod loader;
mod localization;
mod music;

//=== Public API ==========================================================

pub use loader::ResourceLoader;
pub use localization::{Catalog, Entry, Localizations, Section};
pub use music::{Music, Playback, TimedPlayback, Track, MUSIC_MANIFEST, VOLUME_STEP};

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::entities::PLANET_FILES;
use crate::error::ResourceError;

//=== Resources ===========================================================

/// Shared stores owned by the controller.
pub struct Resources {
    pub localizations: Localizations,
    pub music: Music,
    pub images: ResourceLoader,
    language: String,
}

impl Resources {
    //--- Construction -----------------------------------------------------

    pub fn new(
        localizations: Localizations,
        music: Music,
        images: ResourceLoader,
        language: impl Into<String>,
    ) -> Self {
        Self {
            localizations,
            music,
            images,
            language: language.into(),
        }
    }

    /// Loads every store eagerly from the configured directories.
    ///
    /// Missing directories are fatal; individual files that fail to load
    /// are logged and skipped.
    pub fn load(config: &GameConfig) -> Result<Self, ResourceError> {
        let mut localizations = Localizations::new(config.localizations_dir())?;
        let languages = localizations.load_all()?;

        let mut images = ResourceLoader::new(&config.resource_dir)?;
        let planets = images.load_images("planets", PLANET_FILES);

        let mut music = Music::with_timed_playback(config.music_dir()).with_debug(config.debug);
        music.init();

        info!(
            target: "resources",
            "Resources loaded: {} languages, {} planet images, {} tracks",
            languages,
            planets,
            music.playlist().len()
        );

        Ok(Self::new(localizations, music, images, config.language.clone()))
    }

    //--- Language ---------------------------------------------------------

    /// Current UI language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switches the UI language. Unknown languages are ignored with a
    /// warning; returns whether the language changed.
    pub fn set_language(&mut self, language: &str) -> bool {
        if !self.localizations.has_language(language) {
            warn!(target: "resources", "Language {} is not loaded", language);
            return false;
        }
        if self.language == language {
            return false;
        }
        info!(target: "resources", "Language set to {}", language);
        self.language = language.to_string();
        true
    }

    //--- Lookups ----------------------------------------------------------

    /// Section of the current language catalog.
    pub fn section<'a>(&'a self, name: &'a str) -> Section<'a> {
        self.localizations.section(name, &self.language)
    }

    /// Top-level string of the current language catalog.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.localizations.get_key(key, &self.language)
    }
}

//=== Test Support ========================================================


//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::testing::resources;

    #[test]
    fn set_language_requires_loaded_catalog() {
        let mut resources = resources();
        assert!(!resources.set_language("fr"));
        assert_eq!(resources.language(), "en");

        assert!(resources.set_language("es"));
        assert_eq!(resources.section("global").get("back"), "Atrás");
        assert!(!resources.set_language("es"), "Same language is not a change");
    }

    #[test]
    fn text_lookups_use_current_language() {
        let resources = resources();
        assert_eq!(resources.text("title"), "UniverseCatch");
        assert_eq!(resources.text("nonexistent_key"), "nonexistent_key");
    }
}
