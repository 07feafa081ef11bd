//=========================================================================
// Localizations
//=========================================================================
//
// Per-language string tables loaded from `<code>.json` files.
//
// File layout:
// ```json
// {
//   "title": "UniverseCatch",
//   "menu": { "play": "Play", "settings": "Settings" }
// }
// ```
//
// Lookups never fail: a missing language, section or key resolves to the
// key itself, so a missing translation shows up as a literal key string
// in the UI instead of a blank or crashed screen.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::error::ResourceError;

//=== Catalog Types =======================================================

/// A top-level localization entry: a plain string or a named section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Section(HashMap<String, String>),
}

/// All entries of one language.
pub type Catalog = HashMap<String, Entry>;

//=== Section =============================================================

/// Read view over one section of a language catalog.
///
/// Returned by [`Localizations::section`]; missing sections behave like an
/// empty section.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    name: &'a str,
    entries: Option<&'a HashMap<String, String>>,
}

impl<'a> Section<'a> {
    /// Returns the string for `key`, or `key` itself when missing.
    pub fn get<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        match self.entries.and_then(|entries| entries.get(key)) {
            Some(value) => value.as_str(),
            None => {
                warn!(target: "resources", "Key not found: {}.{}", self.name, key);
                key
            }
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether the section exists in the loaded catalog.
    pub fn exists(&self) -> bool {
        self.entries.is_some()
    }
}

//=== Localizations =======================================================

/// Loaded localization catalogs keyed by language code.
#[derive(Debug, Default)]
pub struct Localizations {
    dir: PathBuf,
    data: HashMap<String, Catalog>,
}

impl Localizations {
    //--- Construction -----------------------------------------------------

    /// Creates a store reading from `dir`.
    ///
    /// Fails if `dir` is not a directory. Nothing is loaded yet; call
    /// [`Localizations::load_all`].
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ResourceError> {
        let dir = dir.into();
        if !dir.is_dir() {
            error!(target: "resources", "Directory '{}' not found.", dir.display());
            return Err(ResourceError::MissingDirectory(dir));
        }

        info!(target: "resources", "Localizations initialized at {}", dir.display());
        Ok(Self {
            dir,
            data: HashMap::new(),
        })
    }

    //--- Loading ----------------------------------------------------------

    /// Loads every `*.json` file in the directory. Returns the number of
    /// languages loaded.
    ///
    /// Files that fail to parse are logged and skipped.
    pub fn load_all(&mut self) -> Result<usize, ResourceError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| ResourceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut codes: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
            .collect();
        codes.sort();

        let mut loaded = 0;
        for code in codes {
            match self.load(&code) {
                Ok(Some(_)) => loaded += 1,
                Ok(None) => {}
                Err(e) => error!(target: "resources", "{}", e),
            }
        }
        Ok(loaded)
    }

    /// Loads one language file.
    ///
    /// A missing file is logged and yields `Ok(None)`; a malformed file is
    /// an error.
    pub fn load(&mut self, language: &str) -> Result<Option<&Catalog>, ResourceError> {
        let path = self.dir.join(format!("{language}.json"));
        if !path.is_file() {
            error!(target: "resources", "Localization file not found: {}", path.display());
            return Ok(None);
        }

        let catalog = read_catalog(&path)?;
        info!(target: "resources", "Loaded successfully: {}", language);
        self.data.insert(language.to_string(), catalog);
        Ok(self.data.get(language))
    }

    /// Inserts a catalog directly, replacing any loaded one.
    pub fn insert(&mut self, language: impl Into<String>, catalog: Catalog) {
        self.data.insert(language.into(), catalog);
    }

    //--- Lookups ----------------------------------------------------------

    /// Returns the top-level string `key` for `language`, or `key` itself
    /// on a miss (including when `key` names a section).
    pub fn get_key<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        match self.data.get(language).and_then(|catalog| catalog.get(key)) {
            Some(Entry::Text(value)) => value.as_str(),
            _ => {
                warn!(target: "resources", "Key not found: {} ({})", key, language);
                key
            }
        }
    }

    /// Returns a view over `section` for `language`.
    pub fn section<'a>(&'a self, section: &'a str, language: &str) -> Section<'a> {
        let entries = match self.data.get(language).and_then(|catalog| catalog.get(section)) {
            Some(Entry::Section(entries)) => Some(entries),
            _ => {
                debug!(target: "resources", "Section not found: {} ({})", section, language);
                None
            }
        };
        Section {
            name: section,
            entries,
        }
    }

    /// Whether `language` has been loaded.
    pub fn has_language(&self, language: &str) -> bool {
        self.data.contains_key(language)
    }

    /// Loaded language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.data.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

//=== Internal Helpers ====================================================

fn read_catalog(path: &Path) -> Result<Catalog, ResourceError> {
    let raw = fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ResourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
