//=========================================================================
// Resource Loader
//=========================================================================
//
// Eager image loading into a name → bitmap map.
//
// Images are decoded once at startup. A single image that fails to load
// is logged and skipped; only a missing resource directory is fatal.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::error::ResourceError;
use crate::render::Bitmap;

//=== ResourceLoader ======================================================

/// Loaded images keyed by name (the file stem).
#[derive(Debug, Default)]
pub struct ResourceLoader {
    dir: PathBuf,
    images: HashMap<String, Bitmap>,
}

impl ResourceLoader {
    //--- Construction -----------------------------------------------------

    /// Creates a loader rooted at `dir`, which must exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ResourceError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ResourceError::MissingDirectory(dir));
        }
        Ok(Self {
            dir,
            images: HashMap::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    //--- Loading ----------------------------------------------------------

    /// Loads each of `files` from the `subdir` directory.
    ///
    /// Failures are logged and skipped. Returns the number of images loaded.
    pub fn load_images(&mut self, subdir: &str, files: &[&str]) -> usize {
        let base = self.dir.join(subdir);
        let mut loaded = 0;

        for file in files {
            match self.load_image(base.join(file)) {
                Ok(name) => {
                    info!(target: "resources", "Loaded image {}", name);
                    loaded += 1;
                }
                Err(e) => warn!(target: "resources", "Skipping image: {}", e),
            }
        }
        loaded
    }

    /// Decodes one image and stores it under its file stem.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<String, ResourceError> {
        let path = path.as_ref();
        let bitmap = image::open(path)
            .map_err(|source| match source {
                image::ImageError::IoError(source) => ResourceError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                source => ResourceError::Image {
                    path: path.to_path_buf(),
                    source,
                },
            })?
            .to_rgba8();

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.images.insert(name.clone(), bitmap);
        Ok(name)
    }

    /// Stores an already decoded image.
    pub fn insert(&mut self, name: impl Into<String>, bitmap: Bitmap) {
        self.images.insert(name.into(), bitmap);
    }

    //--- Lookups ----------------------------------------------------------

    pub fn image(&self, name: &str) -> Option<&Bitmap> {
        self.images.get(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ResourceLoader::new(dir.path().join("missing")),
            Err(ResourceError::MissingDirectory(_))
        ));
    }

    #[test]
    fn load_images_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let planets = dir.path().join("planets");
        fs::create_dir(&planets).unwrap();

        Bitmap::new(4, 4).save(planets.join("earth.png")).unwrap();
        fs::write(planets.join("mars.png"), b"not a png").unwrap();

        let mut loader = ResourceLoader::new(dir.path()).unwrap();
        let loaded = loader.load_images("planets", &["earth.png", "mars.png", "venus.png"]);

        assert_eq!(loaded, 1);
        assert_eq!(loader.image("earth").map(|b| b.dimensions()), Some((4, 4)));
        assert!(loader.image("mars").is_none());
        assert!(loader.image("venus").is_none());
    }

    #[test]
    fn load_image_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = ResourceLoader::new(dir.path()).unwrap();
        let err = loader.load_image(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }
}
