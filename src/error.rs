//=========================================================================
// Errors
//=========================================================================
//
// Error taxonomy for the client.
//
// - Precondition errors (unknown scene ids, missing resource directories,
//   empty dropdowns, bad configuration) are wiring bugs: fatal.
// - Per-tick runtime errors (socket failures, an undecodable image) are
//   logged and the loop keeps running.
// - Soft lookup misses (localization keys, music names, dropdown keys)
//   never produce an error at all; they degrade and log.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

//=== SceneError ==========================================================

/// Scene registry and transition errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene `{0}` is not registered")]
    UnknownScene(String),

    #[error("scene `{0}` is already registered")]
    DuplicateScene(String),

    #[error("at least one scene must be registered")]
    NoScenes,

    #[error("scene `{scene}` targets unregistered scene `{target}`")]
    UnknownTarget { scene: String, target: String },
}

//=== ResourceError =======================================================

/// Errors loading resources from disk.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("directory `{0}` not found")]
    MissingDirectory(PathBuf),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode image `{path}`: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

//=== UiError =============================================================

/// Widget construction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("dropdown `{0}` needs at least one option")]
    EmptyOptions(String),
}

//=== NetError ============================================================

/// Network stub errors.
#[derive(Debug, Error)]
pub enum NetError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not resolve `{0}`")]
    Resolve(String),

    #[error("server is already running")]
    AlreadyRunning,

    #[error("connection attempt was abandoned")]
    Abandoned,
}

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

//=== GameError ===========================================================

/// Top-level error for the client runtime.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error(transparent)]
    Net(#[from] NetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("platform error: {0}")]
    Platform(String),
}

impl GameError {
    /// Whether this error must stop the main loop.
    ///
    /// Only wiring and setup failures are fatal; everything that can go
    /// wrong during a single tick is logged and the loop continues.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Net(_) => false,
            Self::Resource(ResourceError::Image { .. } | ResourceError::Io { .. }) => false,
            _ => true,
        }
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, GameError>;

//=========================================================================
// Unit Tests
//=========================================================================
