//=========================================================================
// Game
//
// Main entry point: wires configuration, resources and scenes into a
// controller, then runs it next to the platform loop.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Runtime]
//         │                       │
//         ├─ with_fps()           ├─ spawns the core thread (Controller)
//         ├─ with_size()          ├─ runs the platform on this thread
//         └─ with_scene()         └─ joins the core thread on exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::platform_bridge::EventCollector;
use crate::core::{Controller, Scene};
use crate::error::GameError;
use crate::platform::Platform;
use crate::resources::Resources;
use crate::scenes::default_scenes;

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// Starts from a [`GameConfig`] (usually loaded from `config.json`) and
/// applies fluent overrides on top.
///
/// # Examples
///
/// ```no_run
/// use universe_catch::{GameBuilder, GameConfig};
///
/// # fn main() -> Result<(), universe_catch::GameError> {
/// GameBuilder::new(GameConfig::default())
///     .with_fps(30)
///     .with_debug(true)
///     .with_default_scenes()
///     .build()?
///     .run()
/// # }
/// ```
pub struct GameBuilder {
    config: GameConfig,
    scenes: Vec<Box<dyn Scene>>,
    default_scenes: bool,
}

impl GameBuilder {
    /// Creates a builder with no scenes registered.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            scenes: Vec::new(),
            default_scenes: false,
        }
    }

    /// Sets the target frames per second of the core loop.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive, got {}", fps);
        self.config.fps = fps;
        self
    }

    /// Sets the window and framebuffer size in physical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Sets the scene activated when the game starts.
    pub fn with_initial_scene(mut self, id: impl Into<String>) -> Self {
        self.config.initial_scene = id.into();
        self
    }

    /// Enables debug logging for widgets, music and scenes.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Registers an extra scene.
    pub fn with_scene(mut self, scene: Box<dyn Scene>) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Registers the client's full scene set at build time.
    pub fn with_default_scenes(mut self) -> Self {
        self.default_scenes = true;
        self
    }

    /// Loads resources, registers scenes and validates the wiring.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, a missing resource directory,
    /// duplicate scene ids, or a scene targeting an unregistered id.
    pub fn build(self) -> Result<Game, GameError> {
        self.config.validate()?;
        info!(
            "Building game (FPS: {}, size: {}x{}, channel: {})",
            self.config.fps, self.config.width, self.config.height, self.config.channel_capacity
        );

        let resources = Resources::load(&self.config)?;

        let mut scenes = if self.default_scenes {
            default_scenes(&self.config)
        } else {
            Vec::new()
        };
        scenes.extend(self.scenes);

        let mut controller = Controller::new(self.config, resources);
        controller.populate(scenes)?;
        controller.validate()?;

        Ok(Game { controller })
    }
}

//=== Game ================================================================

/// A fully wired client, ready to run.
pub struct Game {
    controller: Controller,
}

impl Game {
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Runs the game and blocks until it exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event channel (platform → core) and frame channel
    ///    (core → platform)
    /// 2. Spawns the core thread running the controller loop
    /// 3. Runs the platform event loop on this thread
    /// 4. Joins the core thread once the window closes or the core quits
    ///
    /// # Errors
    ///
    /// Returns the platform error, otherwise the fatal error the core
    /// thread stopped with.
    pub fn run(self) -> Result<(), GameError> {
        let config = self.controller.config().clone();
        info!("Starting {} {} ({} FPS)", config.title, config.version, config.fps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx) = bounded(config.channel_capacity);
        let (frame_tx, frame_rx) = bounded(1);

        //--- 2. Spawn the core thread ------------------------------------
        let controller = self.controller;
        let core_handle = thread::Builder::new()
            .name("core".to_string())
            .spawn(move || controller.run(EventCollector::new(event_rx), frame_tx))
            .map_err(|e| GameError::Platform(format!("failed to spawn core thread: {e}")))?;
        info!("Core thread spawned");

        //--- 3. Launch the platform ----------------------------------------
        let platform = Platform::new(config.title.clone(), config.size(), event_tx, frame_rx);
        let platform_result = platform.run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Wait for the core thread ---------------------------------
        let core_result = match core_handle.join() {
            Ok(result) => result,
            Err(_) => Err(GameError::Platform("core thread panicked".to_string())),
        };
        match &core_result {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread stopped: {}", e),
        }

        info!("Shutdown complete");
        platform_result.and(core_result)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
