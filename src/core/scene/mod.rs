//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and single-active-scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<SceneId, Box<dyn Scene>>
//     └─ active: Option<SceneId>
//
// Flow:
//   change_scene(id) → old.on_exit() → active = id → new.on_enter()
//
// Scene ids are the only contract between scenes. A scene asks for a
// transition by queueing `Command::ChangeScene(id)`; it never touches
// another scene or the controller directly.
//
//=========================================================================

//=== Module Declarations =================================================

mod manager;

//=== Public API ==========================================================

pub use manager::SceneManager;

#[cfg(test)]
pub(crate) use manager::tests as manager_tests;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::{CommandQueue, InputEvent};
use crate::error::GameError;
use crate::render::Canvas;
use crate::resources::Resources;

//=== Scene Id ============================================================

/// Stable scene identifier, unique among registered scenes.
pub type SceneId = &'static str;

//=== Scene Context =======================================================

/// Read-only view of shared state handed to scenes on every call.
///
/// Scenes request changes to these stores through commands; the
/// controller applies them through each store's own methods.
#[derive(Clone, Copy)]
pub struct SceneContext<'a> {
    pub resources: &'a Resources,
    pub config: &'a GameConfig,
}

impl<'a> SceneContext<'a> {
    pub fn new(resources: &'a Resources, config: &'a GameConfig) -> Self {
        Self { resources, config }
    }

    /// Localized string `key` from `section` in the current language.
    ///
    /// Missing sections or keys return `key` itself.
    pub fn text(&self, section: &'a str, key: &'a str) -> &'a str {
        self.resources.section(section).get(key)
    }

    pub fn language(&self) -> &'a str {
        self.resources.language()
    }

    pub fn screen_width(&self) -> u32 {
        self.config.width
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }
}

//=== Scene Trait =========================================================

/// One screen of the application.
///
/// Scenes are constructed once at startup and live for the whole run.
/// Their widgets do not: `on_enter` rebuilds them from scratch, reading
/// whatever live state it needs from the context, and `on_exit` drops them.
///
/// # Minimal Implementation
///
/// ```rust
/// # use universe_catch::prelude::*;
/// struct Blank;
///
/// impl Scene for Blank {
///     fn id(&self) -> SceneId {
///         "blank"
///     }
///
///     fn on_enter(&mut self, _ctx: &SceneContext<'_>) -> Result<(), GameError> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, _event: &InputEvent, _commands: &mut CommandQueue) {}
///
///     fn update(
///         &mut self,
///         _ctx: &SceneContext<'_>,
///         canvas: &mut dyn Canvas,
///         _dt: f32,
///         _commands: &mut CommandQueue,
///     ) {
///         canvas.fill(Color::BLACK);
///     }
/// }
/// ```
pub trait Scene: Send {
    /// Registry key of this scene.
    fn id(&self) -> SceneId;

    /// Called each time the scene becomes active.
    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError>;

    /// Called when the scene stops being active.
    ///
    /// Default implementation does nothing.
    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {}

    /// Called for every input event while active.
    fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue);

    /// Advances the scene by `dt` seconds and draws it.
    fn update(
        &mut self,
        ctx: &SceneContext<'_>,
        canvas: &mut dyn Canvas,
        dt: f32,
        commands: &mut CommandQueue,
    );

    /// Scene ids this scene can transition to.
    ///
    /// Checked against the registry once before the main loop starts.
    fn targets(&self) -> Vec<SceneId> {
        Vec::new()
    }

    /// Whether the scene considers itself finished.
    fn is_done(&self) -> bool {
        false
    }
}
