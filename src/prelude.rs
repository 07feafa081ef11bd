//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use universe_catch::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::config::GameConfig;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder};

// Scenes and commands
pub use crate::core::{Command, CommandQueue, InputEvent, KeyCode, MouseButton};
pub use crate::core::{Scene, SceneContext, SceneId};

// Rendering
pub use crate::render::{Bitmap, Canvas, Color, CursorIcon, Font, Point, Rect};

// Widgets
pub use crate::ui::{Button, Component, ComponentBase, Dropdown, Image, Notification, Text, Widgets};
