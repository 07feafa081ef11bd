//=========================================================================
// Core
//=========================================================================
//
// Everything that runs on the core thread.
//
// Architecture:
//   Controller
//     ├─ SceneManager → Scene (trait) → Widgets
//     ├─ Resources
//     └─ CommandQueue
//
// The core never touches the window. Input arrives from the platform as
// `PlatformEvent`s through the platform bridge and rendered frames go back
// the same way, so the core can be driven entirely from tests.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod command;
pub mod controller;
pub mod event;
pub(crate) mod platform_bridge;
pub mod scene;

//=== Public API ==========================================================

pub use command::{Command, CommandQueue};
pub use controller::Controller;
pub use event::{InputEvent, KeyCode, MouseButton};
pub use platform_bridge::TickControl;
pub use scene::{Scene, SceneContext, SceneId, SceneManager};
