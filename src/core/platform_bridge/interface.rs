//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core and core-to-platform message types.
//
// Input flows from the platform thread to the core thread as
// `PlatformEvent`s; rendered `Frame`s flow back the other way.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::event::InputEvent;
use crate::render::CursorIcon;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a frame.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== Frame ===============================================================

/// A rendered frame sent from core to platform.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub width: u32,
    pub height: u32,

    /// Row-major `0x00RRGGBB` pixels.
    pub pixels: Vec<u32>,

    /// Cursor change requested while drawing this frame, if any.
    pub cursor: Option<CursorIcon>,
}
