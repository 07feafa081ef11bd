//=========================================================================
// Input Events
//=========================================================================
//
// Platform-independent input events dispatched to scenes and widgets.
//
// The platform layer translates Winit events into these types; the core
// never sees Winit directly. Pointer events carry the cursor position at
// the time of the event so hit-testing never relies on stale state.
//
// Event Flow:
// ```text
// Platform (Winit) → InputEvent → Controller
//                                   ├─► Music (TrackEnded)
//                                   └─► Active Scene → Widgets
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::render::Point;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only the keys the menus react to are mapped; everything else arrives
/// as `Unidentified` and is filtered out by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Navigation -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Fallback for keys not explicitly mapped.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Input or system notification delivered to the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Cursor moved to a new position (screen space, top-left origin).
    PointerMoved { x: i32, y: i32 },

    /// Mouse button pressed at the given position.
    PointerDown { button: MouseButton, x: i32, y: i32 },

    /// Mouse button released at the given position.
    PointerUp { button: MouseButton, x: i32, y: i32 },

    /// The music backend finished the current track.
    TrackEnded,

    /// The user asked to close the application.
    Quit,
}

impl InputEvent {
    /// Cursor position carried by pointer events.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerMoved { x, y }
            | Self::PointerDown { x, y, .. }
            | Self::PointerUp { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Position of a primary-button press, if this is one.
    pub fn left_click(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { button: MouseButton::Left, x, y } => Some((x, y)),
            _ => None,
        }
    }

    /// True for pointer-move events, the only events that can flip hover state.
    pub fn is_pointer_move(&self) -> bool {
        matches!(self, Self::PointerMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
