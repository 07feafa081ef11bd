//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (Winit) with the core thread.
//
// This module defines the contract between the platform and core logic,
// so the windowing backend can change without touching scenes or widgets.
//
// Components:
// - `interface`: Message types crossing the thread boundary
// - `event_collector`: Core-side event collection per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub use event_collector::TickControl;
pub(crate) use event_collector::EventCollector;
pub(crate) use interface::{Frame, PlatformEvent};
