//=========================================================================
// UniverseCatch: Library Root
//
// Scene-based game client: a single-threaded core (controller, scenes,
// widgets, shared stores) driven by a winit platform on the main thread.
//
// Responsibilities:
// - Expose the runtime entry point (`GameBuilder` / `Game`)
// - Expose the scene, widget and rendering APIs used to build screens
// - Keep the windowing backend (`platform`) private
//
// Typical usage:
// ```no_run
// use universe_catch::{GameBuilder, GameConfig};
//
// fn main() -> Result<(), universe_catch::GameError> {
//     GameBuilder::new(GameConfig::default())
//         .with_default_scenes()
//         .build()?
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod config;
pub mod core;
pub mod entities;
pub mod error;
pub mod net;
pub mod prelude;
pub mod render;
pub mod resources;
pub mod scenes;
pub mod ui;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, input translation and frame presentation.
// `game` wires everything together and is re-exported below.
//
mod game;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameBuilder};
