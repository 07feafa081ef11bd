//=========================================================================
// Entities
//=========================================================================
//
// Card-game domain objects. Only the catalog and the `CelestialObject`
// interface exist; no rules are attached yet.
//
//=========================================================================

//=== Module Declarations =================================================

mod planet;

//=== Public API ==========================================================

pub use planet::{solar_system, Planet, PLANET_FILES};

//=== GameState ===========================================================

/// Match state that celestial objects act upon.
///
/// Empty until card-play rules exist.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameState {}

//=== CelestialObject =====================================================

/// A card in the deck.
pub trait CelestialObject {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Name of the image in the `ResourceLoader`.
    fn image(&self) -> &str;

    /// Applies this object's effect to the match.
    fn effect(&self, state: &mut GameState);
}
