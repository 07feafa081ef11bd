//=========================================================================
// Planet
//=========================================================================

use super::{CelestialObject, GameState};

//=== Catalog =============================================================

/// Planet image files under `<resource_dir>/planets`, in display order.
pub const PLANET_FILES: &[&str] = &[
    "mercury.png",
    "venus.png",
    "earth.png",
    "mars.png",
    "jupiter.png",
    "saturn.png",
    "uranus.png",
    "neptune.png",
    "pluto.png",
    "bellerophonn.png",
];

const PLANETS: &[(&str, &str)] = &[
    ("Mercury", "The smallest planet, closest to the Sun."),
    ("Venus", "A scorching world under thick clouds."),
    ("Earth", "The blue planet."),
    ("Mars", "The red planet."),
    ("Jupiter", "The largest gas giant."),
    ("Saturn", "Famous for its rings."),
    ("Uranus", "An ice giant rolling on its side."),
    ("Neptune", "The windiest planet."),
    ("Pluto", "A distant dwarf planet."),
    ("Bellerophonn", "A world beyond the known system."),
];

//=== Planet ==============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    name: String,
    description: String,
    image: String,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

impl CelestialObject for Planet {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn effect(&self, _state: &mut GameState) {}
}

/// Every planet in the catalog, in display order.
pub fn solar_system() -> Vec<Planet> {
    PLANETS
        .iter()
        .map(|(name, description)| Planet::new(*name, *description, name.to_lowercase()))
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_images_match_planet_files() {
        let images: Vec<String> = solar_system()
            .iter()
            .map(|planet| format!("{}.png", planet.image()))
            .collect();
        assert_eq!(images, PLANET_FILES);
    }

    #[test]
    fn planets_have_no_effect() {
        let mut state = GameState::default();
        for planet in solar_system() {
            planet.effect(&mut state);
        }
        assert_eq!(state, GameState::default());
    }
}
