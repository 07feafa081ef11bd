//=========================================================================
// Intro
//=========================================================================
//
// Title screen. Shows the title, a row of planets and a prompt, then
// moves on to the main menu on any key, any click, or after a delay.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::layout::{BACKGROUND, TEXT_COLOR};
use super::{INTRO, MAIN_MENU};
use crate::core::{Command, CommandQueue, InputEvent, Scene, SceneContext, SceneId};
use crate::entities::{solar_system, CelestialObject};
use crate::error::GameError;
use crate::render::{Canvas, Font, Rect};
use crate::ui::{ComponentBase, Image, Text, Widgets};

/// Seconds before the intro advances on its own.
const INTRO_DURATION: f32 = 3.0;

const TITLE_FONT: Font = Font::new(48);
const PROMPT_FONT: Font = Font::new(24);
const PLANET_SIZE: u32 = 48;
const PLANET_SPACING: u32 = 8;

//=== IntroScene ==========================================================

#[derive(Default)]
pub struct IntroScene {
    widgets: Widgets,
    elapsed: f32,
    done: bool,
}

impl IntroScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the move to the main menu, once.
    fn finish(&mut self, commands: &mut CommandQueue) {
        if self.done {
            return;
        }
        self.done = true;
        commands.push(Command::ChangeScene(MAIN_MENU));
    }

    fn text(ctx: &SceneContext<'_>, name: &str, text: &str, font: Font, center_y: i32) -> Text {
        let size = font.measure(text);
        let center_x = (ctx.screen_width() / 2) as i32;
        let rect = Rect::centered_at((center_x, center_y), size);
        Text::new(
            ComponentBase::new(name, INTRO, rect, TEXT_COLOR).with_debug(ctx.debug()),
            text,
            font,
            TEXT_COLOR,
        )
    }
}

impl Scene for IntroScene {
    fn id(&self) -> SceneId {
        INTRO
    }

    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        debug!(target: "scene", "Entering {}", INTRO);
        self.elapsed = 0.0;
        self.done = false;
        self.widgets.clear();

        let height = ctx.config.height as i32;
        self.widgets
            .push(Self::text(ctx, "title", ctx.resources.text("title"), TITLE_FONT, height / 4));

        let planets: Vec<_> = solar_system()
            .into_iter()
            .filter_map(|planet| {
                let bitmap = ctx.resources.images.image(planet.image())?.clone();
                Some((planet, bitmap))
            })
            .collect();
        let count = planets.len() as u32;
        let row_width = count * PLANET_SIZE + count.saturating_sub(1) * PLANET_SPACING;
        let start_x = (ctx.screen_width() as i32 - row_width as i32) / 2;
        for (index, (planet, bitmap)) in planets.into_iter().enumerate() {
            let x = start_x + index as i32 * (PLANET_SIZE + PLANET_SPACING) as i32;
            let rect = Rect::new(x, height / 2 - PLANET_SIZE as i32 / 2, PLANET_SIZE, PLANET_SIZE);
            let base = ComponentBase::new(planet.name(), INTRO, rect, TEXT_COLOR).with_debug(ctx.debug());
            self.widgets.push(Image::new(base, bitmap));
        }

        self.widgets.push(Self::text(
            ctx,
            "prompt",
            ctx.text("global", "press_any_key"),
            PROMPT_FONT,
            height * 3 / 4,
        ));
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
        debug!(target: "scene", "Exiting {}", INTRO);
        self.widgets.clear();
    }

    fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue) {
        match event {
            InputEvent::KeyDown { .. } | InputEvent::PointerDown { .. } => self.finish(commands),
            _ => self.widgets.handle_event(event, commands),
        }
    }

    fn update(
        &mut self,
        _ctx: &SceneContext<'_>,
        canvas: &mut dyn Canvas,
        dt: f32,
        commands: &mut CommandQueue,
    ) {
        self.elapsed += dt;
        if self.elapsed >= INTRO_DURATION {
            self.finish(commands);
        }

        canvas.fill(BACKGROUND);
        self.widgets.update(dt);
        self.widgets.draw(canvas);
    }

    fn targets(&self) -> Vec<SceneId> {
        vec![MAIN_MENU]
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::KeyCode;
    use crate::render::testing::RecordingCanvas;
    use crate::render::Bitmap;
    use crate::resources::testing::resources;

    #[test]
    fn shows_loaded_planets_only() {
        let mut resources = resources();
        resources.images.insert("earth", Bitmap::new(10, 10));
        resources.images.insert("mars", Bitmap::new(10, 10));
        let config = GameConfig::default();
        let mut scene = IntroScene::new();

        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();

        // title + 2 planets + prompt
        assert_eq!(scene.widgets.len(), 4);
        assert!(scene.widgets.get("Earth").is_some());
        assert!(scene.widgets.get("Venus").is_none());
    }

    #[test]
    fn any_key_advances_once() {
        let resources = resources();
        let config = GameConfig::default();
        let mut scene = IntroScene::new();
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();
        let mut commands = CommandQueue::new();

        scene.handle_event(&InputEvent::KeyDown { key: KeyCode::KeyA }, &mut commands);
        scene.handle_event(&InputEvent::KeyDown { key: KeyCode::KeyB }, &mut commands);

        assert!(scene.is_done());
        assert_eq!(commands.take(), vec![Command::ChangeScene(MAIN_MENU)]);
    }

    #[test]
    fn advances_after_timeout() {
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);
        let mut scene = IntroScene::new();
        scene.on_enter(&ctx).unwrap();
        let mut canvas = RecordingCanvas::new(800, 600);
        let mut commands = CommandQueue::new();

        scene.update(&ctx, &mut canvas, 2.0, &mut commands);
        assert!(commands.is_empty());
        scene.update(&ctx, &mut canvas, 1.0, &mut commands);
        assert_eq!(commands.take(), vec![Command::ChangeScene(MAIN_MENU)]);

        scene.on_enter(&ctx).unwrap();
        assert!(!scene.is_done());
    }
}
