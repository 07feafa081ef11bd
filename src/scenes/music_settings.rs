//=========================================================================
// Music Settings
//=========================================================================
//
// Pause toggle and volume controls. Labels follow the live music state,
// so they stay correct whichever way the state was changed.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::layout::{self, BACKGROUND};
use super::{MUSIC_SETTINGS, SETTINGS};
use crate::core::{Command, CommandQueue, InputEvent, KeyCode, Scene, SceneContext, SceneId};
use crate::error::GameError;
use crate::render::Canvas;
use crate::ui::Widgets;

const STATE_BUTTON: &str = "state_btn";
const VOLUME_TEXT: &str = "volume_text";

//=== MusicSettingsScene ==================================================

#[derive(Default)]
pub struct MusicSettingsScene {
    widgets: Widgets,
}

impl MusicSettingsScene {
    pub fn new() -> Self {
        Self::default()
    }

    fn state_label<'a>(ctx: &SceneContext<'a>) -> &'a str {
        let key = if ctx.resources.music.is_paused() { "off" } else { "on" };
        ctx.text("music_settings", key)
    }

    fn volume_label(ctx: &SceneContext<'_>) -> String {
        let percent = (ctx.resources.music.volume() * 100.0).round() as u32;
        format!("{}: {}%", ctx.text("music_settings", "volume"), percent)
    }

    /// Brings the labels in line with the music state.
    fn refresh(&mut self, ctx: &SceneContext<'_>) {
        if let Some(button) = self.widgets.button_mut(STATE_BUTTON) {
            button.set_text(Self::state_label(ctx));
        }
        if let Some(text) = self.widgets.text_mut(VOLUME_TEXT) {
            text.set_text(Self::volume_label(ctx));
        }
    }
}

impl Scene for MusicSettingsScene {
    fn id(&self) -> SceneId {
        MUSIC_SETTINGS
    }

    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        debug!(target: "scene", "Entering {}", MUSIC_SETTINGS);
        self.widgets.clear();

        let id = MUSIC_SETTINGS;
        self.widgets.push(layout::button(
            ctx,
            id,
            STATE_BUTTON,
            Self::state_label(ctx),
            Command::ToggleMusic,
            0,
        ));
        self.widgets.push(layout::button(
            ctx,
            id,
            "volume_up_btn",
            ctx.text("music_settings", "up"),
            Command::VolumeUp,
            1,
        ));
        self.widgets.push(layout::button(
            ctx,
            id,
            "volume_down_btn",
            ctx.text("music_settings", "down"),
            Command::VolumeDown,
            2,
        ));
        self.widgets
            .push(layout::label(ctx, id, VOLUME_TEXT, &Self::volume_label(ctx), 3));
        self.widgets.push(layout::back_button(ctx, id, SETTINGS));
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
        debug!(target: "scene", "Exiting {}", MUSIC_SETTINGS);
        self.widgets.clear();
    }

    fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue) {
        if let InputEvent::KeyDown { key: KeyCode::Escape } = event {
            commands.push(Command::ChangeScene(SETTINGS));
            return;
        }
        self.widgets.handle_event(event, commands);
    }

    fn update(
        &mut self,
        ctx: &SceneContext<'_>,
        canvas: &mut dyn Canvas,
        dt: f32,
        _commands: &mut CommandQueue,
    ) {
        self.refresh(ctx);
        canvas.fill(BACKGROUND);
        self.widgets.update(dt);
        self.widgets.draw(canvas);
    }

    fn targets(&self) -> Vec<SceneId> {
        vec![SETTINGS]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
