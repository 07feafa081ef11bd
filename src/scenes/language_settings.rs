//=========================================================================
// Language Settings
//=========================================================================
//
// Dropdown of the configured languages. Picking one issues
// `SetLanguage`; the controller then re-enters this scene so every label
// is rebuilt in the new language.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::layout::{self, BACKGROUND, BUTTON_COLOR, FONT, TEXT_COLOR};
use super::{LANGUAGE_SETTINGS, SETTINGS};
use crate::core::{Command, CommandQueue, InputEvent, KeyCode, Scene, SceneContext, SceneId};
use crate::error::GameError;
use crate::render::Canvas;
use crate::ui::{ComponentBase, Dropdown, Widgets};

const LANGUAGE_DROPDOWN: &str = "language_dropdown";

//=== LanguageSettingsScene ===============================================

#[derive(Default)]
pub struct LanguageSettingsScene {
    widgets: Widgets,
}

impl LanguageSettingsScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_language(&self) -> Option<&str> {
        self.widgets.dropdown(LANGUAGE_DROPDOWN).map(Dropdown::selected)
    }
}

impl Scene for LanguageSettingsScene {
    fn id(&self) -> SceneId {
        LANGUAGE_SETTINGS
    }

    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        debug!(target: "scene", "Entering {}", LANGUAGE_SETTINGS);
        self.widgets.clear();

        let options = ctx
            .config
            .languages
            .iter()
            .map(|language| (language.code.clone(), language.label.clone()))
            .collect();
        let base = ComponentBase::new(LANGUAGE_DROPDOWN, LANGUAGE_SETTINGS, layout::slot(ctx, 0), BUTTON_COLOR)
            .with_debug(ctx.debug());
        let dropdown = Dropdown::new(base, FONT, TEXT_COLOR, options, Some(ctx.language()))?
            .on_select(Command::SetLanguage);

        self.widgets.push(dropdown);
        self.widgets.push(layout::back_button(ctx, LANGUAGE_SETTINGS, SETTINGS));
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
        debug!(target: "scene", "Exiting {}", LANGUAGE_SETTINGS);
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
        _ctx: &SceneContext<'_>,
        canvas: &mut dyn Canvas,
        dt: f32,
        _commands: &mut CommandQueue,
    ) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, LanguageOption};
    use crate::core::MouseButton;
    use crate::error::UiError;
    use crate::resources::testing::resources;

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    #[test]
    fn dropdown_starts_on_current_language() {
        let mut resources = resources();
        resources.set_language("es");
        let config = GameConfig::default();
        let mut scene = LanguageSettingsScene::new();

        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();

        assert_eq!(scene.selected_language(), Some("es"));
    }

    #[test]
    fn picking_a_row_requests_language_change() {
        let resources = resources();
        let config = GameConfig::default();
        let mut scene = LanguageSettingsScene::new();
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();
        let mut commands = CommandQueue::new();

        scene.handle_event(&click(310, 110), &mut commands);
        scene.handle_event(&click(310, 210), &mut commands);

        assert_eq!(commands.take(), vec![Command::SetLanguage("es".to_string())]);
    }

    #[test]
    fn open_list_covers_back_button() {
        let resources = resources();
        let config = GameConfig {
            languages: vec![
                LanguageOption::new("en", "English"),
                LanguageOption::new("es", "Español"),
                LanguageOption::new("fr", "Français"),
                LanguageOption::new("de", "Deutsch"),
            ],
            ..GameConfig::default()
        };
        let mut scene = LanguageSettingsScene::new();
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();
        let mut commands = CommandQueue::new();

        // Row 3 spans y 300..350 and overlaps the back button at 340..390.
        scene.handle_event(&click(310, 110), &mut commands);
        scene.handle_event(&click(310, 345), &mut commands);

        assert_eq!(commands.take(), vec![Command::SetLanguage("de".to_string())]);
    }

    #[test]
    fn empty_language_list_fails_on_enter() {
        let resources = resources();
        let config = GameConfig {
            languages: Vec::new(),
            ..GameConfig::default()
        };
        let mut scene = LanguageSettingsScene::new();

        let err = scene.on_enter(&SceneContext::new(&resources, &config)).unwrap_err();

        assert!(matches!(err, GameError::Ui(UiError::EmptyOptions(_))));
        assert!(err.is_fatal());
    }
}
