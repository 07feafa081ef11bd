//=========================================================================
// Menu Scene
//=========================================================================
//
// A stack of buttons that each issue one command. Used by every scene
// that is only navigation.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::layout::{self, BACKGROUND};
use crate::core::{Command, CommandQueue, InputEvent, KeyCode, Scene, SceneContext, SceneId};
use crate::error::GameError;
use crate::render::Canvas;
use crate::ui::Widgets;

//=== MenuEntry ===========================================================

/// One button of a menu.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub name: &'static str,

    /// Localization (section, key) of the label.
    pub label: (&'static str, &'static str),

    pub action: Command,

    /// Stack slot.
    pub index: usize,
}

impl MenuEntry {
    pub const fn new(
        name: &'static str,
        label: (&'static str, &'static str),
        action: Command,
        index: usize,
    ) -> Self {
        Self {
            name,
            label,
            action,
            index,
        }
    }
}

//=== MenuScene ===========================================================

pub struct MenuScene {
    id: SceneId,
    entries: Vec<MenuEntry>,

    /// Scene Escape returns to, if any.
    back: Option<SceneId>,

    widgets: Widgets,
}

impl MenuScene {
    pub fn new(id: SceneId, entries: Vec<MenuEntry>) -> Self {
        Self {
            id,
            entries,
            back: None,
            widgets: Widgets::new(),
        }
    }

    /// Adds a "back" button to `target`, also bound to Escape.
    pub fn with_back(mut self, target: SceneId) -> Self {
        self.back = Some(target);
        self
    }

    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }
}

impl Scene for MenuScene {
    fn id(&self) -> SceneId {
        self.id
    }

    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        debug!(target: "scene", "Entering {}", self.id);

        self.widgets.clear();
        for entry in &self.entries {
            let (section, key) = entry.label;
            self.widgets.push(layout::button(
                ctx,
                self.id,
                entry.name,
                ctx.text(section, key),
                entry.action.clone(),
                entry.index,
            ));
        }
        if let Some(target) = self.back {
            self.widgets.push(layout::back_button(ctx, self.id, target));
        }
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
        debug!(target: "scene", "Exiting {}", self.id);
        self.widgets.clear();
    }

    fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue) {
        if let (Some(target), InputEvent::KeyDown { key: KeyCode::Escape }) = (self.back, event) {
            commands.push(Command::ChangeScene(target));
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
        self.entries
            .iter()
            .filter_map(|entry| match entry.action {
                Command::ChangeScene(target) => Some(target),
                _ => None,
            })
            .chain(self.back)
            .collect()
    }
}
