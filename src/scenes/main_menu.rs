//=========================================================================
// Main Menu
//=========================================================================

use super::menu::{MenuEntry, MenuScene};
use super::{MAIN_MENU, MULTIPLAYER_MENU, SETTINGS};
use crate::core::Command;

/// Play, settings and quit. The root of the navigation tree, so Escape
/// does nothing here.
pub fn main_menu() -> MenuScene {
    MenuScene::new(
        MAIN_MENU,
        vec![
            MenuEntry::new("play_btn", ("menu", "play"), Command::ChangeScene(MULTIPLAYER_MENU), 0),
            MenuEntry::new("settings_btn", ("menu", "settings"), Command::ChangeScene(SETTINGS), 1),
            MenuEntry::new("quit_btn", ("menu", "quit"), Command::Quit, 2),
        ],
    )
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{CommandQueue, InputEvent, KeyCode, MouseButton, Scene, SceneContext};
    use crate::resources::testing::resources;

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    #[test]
    fn buttons_use_localized_labels_and_layout() {
        let resources = resources();
        let config = GameConfig::default();
        let mut scene = main_menu();
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();

        let widgets = scene.widgets();
        assert_eq!(widgets.len(), 3);
        let quit = widgets.get("quit_btn").unwrap().component();
        assert_eq!(quit.base().rect.position(), (300, 220));
    }

    #[test]
    fn clicks_map_to_commands() {
        let resources = resources();
        let config = GameConfig::default();
        let mut scene = main_menu();
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();
        let mut commands = CommandQueue::new();

        scene.handle_event(&click(310, 110), &mut commands);
        scene.handle_event(&click(310, 170), &mut commands);
        scene.handle_event(&click(310, 230), &mut commands);

        assert_eq!(
            commands.take(),
            vec![
                Command::ChangeScene(MULTIPLAYER_MENU),
                Command::ChangeScene(SETTINGS),
                Command::Quit
            ]
        );
    }

    #[test]
    fn escape_is_ignored_at_the_root() {
        let resources = resources();
        let config = GameConfig::default();
        let mut scene = main_menu();
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();
        let mut commands = CommandQueue::new();

        scene.handle_event(&InputEvent::KeyDown { key: KeyCode::Escape }, &mut commands);

        assert!(commands.is_empty());
    }

    #[test]
    fn exit_clears_widgets() {
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);
        let mut scene = main_menu();

        scene.on_enter(&ctx).unwrap();
        scene.on_exit(&ctx);
        assert!(scene.widgets().is_empty());

        scene.on_enter(&ctx).unwrap();
        assert_eq!(scene.widgets().len(), 3);
    }
}
