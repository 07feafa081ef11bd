//=========================================================================
// Settings Menu
//=========================================================================

use super::menu::{MenuEntry, MenuScene};
use super::{LANGUAGE_SETTINGS, MAIN_MENU, MUSIC_SETTINGS, SETTINGS};
use crate::core::Command;

pub fn settings_menu() -> MenuScene {
    MenuScene::new(
        SETTINGS,
        vec![
            MenuEntry::new(
                "language_btn",
                ("settings", "language"),
                Command::ChangeScene(LANGUAGE_SETTINGS),
                0,
            ),
            MenuEntry::new(
                "music_btn",
                ("settings", "music"),
                Command::ChangeScene(MUSIC_SETTINGS),
                1,
            ),
        ],
    )
    .with_back(MAIN_MENU)
}

//=========================================================================
// Unit Tests
//=========================================================================
