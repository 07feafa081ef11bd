//=========================================================================
// Scenes
//=========================================================================
//
// Every screen of the client and the ids that link them.
//
// Navigation:
//   intro ─► main_menu ─┬─► multiplayer_menu_scene ─┬─► create_room_scene
//                       │                           └─► join_room_scene
//                       └─► settings_scene ─────────┬─► language_settings_scene
//                                                   └─► music_settings_scene
//
// Every submenu has a "back" button (also bound to Escape) to its parent.
//
//=========================================================================

//=== Module Declarations =================================================

mod create_room;
mod intro;
mod join_room;
mod language_settings;
pub mod layout;
mod main_menu;
mod menu;
mod multiplayer_menu;
mod music_settings;
mod settings_menu;

//=== Public API ==========================================================

pub use create_room::CreateRoomScene;
pub use intro::IntroScene;
pub use join_room::JoinRoomScene;
pub use language_settings::LanguageSettingsScene;
pub use main_menu::main_menu;
pub use menu::{MenuEntry, MenuScene};
pub use multiplayer_menu::multiplayer_menu;
pub use music_settings::MusicSettingsScene;
pub use settings_menu::settings_menu;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::{Scene, SceneId};
use crate::net::{Client, Server};

//=== Scene Ids ===========================================================

pub const INTRO: SceneId = "intro";
pub const MAIN_MENU: SceneId = "main_menu";
pub const SETTINGS: SceneId = "settings_scene";
pub const MUSIC_SETTINGS: SceneId = "music_settings_scene";
pub const LANGUAGE_SETTINGS: SceneId = "language_settings_scene";
pub const MULTIPLAYER_MENU: SceneId = "multiplayer_menu_scene";
pub const CREATE_ROOM: SceneId = "create_room_scene";
pub const JOIN_ROOM: SceneId = "join_room_scene";

//=== Default Scene Set ===================================================

/// Every scene of the client, wired with the network settings of `config`.
pub fn default_scenes(config: &GameConfig) -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(IntroScene::new()),
        Box::new(main_menu()),
        Box::new(settings_menu()),
        Box::new(MusicSettingsScene::new()),
        Box::new(LanguageSettingsScene::new()),
        Box::new(multiplayer_menu()),
        Box::new(CreateRoomScene::new(Server::new(
            config.host.clone(),
            config.port,
            config.max_connections,
        ))),
        Box::new(JoinRoomScene::new(Client::new(config.host.clone(), config.port))),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SceneManager;

    #[test]
    fn default_scenes_are_fully_wired() {
        let mut manager = SceneManager::new();
        for scene in default_scenes(&GameConfig::default()) {
            manager.register(scene).unwrap();
        }

        assert_eq!(manager.len(), 8);
        assert!(manager.contains(INTRO));
        assert_eq!(manager.validate(), Ok(()));
    }
}
