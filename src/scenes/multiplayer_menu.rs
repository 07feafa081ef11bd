//=========================================================================
// Multiplayer Menu
//=========================================================================

use super::menu::{MenuEntry, MenuScene};
use super::{CREATE_ROOM, JOIN_ROOM, MAIN_MENU, MULTIPLAYER_MENU};
use crate::core::Command;

pub fn multiplayer_menu() -> MenuScene {
    MenuScene::new(
        MULTIPLAYER_MENU,
        vec![
            MenuEntry::new(
                "create_room_btn",
                ("multiplayer_menu", "create"),
                Command::ChangeScene(CREATE_ROOM),
                0,
            ),
            MenuEntry::new(
                "join_room_btn",
                ("multiplayer_menu", "join"),
                Command::ChangeScene(JOIN_ROOM),
                1,
            ),
        ],
    )
    .with_back(MAIN_MENU)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scene;

    #[test]
    fn declares_room_targets() {
        let scene = multiplayer_menu();
        assert_eq!(scene.id(), MULTIPLAYER_MENU);
        assert_eq!(scene.targets(), vec![CREATE_ROOM, JOIN_ROOM, MAIN_MENU]);
    }
}
