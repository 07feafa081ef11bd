//=========================================================================
// Create Room
//=========================================================================
//
// Hosts a room: the server starts when the scene is entered and stops
// when it is left. Shows the listening address and the player count.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::layout::{self, BACKGROUND};
use super::{CREATE_ROOM, MULTIPLAYER_MENU};
use crate::core::{Command, CommandQueue, InputEvent, KeyCode, Scene, SceneContext, SceneId};
use crate::error::GameError;
use crate::net::Server;
use crate::render::Canvas;
use crate::ui::Widgets;

const STATUS_TEXT: &str = "status_text";
const PLAYERS_TEXT: &str = "players_text";

//=== CreateRoomScene =====================================================

pub struct CreateRoomScene {
    server: Server,
    widgets: Widgets,
}

impl CreateRoomScene {
    pub fn new(server: Server) -> Self {
        Self {
            server,
            widgets: Widgets::new(),
        }
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    fn players_label(&self, ctx: &SceneContext<'_>) -> String {
        format!(
            "{}: {}/{}",
            ctx.text("create_room", "players"),
            self.server.client_count(),
            self.server.max_connections()
        )
    }
}

impl Scene for CreateRoomScene {
    fn id(&self) -> SceneId {
        CREATE_ROOM
    }

    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        debug!(target: "scene", "Entering {}", CREATE_ROOM);
        self.widgets.clear();

        let status = match self.server.start() {
            Ok(addr) => format!("{} {}", ctx.text("create_room", "waiting"), addr),
            Err(e) => {
                warn!(target: "net", "Could not start server: {}", e);
                ctx.text("create_room", "failed").to_string()
            }
        };

        self.widgets
            .push(layout::label(ctx, CREATE_ROOM, STATUS_TEXT, &status, 0));
        let players = self.players_label(ctx);
        self.widgets
            .push(layout::label(ctx, CREATE_ROOM, PLAYERS_TEXT, &players, 1));
        self.widgets
            .push(layout::back_button(ctx, CREATE_ROOM, MULTIPLAYER_MENU));
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
        debug!(target: "scene", "Exiting {}", CREATE_ROOM);
        self.server.stop();
        self.widgets.clear();
    }

    fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue) {
        if let InputEvent::KeyDown { key: KeyCode::Escape } = event {
            commands.push(Command::ChangeScene(MULTIPLAYER_MENU));
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
        let players = self.players_label(ctx);
        if let Some(text) = self.widgets.text_mut(PLAYERS_TEXT) {
            text.set_text(players);
        }

        canvas.fill(BACKGROUND);
        self.widgets.update(dt);
        self.widgets.draw(canvas);
    }

    fn targets(&self) -> Vec<SceneId> {
        vec![MULTIPLAYER_MENU]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
