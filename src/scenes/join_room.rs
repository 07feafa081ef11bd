//=========================================================================
// Join Room
//=========================================================================
//
// Connects to a room server. The connect button's command is handled
// here rather than by the controller, because the client belongs to this
// scene. Outcomes are reported through a notification.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::layout::{self, BACKGROUND, FONT, TEXT_COLOR};
use super::{JOIN_ROOM, MULTIPLAYER_MENU};
use crate::core::{Command, CommandQueue, InputEvent, KeyCode, Scene, SceneContext, SceneId};
use crate::error::GameError;
use crate::net::Client;
use crate::render::{Canvas, Rect};
use crate::ui::{ComponentBase, Notification, Widgets};

const NOTIFICATION: &str = "notification";

//=== JoinRoomScene =======================================================

pub struct JoinRoomScene {
    client: Client,
    widgets: Widgets,
    connect_requested: bool,
}

impl JoinRoomScene {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            widgets: Widgets::new(),
            connect_requested: false,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn notify(&mut self, message: &str) {
        if let Some(notification) = self.widgets.notification_mut(NOTIFICATION) {
            notification.show(message);
        }
    }
}

impl Scene for JoinRoomScene {
    fn id(&self) -> SceneId {
        JOIN_ROOM
    }

    fn on_enter(&mut self, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        debug!(target: "scene", "Entering {}", JOIN_ROOM);
        self.widgets.clear();
        self.connect_requested = false;

        let address = self.client.address();
        self.widgets
            .push(layout::label(ctx, JOIN_ROOM, "address_text", &address, 0));
        self.widgets.push(layout::button(
            ctx,
            JOIN_ROOM,
            "connect_btn",
            ctx.text("join_room", "connect"),
            Command::Connect,
            1,
        ));
        self.widgets
            .push(layout::back_button(ctx, JOIN_ROOM, MULTIPLAYER_MENU));

        let base = ComponentBase::new(NOTIFICATION, JOIN_ROOM, Rect::default(), TEXT_COLOR)
            .with_debug(ctx.debug());
        self.widgets
            .push(Notification::new(base, ctx.screen_width(), FONT, TEXT_COLOR));
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
        debug!(target: "scene", "Exiting {}", JOIN_ROOM);
        self.client.disconnect();
        self.widgets.clear();
    }

    fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue) {
        if let InputEvent::KeyDown { key: KeyCode::Escape } = event {
            commands.push(Command::ChangeScene(MULTIPLAYER_MENU));
            return;
        }

        let mut local = CommandQueue::new();
        self.widgets.handle_event(event, &mut local);
        for command in local.take() {
            match command {
                Command::Connect => self.connect_requested = true,
                other => commands.push(other),
            }
        }
    }

    fn update(
        &mut self,
        ctx: &SceneContext<'_>,
        canvas: &mut dyn Canvas,
        dt: f32,
        _commands: &mut CommandQueue,
    ) {
        if std::mem::take(&mut self.connect_requested) {
            if self.client.is_connected() {
                self.notify(ctx.text("join_room", "connected"));
            } else {
                match self.client.connect() {
                    Ok(()) => self.notify(ctx.text("join_room", "connecting")),
                    Err(e) => self.notify(&format!("{}: {}", ctx.text("join_room", "failed"), e)),
                }
            }
        }

        match self.client.poll() {
            Some(Ok(_)) => self.notify(ctx.text("join_room", "connected")),
            Some(Err(e)) => self.notify(&format!("{}: {}", ctx.text("join_room", "failed"), e)),
            None => {}
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::MouseButton;
    use crate::render::testing::RecordingCanvas;
    use crate::resources::testing::resources;
    use std::net::TcpListener;
    use std::thread;
    use std::time::{Duration, Instant};

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    #[test]
    fn connect_is_handled_locally() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);
        let mut scene = JoinRoomScene::new(Client::new("127.0.0.1", port));
        scene.on_enter(&ctx).unwrap();
        let mut commands = CommandQueue::new();
        let mut canvas = RecordingCanvas::new(800, 600);

        scene.handle_event(&click(310, 170), &mut commands);
        assert!(commands.is_empty());

        scene.update(&ctx, &mut canvas, 0.016, &mut commands);
        assert!(scene.client().is_connecting() || scene.client().is_connected());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !scene.client().is_connected() {
            assert!(Instant::now() < deadline, "never connected");
            thread::sleep(Duration::from_millis(10));
            scene.update(&ctx, &mut canvas, 0.016, &mut commands);
        }

        let notification = scene.widgets.notification_mut(NOTIFICATION).unwrap();
        assert!(notification.is_active());
        assert_eq!(notification.message(), "connected");

        scene.on_exit(&ctx);
        assert!(!scene.client().is_connected());
    }

    #[test]
    fn back_still_reaches_controller() {
        let resources = resources();
        let config = GameConfig::default();
        let mut scene = JoinRoomScene::new(Client::new("127.0.0.1", 1));
        scene.on_enter(&SceneContext::new(&resources, &config)).unwrap();
        let mut commands = CommandQueue::new();

        scene.handle_event(&click(310, 350), &mut commands);

        assert_eq!(commands.take(), vec![Command::ChangeScene(MULTIPLAYER_MENU)]);
    }
}
