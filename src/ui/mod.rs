//=========================================================================
// UI Components
//=========================================================================
//
// Retained widgets owned by scenes.
//
// Architecture:
//   Scene
//     └─ Widgets (ordered)
//          └─ Widget { Button | Text | Image | Dropdown | Notification }
//               └─ Component (trait) + ComponentBase
//
// Flow:
//   Scene::handle_event() → Widgets::handle_event() → Component::handle_event()
//     → Option<Command> → CommandQueue
//   Scene::update()       → Widgets::update(dt) → Widgets::draw(canvas)
//
// Widgets never reach back into their scene or the controller. Anything
// that must change outside the widget is returned as a `Command`.
//
//=========================================================================

//=== Module Declarations =================================================

mod button;
mod dropdown;
mod image;
mod notification;
mod text;

//=== Public API ==========================================================

pub use button::Button;
pub use dropdown::{Dropdown, SelectAction};
pub use image::Image;
pub use notification::Notification;
pub use text::Text;

//=== External Dependencies ===============================================

use std::fmt;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::{Command, CommandQueue, InputEvent, SceneId};
use crate::render::{Canvas, Color, Point, Rect};

//=== Hover ===============================================================

/// Pointer-over state for the current and previous pointer move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    pub current: bool,
    pub previous: bool,
}

impl Hover {
    /// Records a new hit-test result.
    ///
    /// Returns the new state only when it differs from the previous one.
    pub fn update(&mut self, hit: bool) -> Option<bool> {
        self.previous = self.current;
        self.current = hit;
        (self.previous != self.current).then_some(self.current)
    }
}

//=== ComponentBase =======================================================

/// State shared by every widget.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    pub name: String,

    /// Owning scene, by id. Widgets hold no reference to the scene itself.
    pub scene: SceneId,

    pub rect: Rect,
    pub color: Color,
    pub visible: bool,
    pub debug: bool,
    pub hover: Hover,
}

impl ComponentBase {
    pub fn new(name: impl Into<String>, scene: SceneId, rect: Rect, color: Color) -> Self {
        Self {
            name: name.into(),
            scene,
            rect,
            color,
            visible: true,
            debug: false,
            hover: Hover::default(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Recomputes hover on pointer moves. Returns the new state on a flip.
    pub fn track_hover(&mut self, event: &InputEvent) -> Option<bool> {
        let InputEvent::PointerMoved { x, y } = *event else {
            return None;
        };

        let flipped = self.hover.update(self.rect.contains((x, y)));
        if let Some(hovered) = flipped {
            self.log(format_args!("hover {}", if hovered { "on" } else { "off" }));
        }
        flipped
    }

    /// Debug-level log line, emitted only when this widget's debug flag is set.
    pub fn log(&self, message: fmt::Arguments<'_>) {
        if self.debug {
            debug!(target: "ui", "[{}/{}] {}", self.scene, self.name, message);
        }
    }

    /// Top-left position that centers a bitmap of `size` inside the rect.
    pub fn centered(&self, size: (u32, u32)) -> Point {
        let rect = Rect::centered_at(self.rect.center(), size);
        rect.position()
    }
}

//=== Component Trait =====================================================

/// Capabilities every widget provides.
///
/// Implementors supply `base`, `base_mut` and `render`. The defaults handle
/// visibility, hover tracking and hit-testing.
pub trait Component {
    fn base(&self) -> &ComponentBase;
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Paints the widget. Only called while visible.
    fn render(&mut self, canvas: &mut dyn Canvas);

    /// Paints the widget unless it is hidden.
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        if !self.base().visible {
            return;
        }
        self.render(canvas);
    }

    /// Reacts to one input event, optionally requesting a command.
    fn handle_event(&mut self, event: &InputEvent) -> Option<Command> {
        self.base_mut().track_hover(event);
        None
    }

    /// True iff `point` lies within the widget's rect.
    fn collides(&self, point: Point) -> bool {
        self.base().rect.contains(point)
    }

    /// Advances time-based state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    fn name(&self) -> &str {
        &self.base().name
    }
}

//=== Widget ==============================================================

/// Closed set of widget kinds a scene can own.
#[derive(Debug)]
pub enum Widget {
    Button(Button),
    Text(Text),
    Image(Image),
    Dropdown(Dropdown),
    Notification(Notification),
}

impl Widget {
    pub fn component(&self) -> &dyn Component {
        match self {
            Self::Button(w) => w,
            Self::Text(w) => w,
            Self::Image(w) => w,
            Self::Dropdown(w) => w,
            Self::Notification(w) => w,
        }
    }

    pub fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            Self::Button(w) => w,
            Self::Text(w) => w,
            Self::Image(w) => w,
            Self::Dropdown(w) => w,
            Self::Notification(w) => w,
        }
    }

    /// Expanded dropdown lists paint over their neighbours.
    fn draws_on_top(&self) -> bool {
        matches!(self, Self::Dropdown(dropdown) if dropdown.is_expanded())
    }
}

macro_rules! impl_from_widget {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Widget {
                fn from(widget: $kind) -> Self {
                    Self::$kind(widget)
                }
            }
        )*
    };
}

impl_from_widget!(Button, Text, Image, Dropdown, Notification);

//=== Widgets =============================================================

/// Ordered widget list owned by a scene.
///
/// Cleared on scene exit and rebuilt from scratch on enter.
#[derive(Debug, Default)]
pub struct Widgets {
    items: Vec<Widget>,
}

impl Widgets {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Ownership --------------------------------------------------------

    pub fn push(&mut self, widget: impl Into<Widget>) {
        self.items.push(widget.into());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.items.iter()
    }

    //--- Lookups ----------------------------------------------------------

    pub fn get(&self, name: &str) -> Option<&Widget> {
        self.items.iter().find(|w| w.component().name() == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Widget> {
        self.items.iter_mut().find(|w| w.component().name() == name)
    }

    pub fn button_mut(&mut self, name: &str) -> Option<&mut Button> {
        match self.get_mut(name)? {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, name: &str) -> Option<&mut Text> {
        match self.get_mut(name)? {
            Widget::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn dropdown(&self, name: &str) -> Option<&Dropdown> {
        match self.get(name)? {
            Widget::Dropdown(dropdown) => Some(dropdown),
            _ => None,
        }
    }

    pub fn notification_mut(&mut self, name: &str) -> Option<&mut Notification> {
        match self.get_mut(name)? {
            Widget::Notification(notification) => Some(notification),
            _ => None,
        }
    }

    //--- Dispatch ---------------------------------------------------------

    /// Forwards `event` to every widget in order, queueing their commands.
    ///
    /// While a dropdown list is open it captures pointer events: widgets it
    /// paints over never see the click or the hover.
    pub fn handle_event(&mut self, event: &InputEvent, commands: &mut CommandQueue) {
        let captured = event.position().is_some() && self.items.iter().any(Widget::draws_on_top);

        for widget in &mut self.items {
            if captured && !widget.draws_on_top() {
                continue;
            }
            if let Some(command) = widget.component_mut().handle_event(event) {
                commands.push(command);
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        for widget in &mut self.items {
            widget.component_mut().update(dt);
        }
    }

    /// Draws every widget in order, then expanded dropdowns on top.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        for widget in self.items.iter_mut().filter(|w| !w.draws_on_top()) {
            widget.component_mut().draw(canvas);
        }
        for widget in self.items.iter_mut().filter(|w| w.draws_on_top()) {
            widget.component_mut().draw(canvas);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MouseButton;
    use crate::render::testing::{DrawCall, RecordingCanvas};
    use crate::render::Font;

    fn base(name: &str, rect: Rect) -> ComponentBase {
        ComponentBase::new(name, "test", rect, Color::BLUE)
    }

    fn moved(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    //=== Hover ===========================================================

    #[test]
    fn hover_reports_only_flips() {
        let mut hover = Hover::default();

        assert_eq!(hover.update(false), None);
        assert_eq!(hover.update(true), Some(true));
        assert_eq!(hover.update(true), None);
        assert_eq!(hover.update(false), Some(false));
        assert_eq!(hover.update(false), None);
    }

    #[test]
    fn track_hover_ignores_non_move_events() {
        let mut base = base("b", Rect::new(0, 0, 10, 10));
        let click = InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 5,
            y: 5,
        };

        assert_eq!(base.track_hover(&click), None);
        assert!(!base.hover.current);
        assert_eq!(base.track_hover(&moved(5, 5)), Some(true));
        assert_eq!(base.track_hover(&moved(6, 6)), None);
        assert_eq!(base.track_hover(&moved(10, 5)), Some(false));
    }

    //=== Component Defaults ==============================================

    #[test]
    fn collides_uses_half_open_rect() {
        let text = Text::new(
            base("t", Rect::new(10, 20, 30, 40)),
            "hi",
            Font::default(),
            Color::WHITE,
        );

        assert!(text.collides((10, 20)));
        assert!(text.collides((39, 59)));
        assert!(!text.collides((40, 20)));
        assert!(!text.collides((10, 60)));
        assert!(!text.collides((9, 20)));
    }

    #[test]
    fn hidden_widgets_do_not_draw() {
        let mut canvas = RecordingCanvas::new(100, 100);
        let mut text = Text::new(
            base("t", Rect::new(0, 0, 50, 20)).hidden(),
            "hi",
            Font::default(),
            Color::WHITE,
        );

        text.draw(&mut canvas);
        assert!(canvas.calls.is_empty());

        text.base_mut().visible = true;
        text.draw(&mut canvas);
        assert_eq!(canvas.calls.len(), 1);
    }

    //=== Widgets =========================================================

    #[test]
    fn widgets_queue_commands_in_order() {
        let mut widgets = Widgets::new();
        widgets.push(
            Button::new(base("a", Rect::new(0, 0, 50, 50)), "A", Font::default(), Color::WHITE)
                .with_action(Command::Quit),
        );
        widgets.push(
            Button::new(base("b", Rect::new(0, 0, 50, 50)), "B", Font::default(), Color::WHITE)
                .with_action(Command::ToggleMusic),
        );
        widgets.push(Button::new(
            base("c", Rect::new(100, 100, 50, 50)),
            "C",
            Font::default(),
            Color::WHITE,
        ));

        let mut commands = CommandQueue::new();
        let click = InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 10,
            y: 10,
        };
        widgets.handle_event(&click, &mut commands);

        assert_eq!(commands.take(), vec![Command::Quit, Command::ToggleMusic]);
    }

    #[test]
    fn open_dropdown_captures_pointer_events() {
        let mut widgets = Widgets::new();
        widgets.push(
            Dropdown::new(
                base("lang", Rect::new(0, 0, 100, 20)),
                Font::default(),
                Color::WHITE,
                vec![
                    ("en".to_string(), "English".to_string()),
                    ("es".to_string(), "Español".to_string()),
                ],
                None,
            )
            .unwrap()
            .on_select(Command::SetLanguage),
        );
        widgets.push(
            Button::new(base("under", Rect::new(0, 40, 100, 20)), "U", Font::default(), Color::WHITE)
                .with_action(Command::Quit),
        );
        let click = |x, y| InputEvent::PointerDown {
            button: MouseButton::Left,
            x,
            y,
        };
        let mut commands = CommandQueue::new();

        widgets.handle_event(&click(10, 10), &mut commands);
        widgets.handle_event(&moved(10, 45), &mut commands);
        assert!(!widgets.get("under").unwrap().component().base().hover.current);

        widgets.handle_event(&click(10, 45), &mut commands);
        assert_eq!(commands.take(), vec![Command::SetLanguage("es".to_string())]);
        assert!(!widgets.dropdown("lang").unwrap().is_expanded());

        widgets.handle_event(&click(10, 45), &mut commands);
        assert_eq!(commands.take(), vec![Command::Quit], "Closed list releases the pointer");
    }

    #[test]
    fn typed_lookups_match_kind() {
        let mut widgets = Widgets::new();
        widgets.push(Text::new(
            base("label", Rect::new(0, 0, 10, 10)),
            "x",
            Font::default(),
            Color::WHITE,
        ));

        assert!(widgets.text_mut("label").is_some());
        assert!(widgets.button_mut("label").is_none());
        assert!(widgets.get("missing").is_none());
    }

    #[test]
    fn expanded_dropdown_draws_last() {
        let mut widgets = Widgets::new();
        let mut dropdown = Dropdown::new(
            base("lang", Rect::new(0, 0, 100, 20)),
            Font::default(),
            Color::WHITE,
            vec![("en".into(), "English".into())],
            None,
        )
        .unwrap();
        dropdown.toggle();
        widgets.push(dropdown);
        widgets.push(Text::new(
            base("label", Rect::new(0, 200, 10, 10)),
            "x",
            Font::default(),
            Color::WHITE,
        ));

        let mut canvas = RecordingCanvas::new(200, 300);
        widgets.draw(&mut canvas);

        let first_blit_y = canvas.calls.iter().find_map(|call| match call {
            DrawCall::Blit { y, .. } => Some(*y),
            _ => None,
        });
        assert!(first_blit_y.is_some_and(|y| y > 150), "Text label drawn first");
    }
}
