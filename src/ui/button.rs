//=========================================================================
// Button
//=========================================================================
//
// Clickable label. Fires its command on a left pointer-down inside its
// rect; the release is ignored.
//
//=========================================================================

use crate::core::{Command, InputEvent};
use crate::render::{Bitmap, Canvas, Color, CursorIcon, Font};

use super::{Component, ComponentBase};

/// Border width of an idle button.
const OUTLINE_WIDTH: u32 = 2;

//=== Button ==============================================================

#[derive(Debug)]
pub struct Button {
    base: ComponentBase,
    text: String,
    font: Font,
    font_color: Color,
    label: Bitmap,
    action: Command,

    /// Hover state last pushed to the cursor, so transitions are sent once.
    cursor_hovered: bool,
}

impl Button {
    /// Creates a button that does nothing when clicked.
    pub fn new(base: ComponentBase, text: impl Into<String>, font: Font, font_color: Color) -> Self {
        let text = text.into();
        let label = font.render(&text, font_color);
        Self {
            base,
            text,
            font,
            font_color,
            label,
            action: Command::None,
            cursor_hovered: false,
        }
    }

    pub fn with_action(mut self, action: Command) -> Self {
        self.action = action;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the label, re-rendering the glyph cache when it changed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.label = self.font.render(&text, self.font_color);
        self.text = text;
    }

    pub fn action(&self) -> &Command {
        &self.action
    }

    pub fn is_hovered(&self) -> bool {
        self.base.hover.current
    }
}

impl Component for Button {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let hovered = self.base.hover.current;
        if hovered {
            canvas.fill_rect(self.base.rect, self.base.color);
        } else {
            canvas.stroke_rect(self.base.rect, self.base.color, OUTLINE_WIDTH);
        }

        let (x, y) = self.base.centered(self.label.dimensions());
        canvas.blit(&self.label, x, y);

        if hovered != self.cursor_hovered {
            canvas.set_cursor(if hovered {
                CursorIcon::Pointer
            } else {
                CursorIcon::Default
            });
            self.cursor_hovered = hovered;
        }
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Command> {
        self.base.track_hover(event);

        let point = event.left_click()?;
        if !self.collides(point) {
            return None;
        }
        self.base.log(format_args!("clicked ({:?})", self.action));
        Some(self.action.clone())
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
    use crate::render::Rect;

    fn button() -> Button {
        Button::new(
            ComponentBase::new("play", "menu", Rect::new(100, 100, 200, 50), Color::BLUE),
            "Play",
            Font::new(24),
            Color::WHITE,
        )
        .with_action(Command::ChangeScene("next"))
    }

    fn down(button: MouseButton, x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown { button, x, y }
    }

    //=== Clicks ==========================================================

    #[test]
    fn fires_on_left_down_inside() {
        let mut button = button();
        assert_eq!(
            button.handle_event(&down(MouseButton::Left, 150, 120)),
            Some(Command::ChangeScene("next"))
        );
    }

    #[test]
    fn ignores_clicks_outside_release_and_other_buttons() {
        let mut button = button();

        assert_eq!(button.handle_event(&down(MouseButton::Left, 300, 120)), None);
        assert_eq!(button.handle_event(&down(MouseButton::Right, 150, 120)), None);
        assert_eq!(
            button.handle_event(&InputEvent::PointerUp {
                button: MouseButton::Left,
                x: 150,
                y: 120
            }),
            None
        );
    }

    #[test]
    fn click_uses_rect_at_event_time() {
        let mut button = button();
        button.handle_event(&InputEvent::PointerMoved { x: 150, y: 120 });
        assert!(button.is_hovered());

        button.base_mut().rect = Rect::new(0, 0, 10, 10);
        assert_eq!(button.handle_event(&down(MouseButton::Left, 150, 120)), None);
        assert!(button.handle_event(&down(MouseButton::Left, 5, 5)).is_some());
    }

    #[test]
    fn default_action_is_none() {
        let mut button = Button::new(
            ComponentBase::new("b", "menu", Rect::new(0, 0, 10, 10), Color::BLUE),
            "B",
            Font::default(),
            Color::WHITE,
        );
        assert_eq!(button.handle_event(&down(MouseButton::Left, 1, 1)), Some(Command::None));
    }

    //=== Drawing =========================================================

    #[test]
    fn outline_when_idle_fill_when_hovered() {
        let mut button = button();
        let mut canvas = RecordingCanvas::new(800, 600);

        button.draw(&mut canvas);
        assert_eq!(
            canvas.calls[0],
            DrawCall::StrokeRect(Rect::new(100, 100, 200, 50), Color::BLUE, OUTLINE_WIDTH)
        );

        canvas.clear();
        button.handle_event(&InputEvent::PointerMoved { x: 110, y: 110 });
        button.draw(&mut canvas);
        assert_eq!(canvas.calls[0], DrawCall::FillRect(Rect::new(100, 100, 200, 50), Color::BLUE));
    }

    #[test]
    fn label_is_centered() {
        let mut button = button();
        let mut canvas = RecordingCanvas::new(800, 600);
        button.draw(&mut canvas);

        // "Play" at size 24: scale 2, 16px cells → 64×16.
        assert_eq!(
            canvas.calls[1],
            DrawCall::Blit {
                x: 168,
                y: 117,
                w: 64,
                h: 16
            }
        );
    }

    #[test]
    fn cursor_changes_only_on_hover_transitions() {
        let mut button = button();
        let mut canvas = RecordingCanvas::new(800, 600);

        button.draw(&mut canvas);
        assert!(canvas.cursors.is_empty());

        button.handle_event(&InputEvent::PointerMoved { x: 110, y: 110 });
        button.draw(&mut canvas);
        button.draw(&mut canvas);
        button.handle_event(&InputEvent::PointerMoved { x: 120, y: 110 });
        button.draw(&mut canvas);
        assert_eq!(canvas.cursors, vec![CursorIcon::Pointer]);

        button.handle_event(&InputEvent::PointerMoved { x: 0, y: 0 });
        button.draw(&mut canvas);
        button.draw(&mut canvas);
        assert_eq!(canvas.cursors, vec![CursorIcon::Pointer, CursorIcon::Default]);
    }

    //=== Text ============================================================

    #[test]
    fn set_text_rerenders_label() {
        let mut button = button();
        button.set_text("Music: Off");
        assert_eq!(button.text(), "Music: Off");

        let mut canvas = RecordingCanvas::new(800, 600);
        button.draw(&mut canvas);
        assert!(matches!(canvas.calls[1], DrawCall::Blit { w: 160, .. }));
    }
}
