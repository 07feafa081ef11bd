//=========================================================================
// Notification
//=========================================================================
//
// Transient message near the top of the screen. Hidden until shown, then
// visible for a fixed duration counted down by frame time.
//
//=========================================================================

use crate::render::{Bitmap, Canvas, Color, Font, Rect};

use super::{Component, ComponentBase};

/// Vertical center of the message.
const TOP_OFFSET: i32 = 50;

/// How long a message stays visible unless overridden.
pub const DEFAULT_DURATION_MS: f32 = 2000.0;

#[derive(Debug)]
pub struct Notification {
    base: ComponentBase,
    font: Font,
    font_color: Color,
    message: String,
    label: Bitmap,
    center_x: i32,
    duration_ms: f32,
    remaining_ms: f32,
}

impl Notification {
    /// Creates a hidden notification centered on a screen `screen_width` wide.
    pub fn new(mut base: ComponentBase, screen_width: u32, font: Font, font_color: Color) -> Self {
        base.visible = false;
        Self {
            base,
            font,
            font_color,
            message: String::new(),
            label: font.render("", font_color),
            center_x: (screen_width / 2) as i32,
            duration_ms: DEFAULT_DURATION_MS,
            remaining_ms: 0.0,
        }
    }

    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Shows `message`, restarting the countdown.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.label = self.font.render(&self.message, self.font_color);
        self.base.rect = Rect::centered_at((self.center_x, TOP_OFFSET), self.label.dimensions());
        self.base.visible = true;
        self.remaining_ms = self.duration_ms;
        self.base.log(format_args!("showing \"{}\"", self.message));
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_active(&self) -> bool {
        self.base.visible
    }
}

impl Component for Notification {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.blit(&self.label, self.base.rect.x, self.base.rect.y);
    }

    fn update(&mut self, dt: f32) {
        if !self.base.visible {
            return;
        }
        self.remaining_ms -= dt * 1000.0;
        if self.remaining_ms <= 0.0 {
            self.remaining_ms = 0.0;
            self.base.visible = false;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
