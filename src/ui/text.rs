//=========================================================================
// Text
//=========================================================================

use crate::render::{Bitmap, Canvas, Color, Font};

use super::{Component, ComponentBase};

/// Static label centered in its rect.
#[derive(Debug)]
pub struct Text {
    base: ComponentBase,
    text: String,
    font: Font,
    font_color: Color,
    label: Bitmap,
}

impl Text {
    pub fn new(base: ComponentBase, text: impl Into<String>, font: Font, font_color: Color) -> Self {
        let text = text.into();
        let label = font.render(&text, font_color);
        Self {
            base,
            text,
            font,
            font_color,
            label,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.label = self.font.render(&text, self.font_color);
        self.text = text;
    }
}

impl Component for Text {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let (x, y) = self.base.centered(self.label.dimensions());
        canvas.blit(&self.label, x, y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
