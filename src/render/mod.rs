//=========================================================================
// Rendering
//=========================================================================
//
// Drawing collaborator for the widget layer.
//
// Architecture:
//   Widget::draw() → Canvas (trait) → Framebuffer → Frame → Platform
//
// Text is rendered once into a glyph bitmap (see `Font`) and blitted every
// frame; widgets re-render it only when their text changes.
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod font;
mod framebuffer;
mod geometry;

//=== Public API ==========================================================

pub use canvas::{Bitmap, Canvas, CursorIcon};
pub use font::Font;
pub use framebuffer::Framebuffer;
pub use geometry::{Color, Point, Rect};

//=== Test Support ========================================================

#[cfg(test)]
pub(crate) mod testing {
    //! Recording canvas for widget and scene tests.

    use super::*;

    /// One recorded draw call.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Fill(Color),
        FillRect(Rect, Color),
        StrokeRect(Rect, Color, u32),
        Blit { x: i32, y: i32, w: u32, h: u32 },
    }

    /// Canvas double that records draw calls and cursor requests.
    pub(crate) struct RecordingCanvas {
        pub size: (u32, u32),
        pub calls: Vec<DrawCall>,
        pub cursors: Vec<CursorIcon>,
    }

    impl RecordingCanvas {
        pub(crate) fn new(width: u32, height: u32) -> Self {
            Self {
                size: (width, height),
                calls: Vec::new(),
                cursors: Vec::new(),
            }
        }

        pub(crate) fn clear(&mut self) {
            self.calls.clear();
            self.cursors.clear();
        }
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (u32, u32) {
            self.size
        }

        fn fill(&mut self, color: Color) {
            self.calls.push(DrawCall::Fill(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(DrawCall::FillRect(rect, color));
        }

        fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
            self.calls.push(DrawCall::StrokeRect(rect, color, width));
        }

        fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
            self.calls.push(DrawCall::Blit {
                x,
                y,
                w: bitmap.width(),
                h: bitmap.height(),
            });
        }

        fn set_cursor(&mut self, icon: CursorIcon) {
            self.cursors.push(icon);
        }
    }
}
