//=========================================================================
// Canvas
//=========================================================================
//
// The drawing contract widgets render against.
//
// Widgets never touch pixels directly: they fill and outline rects, blit
// pre-rendered bitmaps, and request cursor icon changes. The software
// `Framebuffer` implements this for the real window; tests substitute a
// recording double.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Rect};

//=== Bitmap ==============================================================

/// RGBA bitmap used for images and rendered glyph caches.
pub type Bitmap = image::RgbaImage;

//=== CursorIcon ==========================================================

/// System cursor shapes the UI can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    /// Regular arrow.
    #[default]
    Default,

    /// Hand shown over interactive widgets.
    Pointer,
}

//=== Canvas Trait ========================================================

/// Drawing surface for one frame.
pub trait Canvas {
    /// Surface dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Clears the whole surface with `color`.
    fn fill(&mut self, color: Color);

    /// Fills `rect` (clipped to the surface).
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outlines `rect` with a border `width` pixels thick, drawn inward.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32);

    /// Alpha-blends `bitmap` with its top-left corner at (x, y).
    fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32);

    /// Requests a cursor icon change, applied when the frame is presented.
    fn set_cursor(&mut self, icon: CursorIcon);
}
