//=========================================================================
// Framebuffer
//=========================================================================
//
// Software `Canvas` backed by a `Vec<u32>` of `0x00RRGGBB` pixels.
//
// The core thread draws each tick into a framebuffer and ships a `Frame`
// snapshot to the platform thread, which copies it to the window surface.
// All drawing is clipped to the buffer bounds.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Bitmap, Canvas, Color, CursorIcon, Rect};
use crate::core::platform_bridge::Frame;

//=== Framebuffer =========================================================

/// CPU-side pixel buffer implementing [`Canvas`].
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    cursor: Option<CursorIcon>,
}

impl Framebuffer {
    //--- Construction -----------------------------------------------------

    /// Creates a black framebuffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            cursor: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Copies the current pixels into a [`Frame`] and takes the pending
    /// cursor request.
    pub(crate) fn snapshot(&mut self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            cursor: self.cursor.take(),
        }
    }

    /// Puts back a cursor request from a frame that was never presented.
    ///
    /// A newer request made since the snapshot wins.
    pub(crate) fn requeue_cursor(&mut self, cursor: Option<CursorIcon>) {
        if self.cursor.is_none() {
            self.cursor = cursor;
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Intersects `rect` with the buffer, returning pixel bounds
    /// `(x0, y0, x1, y1)` with exclusive upper ends.
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

//=== Canvas Implementation ===============================================

impl Canvas for Framebuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_u32());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let value = color.to_u32();
        for y in y0..y1 {
            let start = self.index(x0, y);
            let end = self.index(x1, y);
            self.pixels[start..end].fill(value);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        let width = width.min(rect.w / 2 + 1).min(rect.h / 2 + 1);
        let (w, h) = (rect.w, rect.h);

        // Top, bottom, left, right bands.
        self.fill_rect(Rect::new(rect.x, rect.y, w, width), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - width as i32, w, width), color);
        self.fill_rect(Rect::new(rect.x, rect.y, width, h), color);
        self.fill_rect(Rect::new(rect.right() - width as i32, rect.y, width, h), color);
    }

    fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        let target = Rect::new(x, y, bitmap.width(), bitmap.height());
        let Some((x0, y0, x1, y1)) = self.clip(target) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let src = bitmap.get_pixel((px as i32 - x) as u32, (py as i32 - y) as u32).0;
                let alpha = src[3] as u32;
                if alpha == 0 {
                    continue;
                }

                let index = self.index(px, py);
                let dst = self.pixels[index];
                let blend = |s: u8, d: u32| (s as u32 * alpha + d * (255 - alpha)) / 255;

                let r = blend(src[0], (dst >> 16) & 0xFF);
                let g = blend(src[1], (dst >> 8) & 0xFF);
                let b = blend(src[2], dst & 0xFF);
                self.pixels[index] = (r << 16) | (g << 8) | b;
            }
        }
    }

    fn set_cursor(&mut self, icon: CursorIcon) {
        self.cursor = Some(icon);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
