//=========================================================================
// Geometry
//=========================================================================
//
// Screen-space rectangles, points and colours used by the widget layer.
//
// Coordinates are pixels with a top-left origin. Rectangles are half-open:
// a rect at (x, y) with size (w, h) covers [x, x+w) × [y, y+h).
//
//=========================================================================

//=== Point ===============================================================

/// Screen-space pixel position (x, y).
pub type Point = (i32, i32);

//=== Rect ================================================================

/// Axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    //--- Construction -----------------------------------------------------

    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rect from a top-left position and a size.
    pub const fn from_parts(position: Point, size: (u32, u32)) -> Self {
        Self::new(position.0, position.1, size.0, size.1)
    }

    /// Builds a rect of `size` whose center is `center`.
    pub fn centered_at(center: Point, size: (u32, u32)) -> Self {
        Self::new(
            center.0 - (size.0 / 2) as i32,
            center.1 - (size.1 / 2) as i32,
            size.0,
            size.1,
        )
    }

    //--- Accessors --------------------------------------------------------

    pub const fn position(&self) -> Point {
        (self.x, self.y)
    }

    pub const fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn center(&self) -> Point {
        (self.x + (self.w / 2) as i32, self.y + (self.h / 2) as i32)
    }

    //--- Queries ----------------------------------------------------------

    /// Returns true iff `point` lies within `[x, x+w) × [y, y+h)`.
    ///
    /// Zero-area rects contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = point;
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    //--- Transformations --------------------------------------------------

    /// Grows (or shrinks, for negative deltas) the rect around its center.
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        let w = (self.w as i32 + dw).max(0) as u32;
        let h = (self.h as i32 + dh).max(0) as u32;
        Self::new(self.x - dw / 2, self.y - dh / 2, w, h)
    }

    /// Returns a copy moved so its top-left corner is `position`.
    pub fn moved_to(&self, position: Point) -> Self {
        Self::new(position.0, position.1, self.w, self.h)
    }
}

//=== Color ===============================================================

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the colour as `0x00RRGGBB`, the layout the framebuffer uses.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
