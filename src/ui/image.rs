//=========================================================================
// Image
//=========================================================================

use ::image::imageops::{self, FilterType};

use crate::render::{Bitmap, Canvas, Rect};

use super::{Component, ComponentBase};

/// Bitmap drawn at its rect's top-left corner.
///
/// The source bitmap is kept so repeated rescales don't compound
/// resampling error.
#[derive(Debug)]
pub struct Image {
    base: ComponentBase,
    source: Bitmap,
    bitmap: Bitmap,
}

impl Image {
    /// Creates an image scaled to the size of `base.rect`.
    pub fn new(base: ComponentBase, source: Bitmap) -> Self {
        let size = base.rect.size();
        let bitmap = scaled(&source, size);
        Self {
            base,
            source,
            bitmap,
        }
    }

    /// Resamples to `size` and recenters the rect on its previous center.
    pub fn rescale(&mut self, size: (u32, u32)) {
        self.bitmap = scaled(&self.source, size);
        self.base.rect = Rect::centered_at(self.base.rect.center(), size);
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

impl Component for Image {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.blit(&self.bitmap, self.base.rect.x, self.base.rect.y);
    }
}

fn scaled(source: &Bitmap, (w, h): (u32, u32)) -> Bitmap {
    if source.dimensions() == (w, h) || w == 0 || h == 0 {
        return source.clone();
    }
    imageops::resize(source, w, h, FilterType::Nearest)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn image() -> Image {
        Image::new(
            ComponentBase::new("earth", "intro", Rect::new(100, 100, 40, 40), Color::WHITE),
            Bitmap::new(20, 20),
        )
    }

    #[test]
    fn new_scales_to_rect() {
        assert_eq!(image().bitmap().dimensions(), (40, 40));
    }

    #[test]
    fn rescale_keeps_center() {
        let mut image = image();
        let center = image.base().rect.center();

        image.rescale((80, 60));

        assert_eq!(image.bitmap().dimensions(), (80, 60));
        assert_eq!(image.base().rect, Rect::new(80, 90, 80, 60));
        assert_eq!(image.base().rect.center(), center);
    }
}
