use image::{Rgba as Pixel, RgbaImage};
use resvg::tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};
use resvg::usvg::Tree;

use super::Rgba;
use crate::error::IconError;

/// Square drawing surface initialised to a solid background.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a `size` x `size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgba) -> Result<Canvas, IconError> {
        let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize(size))?;
        let [r, g, b, a] = background;
        pixmap.fill(Color::from_rgba8(r, g, b, a));
        Ok(Canvas { pixmap })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fill an anti-aliased circle. Degenerate radii draw nothing.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            return;
        };
        let paint = paint(color, true);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Fill a pixel-aligned rectangle without anti-aliasing.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let paint = paint(color, false);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Composite an already laid-out vector tree at its own coordinates.
    pub fn draw_tree(&mut self, tree: &Tree) {
        resvg::render(tree, Transform::identity(), &mut self.pixmap.as_mut());
    }

    /// Pixel box `(left, top, right, bottom)` of every pixel whose alpha is at
    /// least `min_alpha`. Right and bottom are exclusive.
    pub fn coverage_box(&self, min_alpha: u8) -> Option<(u32, u32, u32, u32)> {
        let size = self.pixmap.width();
        let mut extent: Option<(u32, u32, u32, u32)> = None;
        for (i, pixel) in self.pixmap.pixels().iter().enumerate() {
            if pixel.alpha() < min_alpha {
                continue;
            }
            let (x, y) = (i as u32 % size, i as u32 / size);
            extent = Some(match extent {
                None => (x, y, x + 1, y + 1),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
            });
        }
        extent
    }

    /// Convert to a straight-alpha RGBA image.
    pub fn into_image(self) -> RgbaImage {
        let size = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(size, size, |x, y| {
            let c = pixels[(y * size + x) as usize].demultiply();
            Pixel([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }
}

fn paint(color: Rgba, anti_alias: bool) -> Paint<'static> {
    let [r, g, b, a] = color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = anti_alias;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgba = [34, 197, 94, 255];
    const WHITE: Rgba = [255, 255, 255, 255];

    #[test]
    fn new_canvas_has_requested_size() {
        let canvas = Canvas::new(48, GREEN).unwrap();
        let image = canvas.into_image();

        assert_eq!(image.dimensions(), (48, 48));
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = Canvas::new(0, GREEN);

        assert!(matches!(result, Err(IconError::InvalidSize(0))));
    }

    #[test]
    fn background_is_exact() {
        let image = Canvas::new(16, GREEN).unwrap().into_image();

        assert!(image.pixels().all(|p| p.0 == GREEN));
    }

    #[test]
    fn circle_covers_centre_but_not_corner() {
        let mut canvas = Canvas::new(64, GREEN).unwrap();
        canvas.fill_circle(32.0, 32.0, 20.0, WHITE);
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(32, 32).0, WHITE);
        assert_eq!(image.get_pixel(0, 0).0, GREEN);
    }

    #[test]
    fn coverage_box_spans_drawn_pixels() {
        let mut canvas = Canvas::new(16, [0, 0, 0, 0]).unwrap();
        canvas.fill_rect(3.0, 5.0, 4.0, 2.0, WHITE);

        assert_eq!(canvas.coverage_box(128), Some((3, 5, 7, 7)));
    }

    #[test]
    fn coverage_box_of_blank_canvas_is_none() {
        let canvas = Canvas::new(16, [0, 0, 0, 0]).unwrap();

        assert_eq!(canvas.coverage_box(1), None);
    }

    #[test]
    fn rect_is_pixel_exact() {
        let mut canvas = Canvas::new(8, GREEN).unwrap();
        canvas.fill_rect(2.0, 2.0, 2.0, 2.0, WHITE);
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(2, 2).0, WHITE);
        assert_eq!(image.get_pixel(3, 3).0, WHITE);
        assert_eq!(image.get_pixel(4, 4).0, GREEN);
        assert_eq!(image.get_pixel(1, 1).0, GREEN);
    }
}
