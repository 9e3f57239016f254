//! Built-in 8x8 bitmap font, always available.
//!
//! Glyphs come from the font8x8 basic Latin table and are scaled by an
//! integer factor. Characters outside the table draw as a filled box.

use font8x8::{BASIC_FONTS, UnicodeFonts};

use super::text::TextBounds;
use super::{Canvas, Rgba};

/// Glyph cell edge in unscaled pixels.
pub const CELL: u32 = 8;

const MISSING: [u8; 8] = [0x00, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x00];

/// Row bitmaps for `c`; bit `x` of each row is column `x`.
pub fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS.get(c).unwrap_or(MISSING)
}

/// Integer scale that brings the cell closest to `px` without exceeding it.
pub fn scale_for(px: f32) -> u32 {
    ((px / CELL as f32).floor() as u32).max(1)
}

/// Every lit cell of `label` as `(column, row)` in unscaled pixels.
fn lit_cells(label: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    label.chars().enumerate().flat_map(|(i, c)| {
        let rows = glyph(c);
        (0..CELL).flat_map(move |y| {
            let row = rows[y as usize];
            (0..CELL)
                .filter(move |&x| row & (1u8 << x) != 0)
                .map(move |x| (i as u32 * CELL + x, y))
        })
    })
}

/// Ink bounds of `label` drawn at the origin with `scale`.
pub fn bounds(label: &str, scale: u32) -> TextBounds {
    let mut extent: Option<(u32, u32, u32, u32)> = None;
    for (x, y) in lit_cells(label) {
        extent = Some(match extent {
            None => (x, y, x + 1, y + 1),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
        });
    }

    let (l, t, r, b) = extent.unwrap_or_default();
    let s = scale as f32;
    TextBounds {
        left: l as f32 * s,
        top: t as f32 * s,
        right: r as f32 * s,
        bottom: b as f32 * s,
    }
}

/// Draw `label` with its cell origin at `origin`.
pub fn draw(canvas: &mut Canvas, label: &str, scale: u32, origin: (f32, f32), color: Rgba) {
    let s = scale as f32;
    for (x, y) in lit_cells(label) {
        canvas.fill_rect(origin.0 + x as f32 * s, origin.1 + y as f32 * s, s, s, color);
    }
}
