//! Raster drawing primitives for icon rendering.
//!
//! Icons are drawn onto a tiny-skia [`Canvas`]. Labels go through the system
//! font database when a candidate family is installed and fall back to a
//! built-in 8x8 bitmap font otherwise.

pub mod bitmap;
pub mod canvas;
pub mod font;
pub mod text;

pub use canvas::Canvas;
pub use font::{FontBook, FontChoice};
pub use text::TextBounds;

/// Straight (non-premultiplied) 8-bit RGBA colour.
pub type Rgba = [u8; 4];

/// Format the colour channels as `#rrggbb` for use in SVG attributes.
pub fn hex(color: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

/// Alpha channel as an SVG opacity in `0.0..=1.0`.
pub fn opacity(color: Rgba) -> f32 {
    color[3] as f32 / 255.0
}
