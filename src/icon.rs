//! Icon styles and the single-icon renderer.

use std::fmt;

use image::RgbaImage;

use crate::error::IconError;
use crate::render::text::draw_label;
use crate::render::{Canvas, FontBook, FontChoice, Rgba};

/// Visual parameters for one icon set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub background: Rgba,
    /// Filled circle drawn behind the label
    pub accent: Option<Rgba>,
    pub text: Rgba,
    pub label: &'static str,
    /// Font pixel size as a fraction of the icon size
    pub font_scale: f32,
    /// Accent circle radius as a fraction of the icon size
    pub accent_scale: f32,
    /// Upward shift of the centred label, in pixels
    pub nudge: f32,
}

/// Green square with a white "P".
pub const PRIMARY: IconStyle = IconStyle {
    background: [34, 197, 94, 255],
    accent: None,
    text: [255, 255, 255, 255],
    label: "P",
    font_scale: 0.65,
    accent_scale: 0.42,
    nudge: 4.0,
};

/// Slate square, green disc, white "J".
pub const ALTERNATE: IconStyle = IconStyle {
    background: [15, 23, 42, 255],
    accent: Some([34, 197, 94, 255]),
    text: [255, 255, 255, 255],
    label: "J",
    font_scale: 0.5,
    accent_scale: 0.42,
    nudge: 4.0,
};

/// Compiled-in icon sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Alternate,
}

impl Variant {
    pub fn style(self) -> &'static IconStyle {
        match self {
            Variant::Primary => &PRIMARY,
            Variant::Alternate => &ALTERNATE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Alternate => "alternate",
        }
    }

    /// Parse a variant name (case-insensitive).
    pub fn parse(name: &str) -> Option<Variant> {
        match name.to_lowercase().as_str() {
            "primary" | "default" => Some(Variant::Primary),
            "alternate" | "alt" => Some(Variant::Alternate),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A rendered icon and the font its label was drawn with.
pub struct Icon {
    pub image: RgbaImage,
    /// `None` for label-less swatches
    pub font: Option<FontChoice>,
}

/// Render a `size` x `size` icon in `style`.
///
/// `choice` is the font picked by [`FontBook::resolve`]; it may still fall
/// through to the built-in font if it draws nothing for the label.
pub fn draw_icon(
    book: &FontBook,
    choice: &FontChoice,
    style: &IconStyle,
    size: u32,
    with_label: bool,
) -> Result<Icon, IconError> {
    let mut canvas = Canvas::new(size, style.background)?;
    let centre = size as f32 / 2.0;

    if let Some(accent) = style.accent {
        canvas.fill_circle(centre, centre, size as f32 * style.accent_scale, accent);
    }

    let font = if with_label {
        let px = (size as f32 * style.font_scale).floor();
        Some(draw_label(
            &mut canvas,
            book,
            choice,
            style.label,
            px,
            style.text,
            style.nudge,
        )?)
    } else {
        None
    };

    Ok(Icon {
        image: canvas.into_image(),
        font,
    })
}
