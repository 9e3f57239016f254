//! Label measurement and centering.

use resvg::usvg::Tree;

use super::font::{FontBook, FontChoice};
use super::{Canvas, Rgba, bitmap, hex, opacity};
use crate::error::IconError;

/// Ink box of a label, relative to its drawing origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// Origin that centres `bounds` on a `size` canvas, lifted by `nudge` pixels.
///
/// The nudge compensates for the visual weight of descender space below the
/// baseline and is purely cosmetic.
pub fn centre(bounds: &TextBounds, size: u32, nudge: f32) -> (f32, f32) {
    let size = size as f32;
    let x = (size - bounds.width()) / 2.0 - bounds.left;
    let y = (size - bounds.height()) / 2.0 - nudge - bounds.top;
    (x, y)
}

/// Minimum alpha for a pixel to count as part of a glyph.
pub const INK_ALPHA: u8 = 128;

/// Measure the ink of `label` set in `family` at `px`, relative to the
/// baseline origin.
///
/// The label is rasterised on a scratch canvas and the covered pixels are
/// scanned, so the box follows the glyph outlines rather than the advance
/// and ascent/descent of the layout. Bounds are whole pixels.
///
/// Returns `None` when nothing would be drawn, e.g. the family did not
/// resolve or has no outlines for the label.
pub fn measure(
    book: &FontBook,
    family: &str,
    label: &str,
    px: f32,
) -> Result<Option<TextBounds>, IconError> {
    let em = (px.ceil() as u32).max(1);
    let chars = label.chars().count().max(1) as u32;
    let width = em * (chars + 2);
    let height = em * 3;
    let origin = (em, em * 2);

    let tree = layout(
        book,
        family,
        label,
        px,
        [0, 0, 0, 255],
        (origin.0 as f32, origin.1 as f32),
        width.max(height),
    )?;
    if !tree.root().has_children() {
        return Ok(None);
    }

    let mut scratch = Canvas::new(width.max(height), [0, 0, 0, 0])?;
    scratch.draw_tree(&tree);
    let bounds = scratch.coverage_box(INK_ALPHA).map(|(l, t, r, b)| TextBounds {
        left: l as f32 - origin.0 as f32,
        top: t as f32 - origin.1 as f32,
        right: r as f32 - origin.0 as f32,
        bottom: b as f32 - origin.1 as f32,
    });
    Ok(bounds.filter(|b| !b.is_empty()))
}

/// Draw `label` centred on `canvas`, returning the font that actually drew it.
///
/// A system family that measures empty falls through to the bitmap font.
pub fn draw_label(
    canvas: &mut Canvas,
    book: &FontBook,
    choice: &FontChoice,
    label: &str,
    px: f32,
    color: Rgba,
    nudge: f32,
) -> Result<FontChoice, IconError> {
    let size = canvas.size();

    if let FontChoice::System(family) = choice {
        if let Some(bounds) = measure(book, family, label, px)? {
            // Whole-pixel origin keeps the rasterised ink identical to the measured box
            let (x, y) = centre(&bounds, size, nudge);
            let tree = layout(book, family, label, px, color, (x.round(), y.round()), size)?;
            canvas.draw_tree(&tree);
            return Ok(choice.clone());
        }
    }

    let scale = bitmap::scale_for(px);
    let bounds = bitmap::bounds(label, scale);
    let (x, y) = centre(&bounds, size, nudge);
    bitmap::draw(canvas, label, scale, (x.round(), y.round()), color);
    Ok(FontChoice::Builtin)
}

fn layout(
    book: &FontBook,
    family: &str,
    label: &str,
    px: f32,
    color: Rgba,
    origin: (f32, f32),
    viewport: u32,
) -> Result<Tree, IconError> {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{px}" "#,
            r#"fill="{fill}" fill-opacity="{alpha}">{label}</text></svg>"#
        ),
        size = viewport,
        x = origin.0,
        y = origin.1,
        family = escape(&css_quote(family)),
        px = px,
        fill = hex(color),
        alpha = opacity(color),
        label = escape(label),
    );

    Tree::from_str(&svg, book.options()).map_err(|e| IconError::Layout(e.to_string()))
}

/// Quote a family name as a CSS string, picking a quote it does not contain.
/// A name holding both quote characters loses its double quotes.
fn css_quote(family: &str) -> String {
    if !family.contains('\'') {
        format!("'{}'", family)
    } else if !family.contains('"') {
        format!("\"{}\"", family)
    } else {
        format!("\"{}\"", family.replace('"', ""))
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
