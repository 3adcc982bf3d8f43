//! Label text rendering with best-effort font lookup.
//!
//! [`LabelFont::discover`] searches the system fonts through fontdb. When a
//! face is found, labels are rasterized by resvg from a small SVG `<text>`
//! document; otherwise (or if that rasterization produces no ink) the
//! built-in bitmap font in [`builtin`] draws them. Font trouble never fails
//! a render.

pub mod builtin;

use std::sync::Arc;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use tracing::debug;

use crate::canvas::{Canvas, Color};
use crate::icon::RectPx;

/// Families tried in order before falling back to the generic sans-serif.
const PREFERRED_FAMILIES: &str =
    "Helvetica, Arial, 'Liberation Sans', 'DejaVu Sans', sans-serif";

// ============================================================================
// LabelFont
// ============================================================================

/// The font used to draw badge labels.
#[derive(Clone)]
pub enum LabelFont {
    /// Scalable system fonts, rendered through resvg.
    System(Arc<fontdb::Database>),

    /// The built-in 5x7 bitmap font.
    Builtin,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System(db) => f
                .debug_tuple("System")
                .field(&format_args!("{} faces", db.faces().count()))
                .finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::discover()
    }
}

impl LabelFont {
    /// Loads the system fonts, falling back to the built-in font if none exist.
    pub fn discover() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::from_database(db)
    }

    /// Wraps an already populated font database.
    ///
    /// An empty database yields [`LabelFont::Builtin`].
    pub fn from_database(db: fontdb::Database) -> Self {
        let faces = db.faces().count();
        if faces == 0 {
            debug!("no system fonts found, using built-in bitmap font");
            return Self::Builtin;
        }
        debug!(faces, "using system fonts for labels");
        Self::System(Arc::new(db))
    }

    /// Returns true for the built-in bitmap font.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Draws `text` centered in `bounds` and returns the inked rectangle.
    ///
    /// Returns `None` only for text with no visible glyphs.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        bounds: RectPx,
        font_size: f32,
        color: Color,
    ) -> Option<RectPx> {
        if let Self::System(db) = self {
            if let Some(label) = rasterize_with_fonts(db, text, bounds, font_size, color) {
                return Some(label.draw_centered(canvas, bounds));
            }
            debug!(text, "system font produced no ink, using built-in bitmap font");
        }
        draw_builtin(canvas, text, bounds, font_size, color)
    }
}

// ============================================================================
// System font path
// ============================================================================

/// A rasterized label and the bounding box of its non-transparent pixels.
struct RasterLabel {
    pixmap: Pixmap,
    ink: RectPx,
}

impl RasterLabel {
    /// Composites the label so its ink box is centered in `bounds`.
    fn draw_centered(&self, canvas: &mut Canvas, bounds: RectPx) -> RectPx {
        let target = RectPx::centered_in(bounds, self.ink.width, self.ink.height);
        let x = target.x as i32 - self.ink.x as i32;
        let y = target.y as i32 - self.ink.y as i32;
        canvas.draw_pixmap(x, y, &self.pixmap);
        target
    }
}

fn rasterize_with_fonts(
    db: &Arc<fontdb::Database>,
    text: &str,
    bounds: RectPx,
    font_size: f32,
    color: Color,
) -> Option<RasterLabel> {
    // Scratch area twice the target box so long labels are not clipped
    // before they are measured.
    let width = bounds.width.max(1) * 2;
    let height = bounds.height.max(1) * 2;
    let svg = label_svg(text, width, height, font_size, color);

    let opts = usvg::Options {
        fontdb: Arc::clone(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).ok()?;

    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    let ink = ink_bounds(&pixmap)?;
    Some(RasterLabel { pixmap, ink })
}

fn label_svg(text: &str, width: u32, height: u32, font_size: f32, color: Color) -> String {
    let fill = format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue);
    let opacity = color.alpha as f32 / 255.0;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#,
            r#"<text x="{x}" y="{y}" font-family="{families}" font-size="{font_size}" "#,
            r#"fill="{fill}" fill-opacity="{opacity}" text-anchor="middle">{text}</text>"#,
            "</svg>",
        ),
        width = width,
        height = height,
        x = width / 2,
        y = height / 2,
        families = PREFERRED_FAMILIES,
        font_size = font_size,
        fill = fill,
        opacity = opacity,
        text = escape_xml(text),
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Returns the bounding box of all pixels with non-zero alpha.
fn ink_bounds(pixmap: &Pixmap) -> Option<RectPx> {
    let width = pixmap.width();
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        if pixel.alpha() == 0 {
            continue;
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if min_x == u32::MAX {
        return None;
    }
    Some(RectPx::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

// ============================================================================
// Built-in font path
// ============================================================================

fn draw_builtin(
    canvas: &mut Canvas,
    text: &str,
    bounds: RectPx,
    font_size: f32,
    color: Color,
) -> Option<RectPx> {
    if !text.chars().any(|c| builtin::glyph(c).is_some_and(|g| g != [0; 7])) {
        return None;
    }

    let scale = builtin::cell_scale(font_size);
    let size = builtin::measure(text, scale);
    let target = RectPx::centered_in(bounds, size.width, size.height);
    builtin::draw(canvas, text, target.x, target.y, scale, color);
    Some(target)
}

// ============================================================================
// Tests
// ============================================================================
