//! Drawing surface backed by a tiny-skia pixmap.
//!
//! [`Canvas`] exposes the handful of primitives the icon needs (gradient
//! rows, rounded rectangles, line strokes, pixmap blits) and converts the
//! premultiplied pixmap into a straight-alpha [`IconImage`] when done.
//!
//! Shapes replace the pixels they cover, alpha included, so a translucent
//! shape leaves a translucent hole in the image. Only text and blitted
//! pixmaps are blended source-over.

use image::{Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{
    self, BlendMode, FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect,
    Stroke, Transform,
};

use crate::error::{IconError, IconResult};
use crate::icon::{IconImage, RectPx};
use crate::layout::LineSegment;

/// 8-bit sRGB color with straight alpha.
pub type Color = Srgba<u8>;

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Canvas
// ============================================================================

/// A mutable RGBA drawing surface.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a fully transparent canvas.
    ///
    /// Fails with [`IconError::ImagingUnavailable`] if the surface cannot be
    /// allocated (zero or oversized dimensions).
    pub fn new(width: u32, height: u32) -> IconResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            IconError::imaging_unavailable(format!(
                "cannot allocate a {width}x{height} drawing surface"
            ))
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills the canvas with horizontal bands interpolating from `top` to `bottom`.
    ///
    /// Row `y` gets `top + (bottom - top) * y / height` per channel, truncated.
    pub fn fill_vertical_gradient(&mut self, top: Color, bottom: Color) {
        let width = self.width() as f32;
        let height = self.height();

        for y in 0..height {
            let t = y as f32 / height as f32;
            let color = lerp_color(top, bottom, t);
            let Some(row) = Rect::from_xywh(0.0, y as f32, width, 1.0) else {
                continue;
            };
            let paint = solid_paint(color, false, BlendMode::Source);
            self.pixmap.fill_rect(row, &paint, Transform::identity(), None);
        }
    }

    /// Blends an axis-aligned rectangle over the canvas without anti-aliasing.
    pub fn fill_rect(&mut self, rect: RectPx, color: Color) {
        let Some(rect) = Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        ) else {
            return;
        };
        let paint = solid_paint(color, false, BlendMode::SourceOver);
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Fills a rectangle whose corners are circular arcs of `radius`.
    ///
    /// The radius is clamped to half of the rectangle's smaller side. Covered
    /// pixels are replaced; anti-aliased corner pixels mix the old and new
    /// values by coverage.
    pub fn fill_rounded_rect(&mut self, rect: RectPx, radius: f32, color: Color) {
        let Some(path) = rounded_rect_path(rect, radius) else {
            return;
        };
        let paint = solid_paint(color, true, BlendMode::Source);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Strokes a straight segment with butt caps, replacing covered pixels.
    ///
    /// Both end pixels are covered fully: the stroke runs through the pixel
    /// centers and extends half a pixel past each end.
    pub fn stroke_line(&mut self, line: LineSegment, width: f32, color: Color) {
        let (x0, y0) = (line.start.0 as f32 + 0.5, line.start.1 as f32 + 0.5);
        let (x1, y1) = (line.end.0 as f32 + 0.5, line.end.1 as f32 + 0.5);
        let len = (x1 - x0).hypot(y1 - y0);
        let (ux, uy) = if len > 0.0 {
            ((x1 - x0) / len * 0.5, (y1 - y0) / len * 0.5)
        } else {
            (0.5, 0.0)
        };

        let mut pb = PathBuilder::new();
        pb.move_to(x0 - ux, y0 - uy);
        pb.line_to(x1 + ux, y1 + uy);
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        let paint = solid_paint(color, true, BlendMode::Source);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Composites `src` over the canvas with its top-left corner at `(x, y)`.
    pub fn draw_pixmap(&mut self, x: i32, y: i32, src: &Pixmap) {
        self.pixmap.draw_pixmap(
            x,
            y,
            src.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Reads back a single pixel as straight RGBA.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let p = self.pixmap.pixel(x, y)?;
        let (r, g, b, a) = unpremultiply(p.red(), p.green(), p.blue(), p.alpha());
        Some(Rgba([r, g, b, a]))
    }

    /// Consumes the canvas and returns its contents as an [`IconImage`].
    pub fn into_image(self) -> IconImage {
        IconImage::new(pixmap_to_rgba_image(&self.pixmap))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Builds a closed rounded-rectangle path, or `None` for an empty rectangle.
pub(crate) fn rounded_rect_path(rect: RectPx, radius: f32) -> Option<Path> {
    if rect.width == 0 || rect.height == 0 {
        return None;
    }

    let x = rect.x as f32;
    let y = rect.y as f32;
    let w = rect.width as f32;
    let h = rect.height as f32;
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

fn solid_paint(color: Color, anti_alias: bool, blend_mode: BlendMode) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(tiny_skia::Color::from_rgba8(
        color.red,
        color.green,
        color.blue,
        color.alpha,
    ));
    paint.anti_alias = anti_alias;
    paint.blend_mode = blend_mode;
    paint
}

/// Interpolates each channel linearly, truncating toward zero.
pub(crate) fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let channel = |a: u8, b: u8| -> u8 {
        let v = a as f32 + (b as f32 - a as f32) * t;
        v.clamp(0.0, 255.0) as u8
    };
    Srgba::new(
        channel(from.red, to.red),
        channel(from.green, to.green),
        channel(from.blue, to.blue),
        channel(from.alpha, to.alpha),
    )
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub(crate) fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (src, dst) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
        *dst = Rgba([r, g, b, a]);
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
