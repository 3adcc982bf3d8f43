//! The book icon renderer.

use palette::Srgba;
use tracing::{debug, instrument};

use crate::canvas::{Canvas, Color};
use crate::error::IconResult;
use crate::icon::{IconImage, RectPx};
use crate::layout::{
    BADGE_CORNER_RADIUS, BOOK_CORNER_RADIUS, CANVAS_SIZE, IconLayout, LABEL_FONT_SIZE,
    PAGE_LINE_WIDTH,
};
use crate::primitive::DrawCommand;
use crate::text::LabelFont;

/// Text drawn on the badge.
pub const BADGE_LABEL: &str = "PDF";

// ============================================================================
// IconSource Trait
// ============================================================================

/// Anything that can produce the master icon image.
///
/// The exporter is written against this trait so alternative sources
/// (including ones that report [`IconError::ImagingUnavailable`]) can be
/// plugged in.
///
/// [`IconError::ImagingUnavailable`]: crate::IconError::ImagingUnavailable
pub trait IconSource {
    /// Renders the master image.
    fn render(&self) -> IconResult<IconImage>;
}

// ============================================================================
// IconStyle
// ============================================================================

/// Colors used by the book icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Background color of the first row.
    pub gradient_top: Color,
    /// Background color the gradient approaches at the last row.
    pub gradient_bottom: Color,
    pub shadow: Color,
    pub cover: Color,
    pub spine: Color,
    pub page_line: Color,
    pub badge: Color,
    pub label: Color,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            gradient_top: Srgba::new(100, 150, 255, 255),
            gradient_bottom: Srgba::new(155, 200, 200, 255),
            shadow: Srgba::new(0, 0, 0, 60),
            cover: Srgba::new(255, 255, 255, 240),
            spine: Srgba::new(200, 200, 200, 255),
            page_line: Srgba::new(150, 150, 150, 200),
            badge: Srgba::new(220, 53, 69, 255),
            label: Srgba::new(255, 255, 255, 255),
        }
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Result of a render with the geometry needed to inspect it.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub image: IconImage,
    pub layout: IconLayout,
    /// Where the badge label ended up, if any glyphs were drawn.
    pub label_bounds: Option<RectPx>,
}

/// Renders the book-with-badge application icon.
///
/// Rendering is deterministic: the same renderer always produces the same
/// pixels. The only host dependency is the label font, which is looked up
/// once at construction.
///
/// # Example
///
/// ```no_run
/// use app_icon_renderer::{IconRenderer, IconSource};
///
/// let icon = IconRenderer::new().render().unwrap();
/// assert_eq!(icon.data.width(), 512);
/// ```
#[derive(Debug, Clone)]
pub struct IconRenderer {
    size: u32,
    style: IconStyle,
    font: LabelFont,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer {
    /// Creates a 512x512 renderer using the best available system font.
    pub fn new() -> Self {
        Self::with_font(LabelFont::discover())
    }

    /// Creates a 512x512 renderer with an explicit label font.
    pub fn with_font(font: LabelFont) -> Self {
        Self {
            size: CANVAS_SIZE,
            style: IconStyle::default(),
            font,
        }
    }

    /// Returns the layout this renderer paints into.
    pub fn layout(&self) -> IconLayout {
        IconLayout::for_size(self.size)
    }

    /// Returns the full paint list, back to front.
    pub fn commands(&self) -> Vec<DrawCommand> {
        let layout = self.layout();
        let style = &self.style;

        let mut commands = vec![
            DrawCommand::VerticalGradient {
                top: style.gradient_top,
                bottom: style.gradient_bottom,
            },
            DrawCommand::RoundedRect {
                rect: layout.shadow,
                radius: BOOK_CORNER_RADIUS,
                fill: style.shadow,
            },
            DrawCommand::RoundedRect {
                rect: layout.book,
                radius: BOOK_CORNER_RADIUS,
                fill: style.cover,
            },
            DrawCommand::RoundedRect {
                rect: layout.spine,
                radius: BOOK_CORNER_RADIUS,
                fill: style.spine,
            },
        ];

        commands.extend(layout.page_lines.iter().map(|&segment| DrawCommand::Line {
            segment,
            width: PAGE_LINE_WIDTH,
            color: style.page_line,
        }));

        commands.push(DrawCommand::RoundedRect {
            rect: layout.badge,
            radius: BADGE_CORNER_RADIUS,
            fill: style.badge,
        });
        commands.push(DrawCommand::Label {
            bounds: layout.badge,
            text: BADGE_LABEL.to_string(),
            font_size: LABEL_FONT_SIZE,
            fill: style.label,
        });

        commands
    }

    /// Renders the icon and reports where the label landed.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn render_detailed(&self) -> IconResult<RenderedIcon> {
        let mut canvas = Canvas::new(self.size, self.size)?;
        let mut label_bounds = None;

        for command in self.commands() {
            debug!(kind = command.kind(), "paint");
            if let Some(ink) = command.apply(&mut canvas, &self.font) {
                label_bounds = Some(ink);
            }
        }

        Ok(RenderedIcon {
            image: canvas.into_image(),
            layout: self.layout(),
            label_bounds,
        })
    }
}

impl IconSource for IconRenderer {
    fn render(&self) -> IconResult<IconImage> {
        Ok(self.render_detailed()?.image)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::SizePx;

    fn builtin_render() -> RenderedIcon {
        IconRenderer::with_font(LabelFont::Builtin)
            .render_detailed()
            .unwrap()
    }

    #[test]
    fn master_is_512_rgba() {
        let rendered = builtin_render();
        assert_eq!(rendered.image.dimensions(), SizePx::square(512));
        assert_eq!(rendered.image.data.as_raw().len(), 512 * 512 * 4);
    }

    #[test]
    fn paint_order_is_back_to_front() {
        let kinds: Vec<_> = IconRenderer::with_font(LabelFont::Builtin)
            .commands()
            .iter()
            .map(DrawCommand::kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                "gradient",
                "rounded-rect",
                "rounded-rect",
                "rounded-rect",
                "line",
                "line",
                "line",
                "line",
                "line",
                "rounded-rect",
                "label",
            ]
        );
    }

    #[test]
    fn gradient_is_monotonic_outside_the_book() {
        let rendered = builtin_render();
        let img = &rendered.image.data;

        // Column 10 never touches the book or its shadow
        let mut prev = *img.get_pixel(10, 0);
        assert_eq!(prev.0, [100, 150, 255, 255]);
        for y in 1..img.height() {
            let p = *img.get_pixel(10, y);
            assert!(p[0] >= prev[0], "red decreased at row {y}");
            assert!(p[1] >= prev[1], "green decreased at row {y}");
            assert!(p[2] <= prev[2], "blue increased at row {y}");
            assert_eq!(p[3], 255);
            prev = p;
        }
        assert_eq!(img.get_pixel(10, 511).0, [154, 199, 200, 255]);
    }

    #[test]
    fn gradient_rows_are_flat() {
        let rendered = builtin_render();
        let img = &rendered.image.data;
        // Row 20 lies above the book, so every column shares one color
        let first = img.get_pixel(0, 20);
        assert!((0..512).all(|x| img.get_pixel(x, 20) == first));
    }

    #[test]
    fn badge_interior_matches_fill() {
        let rendered = builtin_render();
        let img = &rendered.image.data;
        let badge = rendered.layout.badge;
        let label = rendered.label_bounds.expect("label drawn");

        // Skip the rounded corners by staying one radius away from the edges
        let radius = BADGE_CORNER_RADIUS as u32;
        for y in badge.y..badge.bottom() {
            for x in badge.x..badge.right() {
                let in_corner = (x < badge.x + radius || x >= badge.right() - radius)
                    && (y < badge.y + radius || y >= badge.bottom() - radius);
                if in_corner || label.contains(x, y) {
                    continue;
                }
                assert_eq!(img.get_pixel(x, y).0, [220, 53, 69, 255], "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn label_is_present_and_centered() {
        let rendered = builtin_render();
        let badge = rendered.layout.badge;
        let label = rendered.label_bounds.unwrap();

        assert_eq!(label, RectPx::new(320, 115, 51, 21));
        // Odd leftovers go to the right
        assert!((label.x - badge.x).abs_diff(badge.right() - label.right()) <= 1);

        let white = (label.y..label.bottom())
            .flat_map(|y| (label.x..label.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| rendered.image.data.get_pixel(x, y).0 == [255, 255, 255, 255])
            .count();
        assert!(white > 0);
    }

    #[test]
    fn translucent_layers_replace_what_is_beneath() {
        let rendered = builtin_render();
        let img = &rendered.image.data;
        let layout = &rendered.layout;

        // Spine, mid-height
        let spine_mid = img.get_pixel(layout.spine.x + 10, layout.spine.y + 190);
        assert_eq!(spine_mid.0, [200, 200, 200, 255]);

        // Cover, between page lines, keeps its own alpha
        let cover = img.get_pixel(layout.book.x + 100, layout.book.y + 100);
        assert_eq!(cover.0, [255, 255, 255, 240]);

        // Page line center row
        let line = layout.page_lines[0];
        let on_line = img.get_pixel(line.start.0 + 20, line.start.1);
        assert_eq!(on_line.0, [150, 150, 150, 200]);

        // Shadow strip past the book's right edge
        let shadow = img.get_pixel(layout.book.right() + 4, layout.book.y + 200);
        assert_eq!(shadow.0, [0, 0, 0, 60]);

        // Background outside the book stays opaque
        assert_eq!(img.get_pixel(5, layout.book.y + 200)[3], 255);
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = IconRenderer::with_font(LabelFont::Builtin);
        let a = renderer.render().unwrap();
        let b = renderer.render().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn system_font_render_keeps_badge_label() {
        let rendered = IconRenderer::new().render_detailed().unwrap();
        let label = rendered.label_bounds.expect("label drawn");
        assert!(label.x >= rendered.layout.badge.x);
        assert!(label.right() <= rendered.layout.badge.right());
    }
}
