//! Drawing commands applied in order to a [`Canvas`].

use crate::canvas::{Canvas, Color};
use crate::icon::RectPx;
use crate::layout::LineSegment;
use crate::text::LabelFont;

/// A single paint operation.
///
/// Commands are ephemeral: the renderer builds a list, applies it front to
/// back, and drops it. Later commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Horizontal bands interpolating from `top` to `bottom` over the full canvas.
    VerticalGradient { top: Color, bottom: Color },

    /// A filled rounded rectangle.
    RoundedRect {
        rect: RectPx,
        radius: f32,
        fill: Color,
    },

    /// A stroked straight segment.
    Line {
        segment: LineSegment,
        width: f32,
        color: Color,
    },

    /// Text centered inside `bounds`.
    Label {
        bounds: RectPx,
        text: String,
        font_size: f32,
        fill: Color,
    },
}

impl DrawCommand {
    /// Paints this command onto `canvas`.
    ///
    /// For [`DrawCommand::Label`] returns the inked rectangle.
    pub fn apply(&self, canvas: &mut Canvas, font: &LabelFont) -> Option<RectPx> {
        match self {
            Self::VerticalGradient { top, bottom } => {
                canvas.fill_vertical_gradient(*top, *bottom);
                None
            }
            Self::RoundedRect { rect, radius, fill } => {
                canvas.fill_rounded_rect(*rect, *radius, *fill);
                None
            }
            Self::Line {
                segment,
                width,
                color,
            } => {
                canvas.stroke_line(*segment, *width, *color);
                None
            }
            Self::Label {
                bounds,
                text,
                font_size,
                fill,
            } => font.draw(canvas, text, *bounds, *font_size, *fill),
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VerticalGradient { .. } => "gradient",
            Self::RoundedRect { .. } => "rounded-rect",
            Self::Line { .. } => "line",
            Self::Label { .. } => "label",
        }
    }
}
