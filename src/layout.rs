//! Geometry of the book icon.
//!
//! Every region the renderer paints is derived here from the canvas size, so
//! the drawing code and the tests agree on where things are.

use crate::icon::RectPx;

/// Side of the square master image in pixels.
pub const CANVAS_SIZE: u32 = 512;

pub const BOOK_WIDTH: u32 = 300;
pub const BOOK_HEIGHT: u32 = 380;
pub const SHADOW_OFFSET: u32 = 8;
pub const BOOK_CORNER_RADIUS: f32 = 20.0;
pub const SPINE_WIDTH: u32 = 20;

pub const PAGE_LINE_COUNT: u32 = 5;
pub const PAGE_LINE_FIRST_OFFSET: u32 = 80;
pub const PAGE_LINE_SPACING: u32 = 40;
pub const PAGE_LINE_LEFT_INSET: u32 = 50;
pub const PAGE_LINE_RIGHT_INSET: u32 = 30;
pub const PAGE_LINE_WIDTH: f32 = 3.0;

pub const BADGE_SIZE: u32 = 80;
pub const BADGE_MARGIN: u32 = 20;
pub const BADGE_CORNER_RADIUS: f32 = 10.0;

/// Nominal pixel size of the badge label.
pub const LABEL_FONT_SIZE: f32 = 24.0;

/// A straight segment between two pixel-space points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl LineSegment {
    /// Creates a horizontal segment at row `y` spanning `[x0, x1]`.
    pub fn horizontal(y: u32, x0: u32, x1: u32) -> Self {
        Self {
            start: (x0, y),
            end: (x1, y),
        }
    }
}

/// Pixel-space layout of every icon element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    /// The whole canvas.
    pub canvas: RectPx,
    /// The book cover.
    pub book: RectPx,
    /// The drop shadow behind the cover.
    pub shadow: RectPx,
    /// The spine strip along the book's left edge.
    pub spine: RectPx,
    /// The page lines, top to bottom.
    pub page_lines: Vec<LineSegment>,
    /// The "PDF" badge in the book's top-right corner.
    pub badge: RectPx,
}

impl IconLayout {
    /// Computes the layout for a square canvas of `size` pixels.
    ///
    /// `size` must be at least as large as the book plus its shadow.
    pub fn for_size(size: u32) -> Self {
        let canvas = RectPx::from_size(size, size);
        let book = RectPx::centered_in(canvas, BOOK_WIDTH, BOOK_HEIGHT);
        let shadow = book.offset(SHADOW_OFFSET, SHADOW_OFFSET);
        let spine = RectPx::new(book.x, book.y, SPINE_WIDTH, book.height);

        let page_lines = (0..PAGE_LINE_COUNT)
            .map(|i| {
                LineSegment::horizontal(
                    book.y + PAGE_LINE_FIRST_OFFSET + i * PAGE_LINE_SPACING,
                    book.x + PAGE_LINE_LEFT_INSET,
                    book.right() - PAGE_LINE_RIGHT_INSET,
                )
            })
            .collect();

        let badge = RectPx::new(
            book.right() - BADGE_SIZE - BADGE_MARGIN,
            book.y + BADGE_MARGIN,
            BADGE_SIZE,
            BADGE_SIZE,
        );

        Self {
            canvas,
            book,
            shadow,
            spine,
            page_lines,
            badge,
        }
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::for_size(CANVAS_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_is_centered() {
        let layout = IconLayout::default();
        assert_eq!(layout.book, RectPx::new(106, 66, 300, 380));
        assert_eq!(layout.shadow, RectPx::new(114, 74, 300, 380));
    }

    #[test]
    fn spine_hugs_left_edge() {
        let layout = IconLayout::default();
        assert_eq!(layout.spine.x, layout.book.x);
        assert_eq!(layout.spine.y, layout.book.y);
        assert_eq!(layout.spine.width, SPINE_WIDTH);
        assert_eq!(layout.spine.height, layout.book.height);
    }

    #[test]
    fn page_lines_are_evenly_spaced() {
        let layout = IconLayout::default();
        assert_eq!(layout.page_lines.len(), 5);

        let rows: Vec<u32> = layout.page_lines.iter().map(|l| l.start.1).collect();
        assert_eq!(rows, vec![146, 186, 226, 266, 306]);

        for line in &layout.page_lines {
            assert_eq!(line.start.1, line.end.1);
            assert_eq!(line.start.0, 156);
            assert_eq!(line.end.0, 376);
        }
    }

    #[test]
    fn badge_sits_in_top_right_of_book() {
        let layout = IconLayout::default();
        assert_eq!(layout.badge, RectPx::new(306, 86, 80, 80));
        assert_eq!(layout.book.right() - layout.badge.right(), BADGE_MARGIN);
        assert_eq!(layout.badge.y - layout.book.y, BADGE_MARGIN);
    }
}
