//! Built-in 5x7 bitmap font used when no system font is available.

use crate::canvas::{Canvas, Color};
use crate::icon::{RectPx, SizePx};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Blank cells between adjacent glyphs.
const GLYPH_SPACING: u32 = 1;

/// Returns the integer cell scale that approximates `font_size` pixels.
pub fn cell_scale(font_size: f32) -> u32 {
    ((font_size / 8.0).round() as u32).max(1)
}

/// Returns the pixel size of `text` rendered at `scale`.
pub fn measure(text: &str, scale: u32) -> SizePx {
    let count = text.chars().count() as u32;
    if count == 0 {
        return SizePx::default();
    }
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    SizePx::new(count * advance - GLYPH_SPACING * scale, GLYPH_HEIGHT * scale)
}

/// Draws `text` with its top-left corner at `(x, y)`.
///
/// Lowercase letters are drawn as uppercase; unsupported characters leave
/// a blank cell.
pub fn draw(canvas: &mut Canvas, text: &str, x: u32, y: u32, scale: u32, color: Color) {
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * scale;

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let gx = x + i as u32 * advance;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let cell = RectPx::new(gx + col * scale, y + row as u32 * scale, scale, scale);
                canvas.fill_rect(cell, color);
            }
        }
    }
}

/// Returns the glyph rows for `ch`, most significant of the low 5 bits leftmost.
pub fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgba;

    #[test]
    fn covers_uppercase_and_digits() {
        for ch in ('A'..='Z').chain('0'..='9') {
            let rows = glyph(ch).unwrap_or_else(|| panic!("missing glyph for {ch:?}"));
            assert!(rows.iter().any(|r| *r != 0), "glyph {ch:?} is blank");
            assert!(rows.iter().all(|r| *r < 32), "glyph {ch:?} is wider than 5 cells");
        }
        assert_eq!(glyph('p'), glyph('P'));
        assert_eq!(glyph(' '), Some([0; 7]));
        assert!(glyph('~').is_none());
    }

    #[test]
    fn scale_tracks_font_size() {
        assert_eq!(cell_scale(24.0), 3);
        assert_eq!(cell_scale(4.0), 1);
        assert_eq!(cell_scale(1.0), 1);
    }

    #[test]
    fn measure_pdf() {
        assert_eq!(measure("PDF", 3), SizePx::new(51, 21));
        assert_eq!(measure("", 3), SizePx::default());
    }

    #[test]
    fn draws_stem_of_p() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        let white = Srgba::new(255, 255, 255, 255);
        draw(&mut canvas, "P", 1, 1, 1, white);

        // Left stem runs the full glyph height
        for y in 1..8 {
            assert_eq!(canvas.pixel(1, y).unwrap().0, [255, 255, 255, 255]);
        }
        // Top-right corner of "P" is empty
        assert_eq!(canvas.pixel(5, 1).unwrap()[3], 0);
    }
}
