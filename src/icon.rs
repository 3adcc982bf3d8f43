//! Icon types for the rendered master image and its resized copies.
//!
//! This module provides the pixel-space geometry types shared by the
//! renderer and the exporter, plus the image containers they pass around.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// A rectangle defined in pixel coordinates.
///
/// Used for every region the renderer paints (book, spine, badge, ...) and
/// for locating the label inside the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Creates a `width x height` rectangle centered within `outer`.
    ///
    /// Uses integer division, so odd leftovers go to the right/bottom side.
    pub fn centered_in(outer: RectPx, width: u32, height: u32) -> Self {
        Self {
            x: outer.x + outer.width.saturating_sub(width) / 2,
            y: outer.y + outer.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns a copy shifted by `(dx, dy)`.
    pub fn offset(&self, dx: u32, dy: u32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns true if the pixel at `(x, y)` lies inside this rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

/// A single rendered icon image.
///
/// The master icon and every exported copy are `IconImage`s. Pixels are
/// straight (non-premultiplied) RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    /// Wraps an existing RGBA buffer.
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns a square copy resampled to `side x side` with a Lanczos3 filter.
    ///
    /// A request for the image's own size returns an exact clone.
    pub fn resized(&self, side: u32) -> IconImage {
        if self.dimensions() == SizePx::square(side) {
            return self.clone();
        }
        IconImage::new(imageops::resize(&self.data, side, side, FilterType::Lanczos3))
    }
}

/// A collection of icon images derived from a single master at various sizes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The individual icon images, in the order they were requested.
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Resamples `master` once per entry in `sizes`, preserving order.
    pub fn from_master(master: &IconImage, sizes: &[u32]) -> Self {
        Self {
            images: sizes.iter().map(|&side| master.resized(side)).collect(),
        }
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rect_px_new() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(rect.offset(8, 8), RectPx::new(18, 28, 100, 200));
    }

    #[test]
    fn rect_px_centered() {
        let outer = RectPx::from_size(512, 512);
        let book = RectPx::centered_in(outer, 300, 380);
        assert_eq!(book, RectPx::new(106, 66, 300, 380));
    }

    #[test]
    fn rect_px_contains() {
        let rect = RectPx::new(2, 2, 6, 6);
        assert!(rect.contains(2, 2));
        assert!(rect.contains(7, 7));
        assert!(!rect.contains(8, 7));
        assert!(!rect.contains(1, 4));
    }

    #[test]
    fn resized_to_own_size_is_identical() {
        let mut data = RgbaImage::new(8, 8);
        data.put_pixel(3, 4, Rgba([1, 2, 3, 4]));
        let img = IconImage::new(data);
        assert_eq!(img.resized(8), img);
    }

    #[test]
    fn icon_set_from_master() {
        let master = IconImage::new(RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255])));
        let set = IconSet::from_master(&master, &[16, 32, 64]);

        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        for (img, side) in set.iter().zip([16, 32, 64]) {
            assert_eq!(img.dimensions(), SizePx::square(side));
        }

        // A flat color survives Lanczos downsampling unchanged
        let small = &set.images[0];
        assert_eq!(small.data.get_pixel(8, 8).0, [10, 20, 30, 255]);
    }
}
