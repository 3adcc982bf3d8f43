//! app-icon-renderer: procedural application icon generator
//!
//! This crate draws a book-shaped application icon with a red "PDF" badge
//! and writes it into a macOS-style bundle as a 512x512 master PNG plus
//! resampled copies at 16, 32, 64, 128, 256 and 512 pixels.
//!
//! # Example
//!
//! ```no_run
//! use app_icon_renderer::{Exporter, IconRenderer};
//!
//! let renderer = IconRenderer::new();
//! let report = Exporter::default().export(&renderer).unwrap();
//! assert!(!report.is_placeholder());
//! ```
//!
//! # Rendering
//!
//! [`IconRenderer`] builds an ordered list of [`DrawCommand`]s (gradient,
//! shadow, cover, spine, page lines, badge, label) from an [`IconLayout`]
//! and paints them onto a [`Canvas`]. The badge label uses a system font when
//! one can be found and a built-in bitmap font otherwise; see [`LabelFont`].
//!
//! # Exporting
//!
//! [`Exporter`] accepts any [`IconSource`]. If the source (or the PNG
//! encoder) reports [`IconError::ImagingUnavailable`], a text marker is
//! written in place of the images and the export still succeeds.

mod canvas;
mod error;
mod export;
mod icon;
mod layout;
mod primitive;
mod renderer;
mod text;

pub use canvas::{Canvas, Color};
pub use error::{IconError, IconResult};
pub use export::{
    DEFAULT_BUNDLE_ROOT, EXPORT_SIZES, ExportReport, ExportedFile, Exporter, PLACEHOLDER_TEXT,
};
pub use icon::{IconImage, IconSet, RectPx, SizePx};
pub use layout::{CANVAS_SIZE, IconLayout, LineSegment};
pub use primitive::DrawCommand;
pub use renderer::{BADGE_LABEL, IconRenderer, IconSource, IconStyle, RenderedIcon};
pub use text::LabelFont;
