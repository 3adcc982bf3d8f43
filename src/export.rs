//! Writing the rendered icon into the application bundle.
//!
//! [`Exporter`] renders an [`IconSource`], saves the master PNG and one
//! resampled PNG per configured size under
//! `<bundle-root>/Contents/Resources/`. When the raster backend is
//! unusable it writes a plain-text marker instead and still succeeds.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageResult};
use tracing::{debug, info, warn};

use crate::error::{IconError, IconResult};
use crate::icon::{IconImage, IconSet};
use crate::renderer::IconSource;

/// Default bundle root, relative to the working directory.
pub const DEFAULT_BUNDLE_ROOT: &str = "Visual Learning Platform.app";

/// Sizes written next to the master image.
pub const EXPORT_SIZES: [u32; 6] = [16, 32, 64, 128, 256, 512];

/// Contents of the fallback marker file.
pub const PLACEHOLDER_TEXT: &str = "Visual Learning Platform Icon";

const RESOURCES_DIR: [&str; 2] = ["Contents", "Resources"];
const MASTER_FILE: &str = "app-icon.png";
const PLACEHOLDER_FILE: &str = "app-icon.txt";

// ============================================================================
// ExportReport
// ============================================================================

/// A PNG written by the exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    /// Side length in pixels.
    pub size: u32,
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReport {
    /// The icon was rendered and written as PNGs.
    Rendered {
        master: ExportedFile,
        variants: Vec<ExportedFile>,
    },

    /// Imaging was unavailable; only the text marker was written.
    Placeholder { marker: PathBuf },
}

impl ExportReport {
    /// Returns true if the placeholder marker was written instead of images.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

// ============================================================================
// Exporter
// ============================================================================

/// Writes the icon and its resized copies into an application bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exporter {
    bundle_root: PathBuf,
    sizes: Vec<u32>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(DEFAULT_BUNDLE_ROOT)
    }
}

impl Exporter {
    /// Creates an exporter writing under `bundle_root` with the standard sizes.
    pub fn new(bundle_root: impl Into<PathBuf>) -> Self {
        Self {
            bundle_root: bundle_root.into(),
            sizes: EXPORT_SIZES.to_vec(),
        }
    }

    /// Directory all outputs land in.
    pub fn resources_dir(&self) -> PathBuf {
        RESOURCES_DIR
            .iter()
            .fold(self.bundle_root.clone(), |dir, part| dir.join(part))
    }

    /// Path of the master PNG.
    pub fn master_path(&self) -> PathBuf {
        self.resources_dir().join(MASTER_FILE)
    }

    /// Path of the resized copy for `size`.
    pub fn variant_path(&self, size: u32) -> PathBuf {
        self.resources_dir().join(format!("app-icon-{size}.png"))
    }

    /// Path of the fallback text marker.
    pub fn placeholder_path(&self) -> PathBuf {
        self.resources_dir().join(PLACEHOLDER_FILE)
    }

    /// Renders `source` and writes every output.
    ///
    /// [`IconError::ImagingUnavailable`] from rendering or encoding is
    /// absorbed by writing the placeholder marker. Any other error is
    /// returned.
    pub fn export(&self, source: &impl IconSource) -> IconResult<ExportReport> {
        self.export_with(source, encode_png)
    }

    fn export_with<E>(&self, source: &impl IconSource, encode: E) -> IconResult<ExportReport>
    where
        E: Fn(&IconImage) -> ImageResult<Vec<u8>>,
    {
        info!("creating app icon");

        let written = source
            .render()
            .and_then(|icon| self.write_icon(&icon, encode));
        match written {
            Ok(report) => {
                info!("app icon created successfully");
                if let ExportReport::Rendered { master, .. } = &report {
                    info!(path = %master.path.display(), "icon saved");
                }
                Ok(report)
            }
            Err(IconError::ImagingUnavailable(reason)) => {
                warn!(%reason, "imaging unavailable, writing a text placeholder instead");
                let marker = self.write_placeholder()?;
                info!(path = %marker.display(), "placeholder icon marker created");
                Ok(ExportReport::Placeholder { marker })
            }
            Err(err) => Err(err),
        }
    }

    /// Writes the master image and every resized copy.
    ///
    /// All PNGs are encoded before the first file is written, so an encoder
    /// failure leaves the bundle untouched.
    fn write_icon<E>(&self, icon: &IconImage, encode: E) -> IconResult<ExportReport>
    where
        E: Fn(&IconImage) -> ImageResult<Vec<u8>>,
    {
        let master_path = self.master_path();
        let master_png = encode(icon).map_err(|e| IconError::image(&master_path, e))?;

        let set = IconSet::from_master(icon, &self.sizes);
        let mut encoded = Vec::with_capacity(set.len());
        for (image, &size) in set.iter().zip(&self.sizes) {
            let path = self.variant_path(size);
            let png = encode(image).map_err(|e| IconError::image(&path, e))?;
            encoded.push((ExportedFile { path, size }, png));
        }

        self.ensure_resources_dir()?;
        write_file(&master_path, &master_png)?;
        let master = ExportedFile {
            path: master_path,
            size: icon.data.width(),
        };

        let mut variants = Vec::with_capacity(encoded.len());
        for (file, png) in encoded {
            write_file(&file.path, &png)?;
            variants.push(file);
        }

        Ok(ExportReport::Rendered { master, variants })
    }

    /// Writes the plain-text marker and returns its path.
    pub fn write_placeholder(&self) -> IconResult<PathBuf> {
        self.ensure_resources_dir()?;
        let path = self.placeholder_path();
        fs::write(&path, PLACEHOLDER_TEXT).map_err(|e| IconError::io(&path, e))?;
        Ok(path)
    }

    fn ensure_resources_dir(&self) -> IconResult<()> {
        let dir = self.resources_dir();
        fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))
    }
}

fn encode_png(icon: &IconImage) -> ImageResult<Vec<u8>> {
    let mut png = Vec::new();
    icon.data.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

fn write_file(path: &Path, bytes: &[u8]) -> IconResult<()> {
    fs::write(path, bytes).map_err(|e| IconError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
