#![forbid(unsafe_code)]

//! `image`-backed pixel canvas.
//!
//! Semantics follow what layout composition needs: crops pad out-of-bounds
//! regions with transparent pixels, pastes overwrite and clip, rotation is
//! exact quarter-turn pixel transposition (no resampling).

use std::fmt;
use std::path::{Path, PathBuf};

use image::imageops;
use image::{DynamicImage, RgbaImage};

use slate_core::color::Rgba;
use slate_core::geometry::{Point, Rect, Size};

use crate::surface::Surface;

/// Opaque pixel-format tag, carried from layout configuration to the
/// encoder. The layout core never interprets it.
///
/// Known values ("RGB", "L", "1", "P") select the encoding used by
/// [`Surface::save`]; anything else is written as RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageMode(pub &'static str);

impl ImageMode {
    /// 8-bit RGB, the common case for display buffers.
    pub const RGB: Self = Self("RGB");
    /// 8-bit RGBA with alpha preserved.
    pub const RGBA: Self = Self("RGBA");
    /// 8-bit grayscale.
    pub const GRAY: Self = Self("L");

    /// The raw tag.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for ImageMode {
    fn default() -> Self {
        Self::RGB
    }
}

/// An owned RGBA pixel buffer plus its format tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: RgbaImage,
    mode: ImageMode,
}

impl Canvas {
    /// The pixel-format tag this canvas was created with.
    pub fn mode(&self) -> ImageMode {
        self.mode
    }

    /// Read one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixels.get_pixel_checked(x, y).map(|p| from_px(*p))
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.pixels.width(), self.pixels.height())
    }
}

fn to_px(c: Rgba) -> image::Rgba<u8> {
    image::Rgba([c.r(), c.g(), c.b(), c.a()])
}

fn from_px(p: image::Rgba<u8>) -> Rgba {
    Rgba::rgba(p.0[0], p.0[1], p.0[2], p.0[3])
}

impl Surface for Canvas {
    fn blank(size: Size, fill: Rgba, mode: ImageMode) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            width = size.width,
            height = size.height,
            mode = mode.as_str(),
            "blank canvas"
        );
        Self {
            pixels: RgbaImage::from_pixel(size.width, size.height, to_px(fill)),
            mode,
        }
    }

    fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    fn crop(&self, rect: Rect) -> Self {
        let mut out = RgbaImage::from_pixel(rect.width, rect.height, to_px(Rgba::TRANSPARENT));
        if let Some(inter) = rect.intersection_opt(&self.bounds()) {
            let sub =
                imageops::crop_imm(&self.pixels, inter.x, inter.y, inter.width, inter.height)
                    .to_image();
            imageops::replace(
                &mut out,
                &sub,
                (inter.x - rect.x) as i64,
                (inter.y - rect.y) as i64,
            );
        }
        Self {
            pixels: out,
            mode: self.mode,
        }
    }

    fn paste_onto(&self, target: &mut Self, at: Point) {
        imageops::replace(&mut target.pixels, &self.pixels, at.x as i64, at.y as i64);
    }

    fn rotated(&self, degrees: i32) -> Self {
        debug_assert!(degrees % 90 == 0, "rotation must be a quarter turn");
        let pixels = match degrees.rem_euclid(360) / 90 {
            0 => self.pixels.clone(),
            1 => imageops::rotate270(&self.pixels),
            2 => imageops::rotate180(&self.pixels),
            _ => imageops::rotate90(&self.pixels),
        };
        Self {
            pixels,
            mode: self.mode,
        }
    }

    fn draw_rect_outline(&mut self, rect: Rect, colour: Rgba, width: u32) {
        let top = Rect::new(rect.x, rect.y, rect.width, width);
        let bottom = Rect::new(
            rect.x,
            rect.bottom().saturating_sub(width),
            rect.width,
            width,
        );
        let left = Rect::new(rect.x, rect.y, width, rect.height);
        let right = Rect::new(rect.right().saturating_sub(width), rect.y, width, rect.height);
        for band in [top, bottom, left, right] {
            self.fill_rect(band.intersection(&rect), colour);
        }
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgba) {
        let Some(clip) = rect.intersection_opt(&self.bounds()) else {
            return;
        };
        let px = to_px(colour);
        for y in clip.top()..clip.bottom() {
            for x in clip.left()..clip.right() {
                self.pixels.put_pixel(x, y, px);
            }
        }
    }

    fn save(&self, path: &Path) -> Result<(), RasterError> {
        if self.size().is_empty() {
            return Err(RasterError::EmptyCanvas {
                path: path.to_path_buf(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), mode = self.mode.as_str(), "saving canvas");
        let result = match self.mode.as_str() {
            "RGB" | "P" => DynamicImage::ImageRgba8(self.pixels.clone())
                .to_rgb8()
                .save(path),
            "L" | "1" => DynamicImage::ImageRgba8(self.pixels.clone())
                .to_luma8()
                .save(path),
            _ => self.pixels.save(path),
        };
        result.map_err(|source| RasterError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Failure in the raster backend.
#[derive(Debug)]
pub enum RasterError {
    /// Encoding or writing an image file failed.
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Zero-dimension buffers cannot be encoded.
    EmptyCanvas { path: PathBuf },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Save { path, source } => {
                write!(f, "saving {} failed: {source}", path.display())
            }
            Self::EmptyCanvas { path } => {
                write!(f, "cannot save empty canvas to {}", path.display())
            }
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Save { source, .. } => Some(source),
            Self::EmptyCanvas { .. } => None,
        }
    }
}
