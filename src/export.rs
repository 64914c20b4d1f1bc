//! Full-resolution export through a host rendering surface.
//!
//! The host owns the surface (a canvas, a GPU target, a software rasterizer)
//! and implements [`RenderSurface`]. Export computes the pixel ratio that
//! turns the current preview stage back into a `frame_width`-wide bitmap and
//! hands it to the surface along with the chosen format and quality.
//!
//! ```
//! use diptych::export::{ExportOptions, RasterRequest, RenderSurface, export};
//!
//! struct Canvas { stage_width: f64 }
//!
//! impl RenderSurface for Canvas {
//!     type Output = u32;
//!     type Error = &'static str;
//!
//!     fn rasterize(&mut self, request: &RasterRequest) -> Result<u32, &'static str> {
//!         Ok((self.stage_width * request.pixel_ratio).round() as u32)
//!     }
//! }
//!
//! let mut canvas = Canvas { stage_width: 800.0 };
//! let width = export(Some(&mut canvas), 3000.0, 800.0, ExportOptions::default()).unwrap();
//! assert_eq!(width, 3000);
//! ```

use alloc::string::{String, ToString};
use core::fmt;

use crate::preview::export_pixel_ratio;
use crate::scene::Scene;

/// Encoded output format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpeg, Self::Webp];

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// File extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Webp => "WebP",
        }
    }

    pub fn from_mime_type(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.mime_type() == mime)
    }

    /// Accepts `jpg` as well as `jpeg`. Case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        if ext.eq_ignore_ascii_case("jpg") {
            return Some(Self::Jpeg);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
    }
}

/// Default encoder quality, `0.0..=1.0`.
pub const DEFAULT_QUALITY: f32 = 0.85;

/// Format and quality chosen by the user.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub format: ImageFormat,
    /// Encoder quality in `0.0..=1.0`. Ignored by lossless formats.
    pub quality: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ExportOptions {
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set quality, clamped to `0.0..=1.0`.
    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = quality.clamp(0.0, 1.0);
        self
    }

    /// Quality from a `0..=100` percentage.
    pub fn quality_percent(self, percent: u8) -> Self {
        self.quality(percent as f32 / 100.0)
    }
}

/// What the surface is asked to rasterize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RasterRequest {
    /// Multiplier from stage pixels to output pixels.
    pub pixel_ratio: f64,
    pub format: ImageFormat,
    pub quality: f32,
}

/// A host surface holding the rendered preview stage.
pub trait RenderSurface {
    /// Encoded artifact (bytes, a data URL, a file handle...).
    type Output;
    /// Rasterizer failure. Only its message survives into [`ExportError`].
    type Error: fmt::Display;

    /// Rasterize the current stage at `request.pixel_ratio`.
    fn rasterize(&mut self, request: &RasterRequest) -> Result<Self::Output, Self::Error>;
}

/// Export failure.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportError {
    /// No surface was available to render from.
    NoRenderTarget,
    /// The surface failed to rasterize; `message` is its own error text.
    ExportFailed { message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRenderTarget => f.write_str("no render surface available for export"),
            Self::ExportFailed { message } => write!(f, "failed to export image: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExportError {}

/// Rasterize `surface` so the output is exactly `frame_width` pixels wide.
///
/// `current_stage_width` is the stage width at the time of the call, not a
/// cached value; the ratio is recomputed every time.
pub fn export<S: RenderSurface>(
    surface: Option<&mut S>,
    frame_width: f64,
    current_stage_width: f64,
    options: ExportOptions,
) -> Result<S::Output, ExportError> {
    let surface = surface.ok_or(ExportError::NoRenderTarget)?;
    let request = RasterRequest {
        pixel_ratio: export_pixel_ratio(frame_width, current_stage_width),
        format: options.format,
        quality: options.quality,
    };
    log::debug!(
        "exporting {} at pixel ratio {} ({current_stage_width}px stage -> {frame_width}px)",
        request.format.label(),
        request.pixel_ratio
    );
    surface.rasterize(&request).map_err(|e| {
        let message = e.to_string();
        log::error!("export failed: {message}");
        ExportError::ExportFailed { message }
    })
}

/// [`export`] using the frame and stage widths of `scene`.
pub fn export_scene<S: RenderSurface>(
    scene: &Scene,
    surface: Option<&mut S>,
    options: ExportOptions,
) -> Result<S::Output, ExportError> {
    export(surface, scene.frame().width, scene.stage().width, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    struct Recorder {
        requests: Vec<RasterRequest>,
    }

    impl RenderSurface for Recorder {
        type Output = f64;
        type Error = &'static str;

        fn rasterize(&mut self, request: &RasterRequest) -> Result<f64, &'static str> {
            self.requests.push(*request);
            Ok(request.pixel_ratio)
        }
    }

    struct Broken;

    impl RenderSurface for Broken {
        type Output = ();
        type Error = String;

        fn rasterize(&mut self, _: &RasterRequest) -> Result<(), String> {
            Err("canvas is tainted".to_string())
        }
    }

    #[test]
    fn passes_ratio_and_options() {
        let mut r = Recorder {
            requests: Vec::new(),
        };
        let opts = ExportOptions::default()
            .format(ImageFormat::Jpeg)
            .quality_percent(90);
        let ratio = export(Some(&mut r), 3000.0, 800.0, opts).unwrap();
        assert_eq!(ratio, 3.75);
        assert_eq!(
            r.requests,
            [RasterRequest {
                pixel_ratio: 3.75,
                format: ImageFormat::Jpeg,
                quality: 0.9
            }]
        );
    }

    #[test]
    fn missing_surface() {
        assert_eq!(
            export::<Recorder>(None, 3000.0, 800.0, ExportOptions::default()),
            Err(ExportError::NoRenderTarget)
        );
    }

    #[test]
    fn rasterize_failure_keeps_message() {
        let err = export(Some(&mut Broken), 3000.0, 800.0, ExportOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ExportError::ExportFailed {
                message: "canvas is tainted".to_string()
            }
        );
        assert_eq!(err.to_string(), "failed to export image: canvas is tainted");
    }

    #[test]
    fn formats() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_mime_type("image/webp"), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::from_mime_type("image/gif"), None);
        assert_eq!(ImageFormat::from_extension(".JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        for f in ImageFormat::ALL {
            assert_eq!(ImageFormat::from_mime_type(f.mime_type()), Some(f));
            assert_eq!(ImageFormat::from_extension(f.extension()), Some(f));
        }
    }

    #[test]
    fn quality_clamps() {
        assert_eq!(ExportOptions::default().quality, DEFAULT_QUALITY);
        assert_eq!(ExportOptions::default().quality(1.5).quality, 1.0);
        assert_eq!(ExportOptions::default().quality(-0.2).quality, 0.0);
    }
}
