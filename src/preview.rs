//! Mapping between the full-resolution frame and the on-screen preview.
//!
//! Layout is computed once at full resolution and projected into the preview
//! by a single scale factor. Export goes the other way: the preview stage is
//! rasterized with a pixel ratio that recovers the full frame width, whatever
//! the preview happened to be sized to.
//!
//! ```
//! use diptych::{export_pixel_ratio, preview_scale};
//!
//! let scale = preview_scale(3000.0, 800.0);
//! assert!((scale - 0.2667).abs() < 1e-4);
//! assert_eq!(export_pixel_ratio(3000.0, 800.0), 3.75);
//! ```

use crate::geometry::{Rect, Size};

/// `preview_container_width / frame_width`.
///
/// A zero-width container gives a zero scale; it is not an error.
pub fn preview_scale(frame_width: f64, preview_container_width: f64) -> f64 {
    preview_container_width / frame_width
}

/// Scale every field of a full-resolution rect into preview space.
pub fn project_to_preview(full_res: Rect, scale: f64) -> Rect {
    full_res.scale(scale)
}

/// Multiplier that renders a stage of `current_stage_width` back up to
/// exactly `frame_width` pixels.
pub fn export_pixel_ratio(frame_width: f64, current_stage_width: f64) -> f64 {
    frame_width / current_stage_width
}

/// Projection from one frame into one preview container.
///
/// Recreate it whenever the frame dimensions or the container width change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PreviewProjector {
    frame: Size,
    container_width: f64,
    scale: f64,
}

impl PreviewProjector {
    pub fn new(frame: Size, container_width: f64) -> Self {
        let scale = preview_scale(frame.width, container_width);
        log::trace!(
            "preview {container_width}px for {}x{} frame, scale {scale}",
            frame.width,
            frame.height
        );
        Self {
            frame,
            container_width,
            scale,
        }
    }

    /// Preview pixels per full-resolution pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Full-resolution frame this projector was built for.
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Preview stage size.
    ///
    /// Width is the container width itself rather than `frame.width * scale`,
    /// so it carries no rounding; height is `frame.height * scale`, which keeps
    /// the frame's aspect ratio.
    pub fn stage(&self) -> Size {
        Size::new(self.container_width, self.frame.height * self.scale)
    }

    /// Project a full-resolution rect into the preview.
    pub fn project(&self, full_res: Rect) -> Rect {
        project_to_preview(full_res, self.scale)
    }

    /// Pixel ratio for exporting the current stage at full resolution.
    pub fn export_pixel_ratio(&self) -> f64 {
        export_pixel_ratio(self.frame.width, self.stage().width)
    }
}
