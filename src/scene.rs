//! Everything a renderer needs to draw one frame: stage size, background, and
//! the two image placements in preview coordinates.
//!
//! Layout is computed once at full resolution and projected; nothing is laid
//! out twice.
//!
//! ```
//! use diptych::{FrameConfig, Scene, SourceImage};
//!
//! let config = FrameConfig::default();
//! let scene = Scene::new(
//!     &config,
//!     Some(400.0),
//!     [Some(SourceImage::new(4032.0, 3024.0)), None],
//! );
//!
//! assert_eq!(scene.stage().width, 400.0);
//! assert!(scene.image1().is_some());
//! assert!(scene.image2().is_none());
//! assert!(!scene.can_export());
//! ```

use crate::color::BackgroundColor;
use crate::config::{DEFAULT_PREVIEW_WIDTH, FrameConfig};
use crate::fit::{FittedPlacement, ScaleMode, SourceImage, place};
use crate::geometry::{Rect, Size};
use crate::layout::Slots;
use crate::preview::PreviewProjector;

/// Background rectangle and its fill.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Background {
    pub rect: Rect,
    pub fill: BackgroundColor,
}

/// Derived render state for one configuration, preview width, and image pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    slots: Slots,
    projector: PreviewProjector,
    fill: BackgroundColor,
    images: [Option<SourceImage>; 2],
}

impl Scene {
    /// Build a scene. `preview_width` of `None` uses [`DEFAULT_PREVIEW_WIDTH`].
    pub fn new(
        config: &FrameConfig,
        preview_width: Option<f64>,
        images: [Option<SourceImage>; 2],
    ) -> Self {
        let frame = config.dimensions();
        let slots = config.slots();
        if !slots.is_drawable() {
            log::warn!(
                "border {:?} leaves no room in {}x{} frame; slots will not be drawn",
                config.border,
                frame.width,
                frame.height
            );
        }
        let projector =
            PreviewProjector::new(frame, preview_width.unwrap_or(DEFAULT_PREVIEW_WIDTH));
        Self {
            slots,
            projector,
            fill: config.background,
            images,
        }
    }

    /// Full-resolution frame size.
    pub fn frame(&self) -> Size {
        self.projector.frame()
    }

    /// Full-resolution slots.
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Preview pixels per frame pixel.
    pub fn scale(&self) -> f64 {
        self.projector.scale()
    }

    /// Preview stage size.
    pub fn stage(&self) -> Size {
        self.projector.stage()
    }

    /// Background covering the whole stage.
    pub fn background(&self) -> Background {
        Background {
            rect: Rect::from_size(self.stage()),
            fill: self.fill,
        }
    }

    /// Image placement at full resolution, `None` when no image is loaded
    /// at `position` or `position` is not 0 or 1.
    pub fn full_res_placement(&self, position: usize) -> Option<FittedPlacement> {
        let image = self.images.get(position)?.as_ref()?;
        let slot = self.slots.get(position)?;
        Some(place(image, slot, ScaleMode::Fit))
    }

    /// Image placement in preview coordinates.
    pub fn placement(&self, position: usize) -> Option<FittedPlacement> {
        self.full_res_placement(position)
            .map(|p| self.projector.project(p))
    }

    /// Preview placement of the first image.
    pub fn image1(&self) -> Option<FittedPlacement> {
        self.placement(0)
    }

    /// Preview placement of the second image.
    pub fn image2(&self) -> Option<FittedPlacement> {
        self.placement(1)
    }

    /// Both images are loaded.
    pub fn is_ready(&self) -> bool {
        self.images.iter().all(Option::is_some)
    }

    /// Export requires both images.
    pub fn can_export(&self) -> bool {
        self.is_ready()
    }

    /// Pixel ratio that rasterizes the current stage at full frame width.
    pub fn export_pixel_ratio(&self) -> f64 {
        self.projector.export_pixel_ratio()
    }
}
