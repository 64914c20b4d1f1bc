//! Aspect-preserving scaling of a source image into a slot.
//!
//! # Example
//!
//! ```
//! use diptych::{ScaleMode, Size, fit_within_slot};
//!
//! let s = fit_within_slot(Size::new(1920.0, 1080.0), Size::new(800.0, 600.0), ScaleMode::Fit);
//! assert_eq!(s.width, 800.0);
//! assert_eq!(s.height, 450.0);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;
use crate::geometry::{Rect, Size};
use crate::layout::Slot;
use crate::orientation::Orientation;

/// How a source is scaled relative to its slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Contain: the whole image is visible, one axis touches the slot and
    /// the other is ≤ the slot.
    #[default]
    Fit,
    /// Cover: the slot is entirely covered, one axis touches the slot and the
    /// other overflows it.
    Fill,
}

impl ScaleMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
        }
    }
}

impl FromStr for ScaleMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            _ => Err(LayoutError::InvalidScaleMode),
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Natural dimensions of a decoded image. The engine never sees pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SourceImage {
    pub natural_width: f64,
    pub natural_height: f64,
}

impl SourceImage {
    pub const fn new(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }

    /// `natural_width / natural_height`.
    pub fn aspect_ratio(&self) -> f64 {
        crate::aspect::ratio_of(self.natural_width, self.natural_height)
    }

    /// Portrait when taller than wide; squares are landscape.
    pub fn orientation(&self) -> Orientation {
        Orientation::of_dimensions(self.natural_width, self.natural_height)
    }
}

/// A source image scaled and centered in a slot, in the slot's coordinate space.
pub type FittedPlacement = Rect;

/// Scale `source` into `slot` preserving aspect ratio.
pub fn fit_within_slot(source: Size, slot: Size, mode: ScaleMode) -> Size {
    let source_ratio = source.width / source.height;
    let target_ratio = slot.width / slot.height;
    // Source relatively wider than the slot.
    let wider = source_ratio > target_ratio;

    let width_bound = match mode {
        ScaleMode::Fit => wider,
        ScaleMode::Fill => !wider,
    };
    if width_bound {
        Size::new(slot.width, slot.width / source_ratio)
    } else {
        Size::new(slot.height * source_ratio, slot.height)
    }
}

/// String-boundary form of [`fit_within_slot`].
pub fn fit_within_slot_str(source: Size, slot: Size, mode: &str) -> Result<Size, LayoutError> {
    Ok(fit_within_slot(source, slot, mode.parse()?))
}

/// Offset that centers `element` inside `container`.
///
/// Negative when the element is larger than the container, which is the
/// normal case for [`ScaleMode::Fill`].
pub fn center_offset(element: Size, container: Size) -> (f64, f64) {
    (
        (container.width - element.width) / 2.0,
        (container.height - element.height) / 2.0,
    )
}

/// Scale `image` into `slot`, center it, and translate by the slot origin.
///
/// The result is in whatever coordinate space `slot` is in.
pub fn place(image: &SourceImage, slot: &Slot, mode: ScaleMode) -> FittedPlacement {
    let scaled = fit_within_slot(image.size(), slot.size(), mode);
    let (dx, dy) = center_offset(scaled, slot.size());
    Rect::new(slot.x + dx, slot.y + dy, scaled.width, scaled.height)
}
