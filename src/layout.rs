//! Partition a frame into two image slots separated by border and gap.
//!
//! ```text
//!     Portrait (m = outer margin, g = inner gap)
//!     ┌──────────────────────┐
//!     │          m           │
//!     │   ┌──────────────┐   │
//!     │ m │    image1    │ m │
//!     │   └──────────────┘   │
//!     │          g           │
//!     │   ┌──────────────┐   │
//!     │ m │    image2    │ m │
//!     │   └──────────────┘   │
//!     │          m           │
//!     └──────────────────────┘
//! ```
//!
//! Landscape is the transpose: slots sit side by side, `image1` on the left.

use crate::error::LayoutError;
use crate::geometry::{Rect, Size};
use crate::orientation::Orientation;

/// Fixed gap between the two slots in the percentage-border model.
pub const INNER_GAP: f64 = 20.0;

/// A slot reserved for one image, in the coordinate space of the frame it was
/// computed against.
pub type Slot = Rect;

/// How border and inter-image spacing are derived.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BorderModel {
    /// One value used for the outer margin and the gap between images.
    UniformSpacing { spacing: f64 },
    /// Outer margin of `border` pixels, with an independent `inner_gap`
    /// between the images.
    PercentBorder { border: f64, inner_gap: f64 },
}

impl BorderModel {
    /// Uniform spacing of `spacing` pixels.
    pub const fn uniform(spacing: f64) -> Self {
        Self::UniformSpacing { spacing }
    }

    /// Border resolved from a percentage of the frame's longest side.
    ///
    /// `border = round(longest_side * percentage / 100 / 2)`, with the
    /// standard [`INNER_GAP`] between images.
    pub fn percent(longest_side: f64, percentage: f64) -> Self {
        Self::PercentBorder {
            border: border_pixels(longest_side, percentage),
            inner_gap: INNER_GAP,
        }
    }

    /// Margin between the frame edge and the slots.
    pub const fn margin(&self) -> f64 {
        match *self {
            Self::UniformSpacing { spacing } => spacing,
            Self::PercentBorder { border, .. } => border,
        }
    }

    /// Distance between the two slots along the stacking axis.
    pub const fn gap(&self) -> f64 {
        match *self {
            Self::UniformSpacing { spacing } => spacing,
            Self::PercentBorder { inner_gap, .. } => inner_gap,
        }
    }
}

/// Convert a border percentage of the longest side to pixels.
pub fn border_pixels(longest_side: f64, percentage: f64) -> f64 {
    num_traits::Float::round(longest_side * percentage / 100.0 / 2.0)
}

/// The two slots of a frame. `image1` is top (portrait) or left (landscape).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slots {
    pub image1: Slot,
    pub image2: Slot,
}

impl Slots {
    /// Both slots, in encounter order.
    pub const fn as_array(&self) -> [Slot; 2] {
        [self.image1, self.image2]
    }

    /// Slot by position (0 or 1).
    pub fn get(&self, position: usize) -> Option<&Slot> {
        match position {
            0 => Some(&self.image1),
            1 => Some(&self.image2),
            _ => None,
        }
    }

    /// Whether both slots have strictly positive width and height.
    pub fn is_drawable(&self) -> bool {
        self.image1.is_drawable() && self.image2.is_drawable()
    }

    /// Fail with [`LayoutError::DegenerateLayout`] when either slot is empty.
    pub fn check(self) -> Result<Self, LayoutError> {
        if self.is_drawable() {
            Ok(self)
        } else {
            Err(LayoutError::DegenerateLayout)
        }
    }

    /// Distance from the end of `image1` to the start of `image2` along the
    /// stacking axis.
    pub fn gap(&self, orientation: Orientation) -> f64 {
        if orientation.is_portrait() {
            self.image2.y - self.image1.bottom()
        } else {
            self.image2.x - self.image1.right()
        }
    }
}

/// Compute both slots for a frame.
///
/// Never clamps: a border too large for the frame yields zero or negative
/// slot sizes, which renderers should treat as nothing to draw.
pub fn compute_slots(frame: Size, orientation: Orientation, border: BorderModel) -> Slots {
    let margin = border.margin();
    let gap = border.gap();

    let slots = match orientation {
        Orientation::Portrait => {
            let width = frame.width - 2.0 * margin;
            let height = (frame.height - 2.0 * margin - gap) / 2.0;
            Slots {
                image1: Rect::new(margin, margin, width, height),
                image2: Rect::new(margin, margin + height + gap, width, height),
            }
        }
        Orientation::Landscape => {
            let width = (frame.width - 2.0 * margin - gap) / 2.0;
            let height = frame.height - 2.0 * margin;
            Slots {
                image1: Rect::new(margin, margin, width, height),
                image2: Rect::new(margin + width + gap, margin, width, height),
            }
        }
    };
    log::trace!("slots for {orientation} {border:?}: {slots:?}");
    slots
}
