//! Frame orientation and the stacking axis it implies.
//!
//! ```text
//!     Portrait                Landscape
//!     ┌─────────┐             ┌───────────────────┐
//!     │ image1  │             │ image1  │ image2  │
//!     ├─────────┤             └───────────────────┘
//!     │ image2  │
//!     └─────────┘
//!   height = longest side    width = longest side
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;

/// Which frame axis carries the configured longest side.
///
/// Portrait binds the longest side to the height and stacks the two slots
/// vertically. Landscape binds it to the width and stacks them horizontally.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Self; 2] = [Self::Portrait, Self::Landscape];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// The other orientation.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    /// Whether the longest side is the height and slots stack vertically.
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }

    /// Orientation of a `width × height` image. Squares count as landscape.
    pub fn of_dimensions(width: f64, height: f64) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

impl FromStr for Orientation {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(LayoutError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
