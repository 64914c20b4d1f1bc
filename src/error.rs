//! Input-validation failures raised by the layout functions.

use core::fmt;

/// Layout computation error.
///
/// Deterministic: the same inputs always fail the same way, so there is
/// nothing to retry.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// Aspect ratio label is not in the supported table.
    UnknownAspectRatio,
    /// Orientation is neither portrait nor landscape.
    InvalidOrientation,
    /// Scale mode is neither fit nor fill.
    InvalidScaleMode,
    /// A slot has zero or negative width or height.
    ///
    /// Only produced by the opt-in [`Slots::check`](crate::Slots::check);
    /// slot computation itself never fails.
    DegenerateLayout,
    /// Color string is not a recognized hex value or preset name.
    InvalidColor,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnknownAspectRatio => "unknown aspect ratio",
            Self::InvalidOrientation => "invalid orientation (expected portrait or landscape)",
            Self::InvalidScaleMode => "invalid scale mode (expected fit or fill)",
            Self::DegenerateLayout => "border or spacing leaves no room for an image slot",
            Self::InvalidColor => "invalid color",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}
