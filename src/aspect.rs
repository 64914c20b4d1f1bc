//! Supported frame aspect ratios.
//!
//! Each entry is a `long / short` ratio, always greater than 1. Which frame
//! axis is "long" is decided by [`Orientation`](crate::Orientation), not by the
//! ratio itself.
//!
//! ```
//! use diptych::AspectRatio;
//!
//! let r: AspectRatio = "16:9".parse().unwrap();
//! assert_eq!(r, AspectRatio::SixteenNine);
//! assert!((r.value() - 16.0 / 9.0).abs() < 1e-12);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;

/// A frame aspect ratio from the fixed table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    /// 3:2, classic 35mm film.
    #[default]
    ThreeTwo,
    /// 4:3, most compact and micro four-thirds sensors.
    FourThree,
    /// 5:4, large-format prints.
    FiveFour,
    /// 16:9, widescreen.
    SixteenNine,
}

impl AspectRatio {
    /// Every entry, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::ThreeTwo,
        Self::FourThree,
        Self::FiveFour,
        Self::SixteenNine,
    ];

    /// `(long, short)` terms of the ratio.
    pub const fn terms(self) -> (u32, u32) {
        match self {
            Self::ThreeTwo => (3, 2),
            Self::FourThree => (4, 3),
            Self::FiveFour => (5, 4),
            Self::SixteenNine => (16, 9),
        }
    }

    /// Numeric ratio `long / short`.
    pub fn value(self) -> f64 {
        let (long, short) = self.terms();
        long as f64 / short as f64
    }

    /// Table label, e.g. `"3:2"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeTwo => "3:2",
            Self::FourThree => "4:3",
            Self::FiveFour => "5:4",
            Self::SixteenNine => "16:9",
        }
    }

    /// Look up a label in the table.
    pub fn lookup(label: &str) -> Result<Self, LayoutError> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == label)
            .ok_or(LayoutError::UnknownAspectRatio)
    }
}

impl FromStr for AspectRatio {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plain `width / height` of arbitrary dimensions.
pub fn ratio_of(width: f64, height: f64) -> f64 {
    width / height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_wider_than_square() {
        for r in AspectRatio::ALL {
            assert!(r.value() > 1.0, "{r}");
        }
    }

    #[test]
    fn lookup_by_label() {
        assert_eq!(AspectRatio::lookup("3:2"), Ok(AspectRatio::ThreeTwo));
        assert_eq!(AspectRatio::lookup("5:4"), Ok(AspectRatio::FiveFour));
        assert_eq!("4:3".parse(), Ok(AspectRatio::FourThree));
    }

    #[test]
    fn unknown_label_fails() {
        assert_eq!(
            AspectRatio::lookup("1:1"),
            Err(LayoutError::UnknownAspectRatio)
        );
        assert_eq!(
            "2:3".parse::<AspectRatio>(),
            Err(LayoutError::UnknownAspectRatio)
        );
        assert_eq!(AspectRatio::lookup(""), Err(LayoutError::UnknownAspectRatio));
    }

    #[test]
    fn padded_label_is_not_in_table() {
        for padded in [" 5:4 ", "3:2\n", "\t16:9", "4:3 "] {
            assert_eq!(
                AspectRatio::lookup(padded),
                Err(LayoutError::UnknownAspectRatio),
                "{padded:?}"
            );
        }
    }

    #[test]
    fn label_round_trips_through_lookup() {
        for r in AspectRatio::ALL {
            assert_eq!(AspectRatio::lookup(r.label()), Ok(r));
        }
    }

    #[test]
    fn ratio_of_dimensions() {
        assert!((ratio_of(1920.0, 1080.0) - 1.778).abs() < 1e-3);
        assert!((ratio_of(1080.0, 1920.0) - 0.5625).abs() < 1e-4);
        assert_eq!(ratio_of(500.0, 500.0), 1.0);
    }
}
