//! Frame configuration record.
//!
//! Everything the geometry needs is carried explicitly in a [`FrameConfig`]
//! value; there is no shared state. Derived values (dimensions, slots) are
//! recomputed from the record on demand.
//!
//! # Example
//!
//! ```
//! use diptych::{AspectRatio, BorderSetting, FrameConfig, Orientation};
//!
//! let config = FrameConfig::default()
//!     .aspect_ratio(AspectRatio::FourThree)
//!     .orientation(Orientation::Landscape)
//!     .frame_size(1080.0)
//!     .border(BorderSetting::Spacing(30.0));
//!
//! let frame = config.dimensions();
//! assert_eq!(frame.width, 1080.0);
//! assert!((frame.height - 810.0).abs() < 1e-9);
//!
//! let slots = config.slots();
//! assert_eq!(slots.image1.x, 30.0);
//! ```

use crate::aspect::AspectRatio;
use crate::color::BackgroundColor;
use crate::error::LayoutError;
use crate::frame::{FrameDimensions, frame_dimensions};
use crate::layout::{BorderModel, Slots, compute_slots};
use crate::orientation::Orientation;

/// Frame size presets offered for export, in pixels of the longest side.
pub const FRAME_SIZE_PRESETS: [f64; 3] = [1024.0, 2048.0, 4096.0];

/// Longest side used when nothing else is configured.
pub const DEFAULT_FRAME_SIZE: f64 = 2048.0;

/// Default border as a percentage of the longest side.
pub const DEFAULT_BORDER_PERCENTAGE: f64 = 2.0;

/// Smallest accepted border percentage.
pub const MIN_BORDER_PERCENTAGE: f64 = 1.0;

/// Largest accepted border percentage.
pub const MAX_BORDER_PERCENTAGE: f64 = 25.0;

/// Preview width used when the host has not measured its container.
pub const DEFAULT_PREVIEW_WIDTH: f64 = 800.0;

/// How the user expressed the border.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BorderSetting {
    /// Percentage of the longest side; resolves to [`BorderModel::PercentBorder`].
    Percent(f64),
    /// Absolute pixels for margin and gap; resolves to [`BorderModel::UniformSpacing`].
    Spacing(f64),
}

impl Default for BorderSetting {
    fn default() -> Self {
        Self::Percent(DEFAULT_BORDER_PERCENTAGE)
    }
}

/// Everything needed to lay out a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameConfig {
    pub orientation: Orientation,
    pub aspect_ratio: AspectRatio,
    pub background: BackgroundColor,
    /// Longest side in pixels.
    pub frame_size: f64,
    pub border: BorderSetting,
}

impl Default for FrameConfig {
    /// Portrait, 3:2, white, 2048px, 2% border.
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            aspect_ratio: AspectRatio::ThreeTwo,
            background: BackgroundColor::WHITE,
            frame_size: DEFAULT_FRAME_SIZE,
            border: BorderSetting::default(),
        }
    }
}

impl FrameConfig {
    /// Set orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set aspect ratio.
    pub fn aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Set background fill.
    pub fn background(mut self, color: BackgroundColor) -> Self {
        self.background = color;
        self
    }

    /// Set the longest side in pixels.
    pub fn frame_size(mut self, longest_side: f64) -> Self {
        self.frame_size = longest_side;
        self
    }

    /// Set the border directly, without range checks.
    pub fn border(mut self, border: BorderSetting) -> Self {
        self.border = border;
        self
    }

    /// Set a percentage border, clamped to
    /// `MIN_BORDER_PERCENTAGE..=MAX_BORDER_PERCENTAGE`.
    pub fn border_percentage(mut self, percentage: f64) -> Self {
        let clamped = percentage.clamp(MIN_BORDER_PERCENTAGE, MAX_BORDER_PERCENTAGE);
        if clamped != percentage {
            log::debug!("border percentage {percentage} clamped to {clamped}");
        }
        self.border = BorderSetting::Percent(clamped);
        self
    }

    /// Parse and set the orientation from its name.
    pub fn set_orientation_str(&mut self, value: &str) -> Result<(), LayoutError> {
        self.orientation = value.parse()?;
        Ok(())
    }

    /// Parse and set the aspect ratio from its label.
    pub fn set_aspect_ratio_str(&mut self, label: &str) -> Result<(), LayoutError> {
        self.aspect_ratio = AspectRatio::lookup(label)?;
        Ok(())
    }

    /// Parse and set the background from a hex string or preset name.
    pub fn set_background_str(&mut self, value: &str) -> Result<(), LayoutError> {
        self.background = BackgroundColor::parse(value)?;
        Ok(())
    }

    /// Switch between portrait and landscape.
    pub fn toggle_orientation(&mut self) {
        self.orientation = self.orientation.toggled();
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Full-resolution frame dimensions.
    pub fn dimensions(&self) -> FrameDimensions {
        frame_dimensions(self.frame_size, self.aspect_ratio, self.orientation)
    }

    /// Resolve the border setting to pixels.
    ///
    /// Percentages are taken of the longest side of the resolved frame.
    pub fn border_model(&self) -> BorderModel {
        match self.border {
            BorderSetting::Percent(pct) => {
                let frame = self.dimensions();
                BorderModel::percent(frame.width.max(frame.height), pct)
            }
            BorderSetting::Spacing(px) => BorderModel::uniform(px),
        }
    }

    /// Both image slots at full resolution.
    pub fn slots(&self) -> Slots {
        compute_slots(self.dimensions(), self.orientation, self.border_model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::INNER_GAP;

    #[test]
    fn defaults() {
        let c = FrameConfig::default();
        assert_eq!(c.orientation, Orientation::Portrait);
        assert_eq!(c.aspect_ratio, AspectRatio::ThreeTwo);
        assert_eq!(c.background, BackgroundColor::WHITE);
        assert_eq!(c.frame_size, 2048.0);
        assert_eq!(c.border, BorderSetting::Percent(2.0));
    }

    #[test]
    fn default_border_model() {
        // round(2048 * 2 / 100 / 2) = round(20.48) = 20
        assert_eq!(
            FrameConfig::default().border_model(),
            BorderModel::PercentBorder {
                border: 20.0,
                inner_gap: INNER_GAP
            }
        );
    }

    #[test]
    fn border_percentage_clamps() {
        let c = FrameConfig::default().border_percentage(40.0);
        assert_eq!(c.border, BorderSetting::Percent(MAX_BORDER_PERCENTAGE));
        let c = FrameConfig::default().border_percentage(0.0);
        assert_eq!(c.border, BorderSetting::Percent(MIN_BORDER_PERCENTAGE));
        let c = FrameConfig::default().border_percentage(7.5);
        assert_eq!(c.border, BorderSetting::Percent(7.5));
    }

    #[test]
    fn percent_border_uses_longest_side_in_either_orientation() {
        for o in Orientation::ALL {
            let c = FrameConfig::default()
                .frame_size(4000.0)
                .orientation(o)
                .border_percentage(10.0);
            assert_eq!(c.border_model().margin(), 200.0, "{o}");
        }
    }

    #[test]
    fn spacing_border_is_uniform() {
        let c = FrameConfig::default()
            .aspect_ratio(AspectRatio::ThreeTwo)
            .frame_size(4500.0)
            .border(BorderSetting::Spacing(100.0));
        let slots = c.slots();
        // 3000 × 4500 portrait, 100px spacing
        assert_eq!(slots.image1, Rect::new(100.0, 100.0, 2800.0, 2100.0));
        assert_eq!(slots.image2, Rect::new(100.0, 2300.0, 2800.0, 2100.0));
    }

    #[test]
    fn string_setters() {
        let mut c = FrameConfig::default();
        c.set_orientation_str("landscape").unwrap();
        c.set_aspect_ratio_str("16:9").unwrap();
        c.set_background_str("#000").unwrap();
        assert_eq!(c.orientation, Orientation::Landscape);
        assert_eq!(c.aspect_ratio, AspectRatio::SixteenNine);
        assert_eq!(c.background, BackgroundColor::BLACK);
    }

    #[test]
    fn string_setters_leave_config_untouched_on_error() {
        let mut c = FrameConfig::default();
        assert_eq!(
            c.set_orientation_str("sideways"),
            Err(LayoutError::InvalidOrientation)
        );
        assert_eq!(
            c.set_aspect_ratio_str("1:1"),
            Err(LayoutError::UnknownAspectRatio)
        );
        assert_eq!(c.set_background_str("nope"), Err(LayoutError::InvalidColor));
        assert_eq!(c, FrameConfig::default());
    }

    #[test]
    fn toggle_and_reset() {
        let mut c = FrameConfig::default().frame_size(1024.0);
        c.toggle_orientation();
        assert_eq!(c.orientation, Orientation::Landscape);
        assert_eq!(c.dimensions().width, 1024.0);
        c.toggle_orientation();
        assert_eq!(c.orientation, Orientation::Portrait);
        c.reset();
        assert_eq!(c, FrameConfig::default());
    }

    #[test]
    fn presets_contain_default() {
        assert!(FRAME_SIZE_PRESETS.contains(&DEFAULT_FRAME_SIZE));
    }
}
