//! Full-resolution frame dimensions from `(longest side, aspect ratio, orientation)`.
//!
//! # Example
//!
//! ```
//! use diptych::{AspectRatio, Orientation, frame_dimensions};
//!
//! // 1080px longest side, 4:3, portrait → 810 × 1080
//! let size = frame_dimensions(1080.0, AspectRatio::FourThree, Orientation::Portrait);
//! assert_eq!(size.height, 1080.0);
//! assert!((size.width - 810.0).abs() < 1e-9);
//! ```

use crate::aspect::AspectRatio;
use crate::error::LayoutError;
use crate::geometry::Size;
use crate::orientation::Orientation;

/// Frame width and height in full-resolution pixels.
pub type FrameDimensions = Size;

/// Derive frame dimensions.
///
/// The axis selected by `orientation` is exactly `longest_side`; the other is
/// `longest_side / ratio`. Pure: the result depends only on the arguments.
pub fn frame_dimensions(
    longest_side: f64,
    ratio: AspectRatio,
    orientation: Orientation,
) -> FrameDimensions {
    let short_side = longest_side / ratio.value();
    let size = match orientation {
        Orientation::Portrait => Size::new(short_side, longest_side),
        Orientation::Landscape => Size::new(longest_side, short_side),
    };
    log::trace!(
        "frame {longest_side}px {ratio} {orientation} -> {}x{}",
        size.width,
        size.height
    );
    size
}

/// String-boundary form of [`frame_dimensions`].
///
/// The aspect ratio label is resolved first, so a call with both arguments
/// invalid reports [`LayoutError::UnknownAspectRatio`].
pub fn compute_frame_dimensions(
    longest_side: f64,
    aspect_ratio: &str,
    orientation: &str,
) -> Result<FrameDimensions, LayoutError> {
    let ratio = AspectRatio::lookup(aspect_ratio)?;
    let orientation = orientation.parse::<Orientation>()?;
    Ok(frame_dimensions(longest_side, ratio, orientation))
}

/// Single-entry cache for [`frame_dimensions`].
///
/// Keyed on the full input triple; any change to any input is a miss.
#[derive(Clone, Debug, Default)]
pub struct FrameGeometryMemo {
    last: Option<(MemoKey, FrameDimensions)>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct MemoKey {
    longest_side_bits: u64,
    ratio: AspectRatio,
    orientation: Orientation,
}

impl FrameGeometryMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dimensions for this key, recomputing on a miss.
    pub fn get(
        &mut self,
        longest_side: f64,
        ratio: AspectRatio,
        orientation: Orientation,
    ) -> FrameDimensions {
        let key = MemoKey {
            longest_side_bits: longest_side.to_bits(),
            ratio,
            orientation,
        };
        if let Some((cached_key, size)) = self.last
            && cached_key == key
        {
            log::debug!("frame geometry memo hit");
            return size;
        }
        log::debug!("frame geometry memo miss");
        let size = frame_dimensions(longest_side, ratio, orientation);
        self.last = Some((key, size));
        size
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Whether an entry is cached.
    pub fn is_warm(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        num_traits::Float::abs(a - b) < 1e-9
    }

    // ── frame_dimensions ────────────────────────────────────────────────

    #[test]
    fn portrait_3_2_at_2048() {
        let s = frame_dimensions(2048.0, AspectRatio::ThreeTwo, Orientation::Portrait);
        assert_eq!(s.height, 2048.0);
        assert!(close(s.width, 2048.0 / 1.5));
        assert!((s.width - 1365.33).abs() < 0.01);
    }

    #[test]
    fn landscape_4_3_at_1080() {
        let s = frame_dimensions(1080.0, AspectRatio::FourThree, Orientation::Landscape);
        assert_eq!(s.width, 1080.0);
        assert!(close(s.height, 810.0));
    }

    #[test]
    fn orientations_are_transposes() {
        for r in AspectRatio::ALL {
            let p = frame_dimensions(4096.0, r, Orientation::Portrait);
            let l = frame_dimensions(4096.0, r, Orientation::Landscape);
            assert_eq!(p.width, l.height, "{r}");
            assert_eq!(p.height, l.width, "{r}");
        }
    }

    // ── compute_frame_dimensions ────────────────────────────────────────

    #[test]
    fn string_form_matches_typed_form() {
        let s = compute_frame_dimensions(2048.0, "16:9", "landscape").unwrap();
        assert_eq!(
            s,
            frame_dimensions(2048.0, AspectRatio::SixteenNine, Orientation::Landscape)
        );
    }

    #[test]
    fn unknown_ratio() {
        assert_eq!(
            compute_frame_dimensions(2048.0, "7:5", "portrait"),
            Err(LayoutError::UnknownAspectRatio)
        );
    }

    #[test]
    fn invalid_orientation() {
        assert_eq!(
            compute_frame_dimensions(2048.0, "3:2", "diagonal"),
            Err(LayoutError::InvalidOrientation)
        );
    }

    #[test]
    fn ratio_checked_before_orientation() {
        assert_eq!(
            compute_frame_dimensions(2048.0, "nope", "nope"),
            Err(LayoutError::UnknownAspectRatio)
        );
    }

    // ── memo ────────────────────────────────────────────────────────────

    #[test]
    fn memo_returns_same_value_as_direct_call() {
        let mut memo = FrameGeometryMemo::new();
        assert!(!memo.is_warm());
        let a = memo.get(2048.0, AspectRatio::FiveFour, Orientation::Portrait);
        assert!(memo.is_warm());
        let b = memo.get(2048.0, AspectRatio::FiveFour, Orientation::Portrait);
        assert_eq!(a, b);
        assert_eq!(
            a,
            frame_dimensions(2048.0, AspectRatio::FiveFour, Orientation::Portrait)
        );
    }

    #[test]
    fn memo_recomputes_when_any_input_changes() {
        let mut memo = FrameGeometryMemo::new();
        let base = memo.get(2048.0, AspectRatio::ThreeTwo, Orientation::Portrait);
        let flipped = memo.get(2048.0, AspectRatio::ThreeTwo, Orientation::Landscape);
        assert_eq!(flipped.width, base.height);
        let resized = memo.get(1024.0, AspectRatio::ThreeTwo, Orientation::Landscape);
        assert_eq!(resized.width, 1024.0);
        let reratioed = memo.get(1024.0, AspectRatio::SixteenNine, Orientation::Landscape);
        assert!(close(reratioed.height, 576.0));
        memo.clear();
        assert!(!memo.is_warm());
    }
}
