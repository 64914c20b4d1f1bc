//! Rectangle and size records shared by every stage of the layout.
//!
//! All values are `f64` pixels. Nothing here clamps: a rectangle derived from
//! an oversized border can have zero or negative extent, and that is carried
//! through unchanged so callers can decide whether to draw it.

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Both sides strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Multiply both sides by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Axis-aligned rectangle. `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels. May be zero or negative for degenerate layouts.
    pub width: f64,
    /// Height in pixels. May be zero or negative for degenerate layouts.
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Width and height as a [`Size`].
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shift by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Multiply every field by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Whether there is anything to draw (both sides strictly positive).
    pub fn is_drawable(&self) -> bool {
        self.size().is_positive()
    }

    /// Whether the interiors of two rects intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether `other` lies inside `self`, allowing `epsilon` slack on every edge.
    pub fn contains(&self, other: &Rect, epsilon: f64) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.right() <= self.right() + epsilon
            && other.bottom() <= self.bottom() + epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn scale_applies_to_position_and_size() {
        let r = Rect::new(100.0, 50.0, 200.0, 400.0).scale(0.5);
        assert_eq!(r, Rect::new(50.0, 25.0, 100.0, 200.0));
    }

    #[test]
    fn negative_extent_is_not_drawable() {
        assert!(!Rect::new(0.0, 0.0, -5.0, 10.0).is_drawable());
        assert!(!Rect::new(0.0, 0.0, 10.0, 0.0).is_drawable());
        assert!(Rect::new(0.0, 0.0, 0.5, 0.5).is_drawable());
    }

    #[test]
    fn contains_with_slack() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0000001, 50.0), 1e-6));
        assert!(!outer.contains(&Rect::new(-1.0, 0.0, 10.0, 10.0), 1e-6));
    }
}
