//! Core geometry types for style resolution
//!
//! All units are document points (1pt = 1/72 inch) unless otherwise noted.
//! The coordinate system has its origin at the top-left corner of the page:
//! positive X extends right, positive Y extends down.

use std::fmt;

/// A 2D size in document points
///
/// Used for page sizes and container sizes during unit flattening.
///
/// # Examples
///
/// ```
/// use docstyle::Size;
///
/// let a4 = Size::new(595.0, 842.0);
/// assert_eq!(a4.width, 595.0);
/// assert_eq!(Size::ZERO.width, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width (horizontal extent) in points
    pub width: f32,
    /// Height (vertical extent) in points
    pub height: f32,
}

impl Size {
    /// A size with zero width and height
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size with the given dimensions
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns a copy with width and height swapped
    ///
    /// Used when a page style flips orientation.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt x {}pt", self.width, self.height)
    }
}

/// Per-side offsets in document points
///
/// The resolved form of margins, padding and border widths after the
/// cascade has flattened relative units.
///
/// # Examples
///
/// ```
/// use docstyle::Thickness;
///
/// let margins = Thickness::uniform(10.0);
/// assert_eq!(margins.left, 10.0);
/// assert_eq!(margins.horizontal(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    /// Top offset in points
    pub top: f32,
    /// Right offset in points
    pub right: f32,
    /// Bottom offset in points
    pub bottom: f32,
    /// Left offset in points
    pub left: f32,
}

impl Thickness {
    /// Zero thickness on all sides
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Creates a thickness with individual side values
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a thickness with the same value on all sides
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total of the left and right offsets
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Total of the top and bottom offsets
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Returns true if all four sides are zero
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[t:{} r:{} b:{} l:{}]",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_zero_and_new() {
        assert_eq!(Size::ZERO, Size::new(0.0, 0.0));
        let size = Size::new(612.0, 792.0);
        assert_eq!(size.width, 612.0);
        assert_eq!(size.height, 792.0);
    }

    #[test]
    fn size_degenerate() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(-1.0, 10.0).is_degenerate());
        assert!(!Size::new(10.0, 10.0).is_degenerate());
    }

    #[test]
    fn size_transposed() {
        let portrait = Size::new(595.0, 842.0);
        let landscape = portrait.transposed();
        assert_eq!(landscape, Size::new(842.0, 595.0));
    }

    #[test]
    fn thickness_uniform_and_totals() {
        let t = Thickness::uniform(5.0);
        assert_eq!(t.horizontal(), 10.0);
        assert_eq!(t.vertical(), 10.0);
        assert!(!t.is_zero());
        assert!(Thickness::ZERO.is_zero());
    }

    #[test]
    fn thickness_individual_sides() {
        let t = Thickness::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t.top, 1.0);
        assert_eq!(t.right, 2.0);
        assert_eq!(t.bottom, 3.0);
        assert_eq!(t.left, 4.0);
    }
}
