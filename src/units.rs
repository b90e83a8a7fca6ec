//! Measurement units and relative-unit flattening
//!
//! Style values that describe distances are stored as a [`Unit`]: a magnitude
//! plus a dimension. Dimensions are either absolute (points, pixels,
//! millimetres, inches) or relative (`%`, `em`, `rem`, `auto`). Relative
//! dimensions cannot be used by layout directly; the cascade *flattens* them
//! into points once the page size, container size and font sizes are known.
//!
//! # Units
//!
//! - **pt**: document points, 1/72 inch. The canonical absolute unit.
//! - **px**: CSS reference pixels at 96dpi, so 1px = 0.75pt.
//! - **mm** / **in**: physical units, converted through points.
//! - **%**: percentage of the flattening base (container width or height, or
//!   the current font size for font-relative keys).
//! - **em** / **rem**: multiples of the current / root font size.
//! - **auto**: resolves to the full extent of the flattening base.
//!
//! # Examples
//!
//! ```
//! use docstyle::{FlattenContext, RelativeBase, Size, Unit};
//!
//! let ctx = FlattenContext::new(Size::new(595.0, 842.0), Size::new(400.0, 600.0), 12.0, 12.0);
//! let half = Unit::percent(50.0).flatten(&ctx, RelativeBase::Width);
//! assert_eq!(half, Unit::pt(200.0));
//! ```

use crate::geometry::Size;
use std::fmt;

/// Points per CSS reference pixel (96dpi)
const PT_PER_PX: f32 = 72.0 / 96.0;
/// Points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;
/// Points per inch
const PT_PER_IN: f32 = 72.0;

/// The dimension of a [`Unit`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Document points (1/72 inch)
    Pt,
    /// CSS pixels (1/96 inch)
    Px,
    /// Millimetres
    Mm,
    /// Inches
    In,
    /// Percentage of the flattening base
    Percent,
    /// Multiple of the current font size
    Em,
    /// Multiple of the root font size
    Rem,
    /// The full extent of the flattening base
    Auto,
}

impl Dimension {
    /// Returns true if values in this dimension need a flattening context
    pub fn is_relative(self) -> bool {
        matches!(self, Self::Percent | Self::Em | Self::Rem | Self::Auto)
    }
}

/// What a relative unit resolves against during flattening
///
/// Every relative-capable style key declares one of these in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeBase {
    /// Container width (horizontal distances)
    Width,
    /// Container height (vertical distances)
    Height,
    /// Current font size (font-size itself, so `150%` scales the parent size)
    FontSize,
}

/// The measurements available when relative units are flattened
///
/// Built by the style stack once the effective position mode has selected a
/// container; see [`StyleStack::get_full_style`](crate::stack::StyleStack::get_full_style).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenContext {
    /// Size of the page being laid out
    pub page_size: Size,
    /// Size of the containing block for the current node
    pub container_size: Size,
    /// Font size of the current node, in points
    pub font_size: f32,
    /// Font size of the document root, in points
    pub root_font_size: f32,
}

impl FlattenContext {
    /// Creates a flattening context from known metrics
    pub const fn new(page_size: Size, container_size: Size, font_size: f32, root_font_size: f32) -> Self {
        Self {
            page_size,
            container_size,
            font_size,
            root_font_size,
        }
    }

    /// The extent a percentage or auto value resolves against
    pub fn base_extent(&self, base: RelativeBase) -> f32 {
        match base {
            RelativeBase::Width => self.container_size.width,
            RelativeBase::Height => self.container_size.height,
            RelativeBase::FontSize => self.font_size,
        }
    }
}

/// A style measurement: magnitude plus dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// The magnitude; meaningless for `auto`
    pub value: f32,
    /// The dimension of the magnitude
    pub dim: Dimension,
}

impl Unit {
    /// A zero-point unit
    pub const ZERO: Self = Self {
        value: 0.0,
        dim: Dimension::Pt,
    };

    /// Creates a unit in points
    pub const fn pt(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::Pt,
        }
    }

    /// Creates a unit in CSS pixels
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::Px,
        }
    }

    /// Creates a unit in millimetres
    pub const fn mm(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::Mm,
        }
    }

    /// Creates a unit in inches
    pub const fn inches(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::In,
        }
    }

    /// Creates a percentage unit (`50.0` means 50%)
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::Percent,
        }
    }

    /// Creates a unit in em (multiples of the current font size)
    pub const fn em(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::Em,
        }
    }

    /// Creates a unit in rem (multiples of the root font size)
    pub const fn rem(value: f32) -> Self {
        Self {
            value,
            dim: Dimension::Rem,
        }
    }

    /// Creates an `auto` unit
    pub const fn auto() -> Self {
        Self {
            value: 0.0,
            dim: Dimension::Auto,
        }
    }

    /// Returns true if this unit needs a flattening context to resolve
    pub fn is_relative(self) -> bool {
        self.dim.is_relative()
    }

    /// Returns true if this is the `auto` keyword
    pub fn is_auto(self) -> bool {
        self.dim == Dimension::Auto
    }

    /// Returns true if the magnitude is zero (auto is never zero)
    pub fn is_zero(self) -> bool {
        !self.is_auto() && self.value == 0.0
    }

    /// The value in points
    ///
    /// Absolute dimensions convert exactly. Relative dimensions have no
    /// context here and return the raw magnitude; flatten first if the value
    /// may be relative.
    pub fn points(self) -> f32 {
        match self.dim {
            Dimension::Pt => self.value,
            Dimension::Px => self.value * PT_PER_PX,
            Dimension::Mm => self.value * PT_PER_MM,
            Dimension::In => self.value * PT_PER_IN,
            Dimension::Percent | Dimension::Em | Dimension::Rem | Dimension::Auto => self.value,
        }
    }

    /// Resolves this unit to an absolute point value
    ///
    /// - `%` and `auto` resolve against the base extent from the context
    /// - `em` and `rem` scale the current / root font size
    /// - absolute units convert directly
    pub fn resolve(self, ctx: &FlattenContext, base: RelativeBase) -> f32 {
        match self.dim {
            Dimension::Percent => ctx.base_extent(base) * self.value / 100.0,
            Dimension::Em => ctx.font_size * self.value,
            Dimension::Rem => ctx.root_font_size * self.value,
            Dimension::Auto => ctx.base_extent(base),
            _ => self.points(),
        }
    }

    /// Flattens this unit into an absolute point unit
    ///
    /// Absolute units pass through unchanged (no conversion, so authored
    /// dimensions survive round-trips); relative units are replaced with their
    /// resolved point value.
    pub fn flatten(self, ctx: &FlattenContext, base: RelativeBase) -> Unit {
        if self.is_relative() {
            Unit::pt(self.resolve(ctx, base))
        } else {
            self
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dim {
            Dimension::Pt => write!(f, "{}pt", self.value),
            Dimension::Px => write!(f, "{}px", self.value),
            Dimension::Mm => write!(f, "{}mm", self.value),
            Dimension::In => write!(f, "{}in", self.value),
            Dimension::Percent => write!(f, "{}%", self.value),
            Dimension::Em => write!(f, "{}em", self.value),
            Dimension::Rem => write!(f, "{}rem", self.value),
            Dimension::Auto => write!(f, "auto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FlattenContext {
        FlattenContext::new(Size::new(595.0, 842.0), Size::new(400.0, 200.0), 12.0, 16.0)
    }

    #[test]
    fn absolute_conversions() {
        assert_eq!(Unit::pt(72.0).points(), 72.0);
        assert_eq!(Unit::inches(1.0).points(), 72.0);
        assert_eq!(Unit::px(96.0).points(), 72.0);
        let mm = Unit::mm(25.4).points();
        assert!((mm - 72.0).abs() < 0.001);
    }

    #[test]
    fn percent_resolves_against_base_axis() {
        assert_eq!(Unit::percent(50.0).resolve(&ctx(), RelativeBase::Width), 200.0);
        assert_eq!(Unit::percent(50.0).resolve(&ctx(), RelativeBase::Height), 100.0);
        assert_eq!(Unit::percent(150.0).resolve(&ctx(), RelativeBase::FontSize), 18.0);
    }

    #[test]
    fn percent_of_zero_container_is_zero() {
        let degenerate = FlattenContext::new(Size::ZERO, Size::ZERO, 12.0, 12.0);
        assert_eq!(Unit::percent(50.0).resolve(&degenerate, RelativeBase::Width), 0.0);
    }

    #[test]
    fn em_and_rem_scale_font_sizes() {
        assert_eq!(Unit::em(2.0).resolve(&ctx(), RelativeBase::Width), 24.0);
        assert_eq!(Unit::rem(2.0).resolve(&ctx(), RelativeBase::Width), 32.0);
    }

    #[test]
    fn auto_resolves_to_base_extent() {
        assert_eq!(Unit::auto().resolve(&ctx(), RelativeBase::Width), 400.0);
        assert_eq!(Unit::auto().resolve(&ctx(), RelativeBase::Height), 200.0);
    }

    #[test]
    fn flatten_leaves_absolute_untouched() {
        let authored = Unit::mm(10.0);
        assert_eq!(authored.flatten(&ctx(), RelativeBase::Width), authored);
    }

    #[test]
    fn flatten_replaces_relative_with_points() {
        let flat = Unit::percent(25.0).flatten(&ctx(), RelativeBase::Width);
        assert_eq!(flat, Unit::pt(100.0));
        assert!(!flat.is_relative());
    }

    #[test]
    fn auto_is_not_zero() {
        assert!(!Unit::auto().is_zero());
        assert!(Unit::pt(0.0).is_zero());
        assert!(Unit::em(0.0).is_zero());
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", Unit::pt(12.0)), "12pt");
        assert_eq!(format!("{}", Unit::percent(50.0)), "50%");
        assert_eq!(format!("{}", Unit::em(1.5)), "1.5em");
        assert_eq!(format!("{}", Unit::auto()), "auto");
    }
}
