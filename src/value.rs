//! Style value payloads
//!
//! The key/value store holds every property as a [`StyleValue`]: a tagged
//! [`PropertyValue`] union plus the cascade priority that governs merge
//! overrides. Typed access goes through [`StyleKey<T>`](crate::schema::StyleKey),
//! whose type parameter picks the matching variant via [`PropertyType`].

use crate::counters::CounterValue;
use crate::units::Unit;
use std::fmt;

/// An RGBA colour with 8-bit channels
///
/// # Examples
///
/// ```
/// use docstyle::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert!(red.is_visible());
/// assert!(!Color::TRANSPARENT.is_visible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque black
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Opaque white
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Creates an opaque colour from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a colour from RGBA channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true if the colour has any opacity at all
    pub fn is_visible(self) -> bool {
        self.a > 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// How a border or stroke line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineType {
    /// No line
    #[default]
    None,
    /// Continuous line
    Solid,
    /// Dashed line, pattern taken from the dash value on the same item
    Dash,
}

/// A dash pattern: on/off run lengths in points plus a starting phase
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dash {
    /// Alternating on/off lengths; empty means no dash
    pub pattern: Vec<f32>,
    /// Offset into the pattern where drawing starts
    pub phase: f32,
}

impl Dash {
    /// Creates a dash from a pattern with zero phase
    pub fn new(pattern: Vec<f32>) -> Self {
        Self { pattern, phase: 0.0 }
    }

    /// Returns true if this dash draws a plain solid line
    pub fn is_none(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// How a node is positioned relative to its container
///
/// Decides which container a node sizes against during flattening:
/// `Fixed` uses the page, `Absolute` uses the nearest relatively positioned
/// ancestor, everything else uses the normal-flow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Normal flow, full available width (default)
    #[default]
    Block,
    /// Normal flow, sized to content, laid inline with text
    Inline,
    /// Inline placement with block sizing
    InlineBlock,
    /// Normal flow position, but offset by x/y
    Relative,
    /// Out of flow, positioned against the nearest relative ancestor
    Absolute,
    /// Out of flow, positioned against the page
    Fixed,
}

impl PositionMode {
    /// Returns true for modes that remove the node from normal flow
    pub fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// Horizontal alignment of content within its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment of content within its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Text decoration flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    StrikeThrough,
    Overline,
}

/// What happens when content does not fit its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowAction {
    /// Continue onto a new page or column (default)
    #[default]
    NewPage,
    /// Clip the overflowing content
    Clip,
    /// Drop the overflowing content entirely
    Truncate,
    /// Let content spill out of the container
    None,
}

/// Whether a node's content may be split across containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowSplit {
    /// Split anywhere (default)
    #[default]
    Any,
    /// Keep the node's content together
    Never,
}

/// Numbering style for page numbers and list markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// 1, 2, 3 (default)
    #[default]
    Decimal,
    /// I, II, III
    UpperRoman,
    /// i, ii, iii
    LowerRoman,
    /// A, B, C
    UpperAlpha,
    /// a, b, c
    LowerAlpha,
    /// A plain bullet marker
    Bullet,
    /// No marker at all
    None,
}

/// The tagged union of everything a style key can hold
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Unit(Unit),
    Number(f32),
    Integer(i32),
    Boolean(bool),
    Text(String),
    Color(Color),
    Line(LineType),
    Dash(Dash),
    Position(PositionMode),
    HAlign(HorizontalAlign),
    VAlign(VerticalAlign),
    Decoration(TextDecoration),
    OverflowAction(OverflowAction),
    OverflowSplit(OverflowSplit),
    NumberStyle(NumberStyle),
    Counter(CounterValue),
}

impl PropertyValue {
    /// Short tag name, used in panic messages for type mismatches
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unit(_) => "unit",
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Line(_) => "line",
            Self::Dash(_) => "dash",
            Self::Position(_) => "position",
            Self::HAlign(_) => "h-align",
            Self::VAlign(_) => "v-align",
            Self::Decoration(_) => "decoration",
            Self::OverflowAction(_) => "overflow-action",
            Self::OverflowSplit(_) => "overflow-split",
            Self::NumberStyle(_) => "number-style",
            Self::Counter(_) => "counter",
        }
    }
}

/// A stored value plus its cascade priority
///
/// Priority decides merge overrides: an incoming value replaces an existing
/// one when its priority is equal or higher, so later equal-priority merges
/// win (declaration order breaks ties).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleValue {
    /// The payload
    pub value: PropertyValue,
    /// Cascade priority; 0 for plain values, 10 for named-selector matches
    pub priority: i32,
}

impl StyleValue {
    /// Creates a value with the default priority of 0
    pub fn new(value: PropertyValue) -> Self {
        Self { value, priority: 0 }
    }

    /// Creates a value with an explicit priority
    pub fn with_priority(value: PropertyValue, priority: i32) -> Self {
        Self { value, priority }
    }
}

/// Conversion between a Rust type and its [`PropertyValue`] variant
///
/// Implemented for every payload type so [`StyleKey<T>`](crate::schema::StyleKey)
/// can read and write the store without callers matching on the union.
pub trait PropertyType: Sized {
    /// Wraps this value in its variant
    fn into_property(self) -> PropertyValue;
    /// Extracts this type from a stored value, if the variant matches
    fn from_property(value: &PropertyValue) -> Option<Self>;
}

macro_rules! property_type {
    ($ty:ty, $variant:ident) => {
        impl PropertyType for $ty {
            fn into_property(self) -> PropertyValue {
                PropertyValue::$variant(self)
            }

            fn from_property(value: &PropertyValue) -> Option<Self> {
                match value {
                    PropertyValue::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

property_type!(Unit, Unit);
property_type!(f32, Number);
property_type!(i32, Integer);
property_type!(bool, Boolean);
property_type!(String, Text);
property_type!(Color, Color);
property_type!(LineType, Line);
property_type!(Dash, Dash);
property_type!(PositionMode, Position);
property_type!(HorizontalAlign, HAlign);
property_type!(VerticalAlign, VAlign);
property_type!(TextDecoration, Decoration);
property_type!(OverflowAction, OverflowAction);
property_type!(OverflowSplit, OverflowSplit);
property_type!(NumberStyle, NumberStyle);
property_type!(CounterValue, Counter);
