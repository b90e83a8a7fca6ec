//! The style property schema
//!
//! Every property the cascade knows about is declared here once: its stable
//! [`KeyId`], its attribute name, whether it inherits, and what (if
//! anything) its relative units resolve against. Typed access goes through
//! the [`StyleKey`] constants, which couple a `KeyId` to the Rust type of
//! its payload.
//!
//! Logical groups of properties ("margins", "font", the four border sides)
//! are described by [`ItemKind`] tables of `{attribute, key, default}`
//! entries. One generic view over these tables (see [`crate::item`])
//! replaces a hand-written accessor class per group.

use crate::units::{RelativeBase, Unit};
use crate::value::{
    Color, Dash, HorizontalAlign, LineType, NumberStyle, OverflowAction, OverflowSplit,
    PositionMode, PropertyType, PropertyValue, TextDecoration, VerticalAlign,
};
use std::marker::PhantomData;

/// Default font size in points when nothing in the cascade sets one
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default font family when nothing in the cascade sets one
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Default page size (A4 portrait) in points
pub const DEFAULT_PAGE_WIDTH: f32 = 595.0;
/// Default page size (A4 portrait) in points
pub const DEFAULT_PAGE_HEIGHT: f32 = 842.0;

/// Default gap between columns in points
pub const DEFAULT_ALLEY_WIDTH: f32 = 10.0;

/// Identity of a style property
///
/// Ids are stable across releases; values merged from one style to another
/// carry their id, so two styles always agree on what a key means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyId {
    // Position
    PositionMode,
    X,
    Y,
    FullWidth,
    // Size
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    // Margins
    MarginAll,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    // Padding
    PaddingAll,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    // Border (base values apply to any side without its own)
    BorderColor,
    BorderWidth,
    BorderLine,
    BorderDash,
    BorderTopColor,
    BorderTopWidth,
    BorderTopLine,
    BorderTopDash,
    BorderRightColor,
    BorderRightWidth,
    BorderRightLine,
    BorderRightDash,
    BorderBottomColor,
    BorderBottomWidth,
    BorderBottomLine,
    BorderBottomDash,
    BorderLeftColor,
    BorderLeftWidth,
    BorderLeftLine,
    BorderLeftDash,
    // Fill and background
    FillColor,
    FillOpacity,
    BackgroundColor,
    // Font
    FontFamily,
    FontSize,
    FontBold,
    FontItalic,
    // Text
    TextLeading,
    TextAlign,
    VerticalAlign,
    TextDecoration,
    WordSpacing,
    CharSpacing,
    TextWrap,
    // Overflow
    OverflowAction,
    OverflowSplit,
    // Columns
    ColumnCount,
    AlleyWidth,
    // Page
    PageWidth,
    PageHeight,
    PageNumberStyle,
    PageNumberStart,
    PageNumberFormat,
    PageNumberGroupFormat,
    // Lists and counters
    ListNumberStyle,
    ListPrefix,
    ListPostfix,
    CounterReset,
    CounterIncrement,
    // Document outline (bookmarks)
    Outlined,
    OutlineTitle,
}

impl KeyId {
    /// The attribute name used in style declarations
    pub fn name(self) -> &'static str {
        match self {
            Self::PositionMode => "position-mode",
            Self::X => "x",
            Self::Y => "y",
            Self::FullWidth => "full-width",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::MaxWidth => "max-width",
            Self::MaxHeight => "max-height",
            Self::MarginAll => "margin",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::PaddingAll => "padding",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::BorderColor => "border-color",
            Self::BorderWidth => "border-width",
            Self::BorderLine => "border-line",
            Self::BorderDash => "border-dash",
            Self::BorderTopColor => "border-top-color",
            Self::BorderTopWidth => "border-top-width",
            Self::BorderTopLine => "border-top-line",
            Self::BorderTopDash => "border-top-dash",
            Self::BorderRightColor => "border-right-color",
            Self::BorderRightWidth => "border-right-width",
            Self::BorderRightLine => "border-right-line",
            Self::BorderRightDash => "border-right-dash",
            Self::BorderBottomColor => "border-bottom-color",
            Self::BorderBottomWidth => "border-bottom-width",
            Self::BorderBottomLine => "border-bottom-line",
            Self::BorderBottomDash => "border-bottom-dash",
            Self::BorderLeftColor => "border-left-color",
            Self::BorderLeftWidth => "border-left-width",
            Self::BorderLeftLine => "border-left-line",
            Self::BorderLeftDash => "border-left-dash",
            Self::FillColor => "fill-color",
            Self::FillOpacity => "fill-opacity",
            Self::BackgroundColor => "background-color",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontBold => "font-bold",
            Self::FontItalic => "font-italic",
            Self::TextLeading => "text-leading",
            Self::TextAlign => "text-align",
            Self::VerticalAlign => "vertical-align",
            Self::TextDecoration => "text-decoration",
            Self::WordSpacing => "word-spacing",
            Self::CharSpacing => "char-spacing",
            Self::TextWrap => "text-wrap",
            Self::OverflowAction => "overflow-action",
            Self::OverflowSplit => "overflow-split",
            Self::ColumnCount => "column-count",
            Self::AlleyWidth => "alley-width",
            Self::PageWidth => "page-width",
            Self::PageHeight => "page-height",
            Self::PageNumberStyle => "page-number-style",
            Self::PageNumberStart => "page-number-start",
            Self::PageNumberFormat => "page-number-format",
            Self::PageNumberGroupFormat => "page-number-group-format",
            Self::ListNumberStyle => "list-number-style",
            Self::ListPrefix => "list-prefix",
            Self::ListPostfix => "list-postfix",
            Self::CounterReset => "counter-reset",
            Self::CounterIncrement => "counter-increment",
            Self::Outlined => "outlined",
            Self::OutlineTitle => "outline-title",
        }
    }

    /// Whether a value for this key passes from parent to child when the
    /// child does not set it
    ///
    /// Typography and ink inherit; box geometry, borders, pages and overflow
    /// behaviour do not.
    pub fn is_inherited(self) -> bool {
        matches!(
            self,
            Self::FillColor
                | Self::FontFamily
                | Self::FontSize
                | Self::FontBold
                | Self::FontItalic
                | Self::TextLeading
                | Self::TextAlign
                | Self::TextDecoration
                | Self::WordSpacing
                | Self::CharSpacing
                | Self::TextWrap
                | Self::ListNumberStyle
        )
    }

    /// What relative units stored under this key resolve against, or `None`
    /// for keys that can never hold a relative value
    pub fn relative_base(self) -> Option<RelativeBase> {
        match self {
            Self::X
            | Self::Width
            | Self::MinWidth
            | Self::MaxWidth
            | Self::MarginAll
            | Self::MarginLeft
            | Self::MarginRight
            | Self::PaddingAll
            | Self::PaddingLeft
            | Self::PaddingRight
            | Self::BorderWidth
            | Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth
            | Self::AlleyWidth
            | Self::PageWidth => Some(RelativeBase::Width),
            Self::Y
            | Self::Height
            | Self::MinHeight
            | Self::MaxHeight
            | Self::MarginTop
            | Self::MarginBottom
            | Self::PaddingTop
            | Self::PaddingBottom
            | Self::PageHeight => Some(RelativeBase::Height),
            Self::FontSize | Self::TextLeading | Self::WordSpacing | Self::CharSpacing => {
                Some(RelativeBase::FontSize)
            }
            _ => None,
        }
    }
}

/// A typed handle to a style property
///
/// Couples a [`KeyId`] with the Rust type stored under it, so reads and
/// writes through [`Style`](crate::style::Style) never match on the value
/// union by hand.
///
/// # Examples
///
/// ```
/// use docstyle::{keys, Style, Unit};
///
/// let mut style = Style::new();
/// style.set_value(&keys::FONT_SIZE, Unit::pt(14.0));
/// assert_eq!(style.value(&keys::FONT_SIZE), Some(Unit::pt(14.0)));
/// ```
#[derive(Debug)]
pub struct StyleKey<T: PropertyType + 'static> {
    /// The key's identity in the store
    pub id: KeyId,
    marker: PhantomData<fn() -> T>,
}

impl<T: PropertyType + 'static> StyleKey<T> {
    /// Creates the typed handle for a key id
    pub const fn new(id: KeyId) -> Self {
        Self {
            id,
            marker: PhantomData,
        }
    }

    /// The attribute name of this key
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Whether this key inherits; see [`KeyId::is_inherited`]
    pub fn is_inherited(&self) -> bool {
        self.id.is_inherited()
    }

    /// Whether values under this key may be unit-relative
    pub fn can_be_relative(&self) -> bool {
        self.id.relative_base().is_some()
    }
}

/// Typed key constants, one per schema entry
pub mod keys {
    use super::*;
    use crate::counters::CounterValue;

    pub const POSITION_MODE: StyleKey<PositionMode> = StyleKey::new(KeyId::PositionMode);
    pub const X: StyleKey<Unit> = StyleKey::new(KeyId::X);
    pub const Y: StyleKey<Unit> = StyleKey::new(KeyId::Y);
    pub const FULL_WIDTH: StyleKey<bool> = StyleKey::new(KeyId::FullWidth);

    pub const WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::Width);
    pub const HEIGHT: StyleKey<Unit> = StyleKey::new(KeyId::Height);
    pub const MIN_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::MinWidth);
    pub const MIN_HEIGHT: StyleKey<Unit> = StyleKey::new(KeyId::MinHeight);
    pub const MAX_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::MaxWidth);
    pub const MAX_HEIGHT: StyleKey<Unit> = StyleKey::new(KeyId::MaxHeight);

    pub const MARGIN_ALL: StyleKey<Unit> = StyleKey::new(KeyId::MarginAll);
    pub const MARGIN_TOP: StyleKey<Unit> = StyleKey::new(KeyId::MarginTop);
    pub const MARGIN_RIGHT: StyleKey<Unit> = StyleKey::new(KeyId::MarginRight);
    pub const MARGIN_BOTTOM: StyleKey<Unit> = StyleKey::new(KeyId::MarginBottom);
    pub const MARGIN_LEFT: StyleKey<Unit> = StyleKey::new(KeyId::MarginLeft);

    pub const PADDING_ALL: StyleKey<Unit> = StyleKey::new(KeyId::PaddingAll);
    pub const PADDING_TOP: StyleKey<Unit> = StyleKey::new(KeyId::PaddingTop);
    pub const PADDING_RIGHT: StyleKey<Unit> = StyleKey::new(KeyId::PaddingRight);
    pub const PADDING_BOTTOM: StyleKey<Unit> = StyleKey::new(KeyId::PaddingBottom);
    pub const PADDING_LEFT: StyleKey<Unit> = StyleKey::new(KeyId::PaddingLeft);

    pub const BORDER_COLOR: StyleKey<Color> = StyleKey::new(KeyId::BorderColor);
    pub const BORDER_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::BorderWidth);
    pub const BORDER_LINE: StyleKey<LineType> = StyleKey::new(KeyId::BorderLine);
    pub const BORDER_DASH: StyleKey<Dash> = StyleKey::new(KeyId::BorderDash);

    pub const BORDER_TOP_COLOR: StyleKey<Color> = StyleKey::new(KeyId::BorderTopColor);
    pub const BORDER_TOP_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::BorderTopWidth);
    pub const BORDER_TOP_LINE: StyleKey<LineType> = StyleKey::new(KeyId::BorderTopLine);
    pub const BORDER_TOP_DASH: StyleKey<Dash> = StyleKey::new(KeyId::BorderTopDash);

    pub const BORDER_RIGHT_COLOR: StyleKey<Color> = StyleKey::new(KeyId::BorderRightColor);
    pub const BORDER_RIGHT_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::BorderRightWidth);
    pub const BORDER_RIGHT_LINE: StyleKey<LineType> = StyleKey::new(KeyId::BorderRightLine);
    pub const BORDER_RIGHT_DASH: StyleKey<Dash> = StyleKey::new(KeyId::BorderRightDash);

    pub const BORDER_BOTTOM_COLOR: StyleKey<Color> = StyleKey::new(KeyId::BorderBottomColor);
    pub const BORDER_BOTTOM_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::BorderBottomWidth);
    pub const BORDER_BOTTOM_LINE: StyleKey<LineType> = StyleKey::new(KeyId::BorderBottomLine);
    pub const BORDER_BOTTOM_DASH: StyleKey<Dash> = StyleKey::new(KeyId::BorderBottomDash);

    pub const BORDER_LEFT_COLOR: StyleKey<Color> = StyleKey::new(KeyId::BorderLeftColor);
    pub const BORDER_LEFT_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::BorderLeftWidth);
    pub const BORDER_LEFT_LINE: StyleKey<LineType> = StyleKey::new(KeyId::BorderLeftLine);
    pub const BORDER_LEFT_DASH: StyleKey<Dash> = StyleKey::new(KeyId::BorderLeftDash);

    pub const FILL_COLOR: StyleKey<Color> = StyleKey::new(KeyId::FillColor);
    pub const FILL_OPACITY: StyleKey<f32> = StyleKey::new(KeyId::FillOpacity);
    pub const BACKGROUND_COLOR: StyleKey<Color> = StyleKey::new(KeyId::BackgroundColor);

    pub const FONT_FAMILY: StyleKey<String> = StyleKey::new(KeyId::FontFamily);
    pub const FONT_SIZE: StyleKey<Unit> = StyleKey::new(KeyId::FontSize);
    pub const FONT_BOLD: StyleKey<bool> = StyleKey::new(KeyId::FontBold);
    pub const FONT_ITALIC: StyleKey<bool> = StyleKey::new(KeyId::FontItalic);

    pub const TEXT_LEADING: StyleKey<Unit> = StyleKey::new(KeyId::TextLeading);
    pub const TEXT_ALIGN: StyleKey<HorizontalAlign> = StyleKey::new(KeyId::TextAlign);
    pub const VERTICAL_ALIGN: StyleKey<VerticalAlign> = StyleKey::new(KeyId::VerticalAlign);
    pub const TEXT_DECORATION: StyleKey<TextDecoration> = StyleKey::new(KeyId::TextDecoration);
    pub const WORD_SPACING: StyleKey<Unit> = StyleKey::new(KeyId::WordSpacing);
    pub const CHAR_SPACING: StyleKey<Unit> = StyleKey::new(KeyId::CharSpacing);
    pub const TEXT_WRAP: StyleKey<bool> = StyleKey::new(KeyId::TextWrap);

    pub const OVERFLOW_ACTION: StyleKey<OverflowAction> = StyleKey::new(KeyId::OverflowAction);
    pub const OVERFLOW_SPLIT: StyleKey<OverflowSplit> = StyleKey::new(KeyId::OverflowSplit);

    pub const COLUMN_COUNT: StyleKey<i32> = StyleKey::new(KeyId::ColumnCount);
    pub const ALLEY_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::AlleyWidth);

    pub const PAGE_WIDTH: StyleKey<Unit> = StyleKey::new(KeyId::PageWidth);
    pub const PAGE_HEIGHT: StyleKey<Unit> = StyleKey::new(KeyId::PageHeight);
    pub const PAGE_NUMBER_STYLE: StyleKey<NumberStyle> = StyleKey::new(KeyId::PageNumberStyle);
    pub const PAGE_NUMBER_START: StyleKey<i32> = StyleKey::new(KeyId::PageNumberStart);
    pub const PAGE_NUMBER_FORMAT: StyleKey<String> = StyleKey::new(KeyId::PageNumberFormat);
    pub const PAGE_NUMBER_GROUP_FORMAT: StyleKey<String> =
        StyleKey::new(KeyId::PageNumberGroupFormat);

    pub const LIST_NUMBER_STYLE: StyleKey<NumberStyle> = StyleKey::new(KeyId::ListNumberStyle);
    pub const LIST_PREFIX: StyleKey<String> = StyleKey::new(KeyId::ListPrefix);
    pub const LIST_POSTFIX: StyleKey<String> = StyleKey::new(KeyId::ListPostfix);
    pub const COUNTER_RESET: StyleKey<CounterValue> = StyleKey::new(KeyId::CounterReset);
    pub const COUNTER_INCREMENT: StyleKey<CounterValue> = StyleKey::new(KeyId::CounterIncrement);

    pub const OUTLINED: StyleKey<bool> = StyleKey::new(KeyId::Outlined);
    pub const OUTLINE_TITLE: StyleKey<String> = StyleKey::new(KeyId::OutlineTitle);
}

/// One attribute of a style item: name, backing key and hard default
#[derive(Clone, Copy)]
pub struct ItemEntry {
    /// Attribute name within the item (e.g. `"top"` inside margins)
    pub name: &'static str,
    /// The backing schema key
    pub key: KeyId,
    /// Produces the documented default when the key is unset
    pub default: fn() -> PropertyValue,
}

impl std::fmt::Debug for ItemEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemEntry")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}

fn unit_zero() -> PropertyValue {
    PropertyValue::Unit(Unit::ZERO)
}

fn unit_auto() -> PropertyValue {
    PropertyValue::Unit(Unit::auto())
}

fn unit_default_font_size() -> PropertyValue {
    PropertyValue::Unit(Unit::pt(DEFAULT_FONT_SIZE))
}

fn unit_default_alley() -> PropertyValue {
    PropertyValue::Unit(Unit::pt(DEFAULT_ALLEY_WIDTH))
}

fn unit_default_page_width() -> PropertyValue {
    PropertyValue::Unit(Unit::pt(DEFAULT_PAGE_WIDTH))
}

fn unit_default_page_height() -> PropertyValue {
    PropertyValue::Unit(Unit::pt(DEFAULT_PAGE_HEIGHT))
}

fn bool_false() -> PropertyValue {
    PropertyValue::Boolean(false)
}

fn bool_true() -> PropertyValue {
    PropertyValue::Boolean(true)
}

fn int_one() -> PropertyValue {
    PropertyValue::Integer(1)
}

fn number_one() -> PropertyValue {
    PropertyValue::Number(1.0)
}

fn text_empty() -> PropertyValue {
    PropertyValue::Text(String::new())
}

fn text_default_font() -> PropertyValue {
    PropertyValue::Text(DEFAULT_FONT_FAMILY.to_string())
}

fn color_transparent() -> PropertyValue {
    PropertyValue::Color(Color::TRANSPARENT)
}

fn color_black() -> PropertyValue {
    PropertyValue::Color(Color::BLACK)
}

fn line_none() -> PropertyValue {
    PropertyValue::Line(LineType::None)
}

fn dash_none() -> PropertyValue {
    PropertyValue::Dash(Dash::default())
}

fn position_block() -> PropertyValue {
    PropertyValue::Position(PositionMode::Block)
}

fn halign_left() -> PropertyValue {
    PropertyValue::HAlign(HorizontalAlign::Left)
}

fn valign_top() -> PropertyValue {
    PropertyValue::VAlign(VerticalAlign::Top)
}

fn decoration_none() -> PropertyValue {
    PropertyValue::Decoration(TextDecoration::None)
}

fn overflow_new_page() -> PropertyValue {
    PropertyValue::OverflowAction(OverflowAction::NewPage)
}

fn overflow_split_any() -> PropertyValue {
    PropertyValue::OverflowSplit(OverflowSplit::Any)
}

fn number_style_decimal() -> PropertyValue {
    PropertyValue::NumberStyle(NumberStyle::Decimal)
}

/// A logical group of related style properties
///
/// Each kind maps to a static entry table; [`crate::item::ItemView`]
/// provides get/set/remove with defaults over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Position,
    Size,
    Margins,
    Padding,
    Border,
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,
    Fill,
    Background,
    Font,
    Text,
    Overflow,
    Columns,
    Page,
    PageNumbers,
    List,
    Outline,
}

macro_rules! entries {
    ($(($name:literal, $key:ident, $default:ident)),* $(,)?) => {
        &[$(ItemEntry {
            name: $name,
            key: KeyId::$key,
            default: $default,
        }),*]
    };
}

impl ItemKind {
    /// The `{attribute, key, default}` table for this item kind
    pub fn entries(self) -> &'static [ItemEntry] {
        match self {
            Self::Position => entries![
                ("mode", PositionMode, position_block),
                ("x", X, unit_zero),
                ("y", Y, unit_zero),
                ("full-width", FullWidth, bool_false),
            ],
            Self::Size => entries![
                ("width", Width, unit_auto),
                ("height", Height, unit_auto),
                ("min-width", MinWidth, unit_zero),
                ("min-height", MinHeight, unit_zero),
                ("max-width", MaxWidth, unit_auto),
                ("max-height", MaxHeight, unit_auto),
            ],
            Self::Margins => entries![
                ("all", MarginAll, unit_zero),
                ("top", MarginTop, unit_zero),
                ("right", MarginRight, unit_zero),
                ("bottom", MarginBottom, unit_zero),
                ("left", MarginLeft, unit_zero),
            ],
            Self::Padding => entries![
                ("all", PaddingAll, unit_zero),
                ("top", PaddingTop, unit_zero),
                ("right", PaddingRight, unit_zero),
                ("bottom", PaddingBottom, unit_zero),
                ("left", PaddingLeft, unit_zero),
            ],
            Self::Border => entries![
                ("color", BorderColor, color_transparent),
                ("width", BorderWidth, unit_zero),
                ("line", BorderLine, line_none),
                ("dash", BorderDash, dash_none),
            ],
            Self::BorderTop => entries![
                ("color", BorderTopColor, color_transparent),
                ("width", BorderTopWidth, unit_zero),
                ("line", BorderTopLine, line_none),
                ("dash", BorderTopDash, dash_none),
            ],
            Self::BorderRight => entries![
                ("color", BorderRightColor, color_transparent),
                ("width", BorderRightWidth, unit_zero),
                ("line", BorderRightLine, line_none),
                ("dash", BorderRightDash, dash_none),
            ],
            Self::BorderBottom => entries![
                ("color", BorderBottomColor, color_transparent),
                ("width", BorderBottomWidth, unit_zero),
                ("line", BorderBottomLine, line_none),
                ("dash", BorderBottomDash, dash_none),
            ],
            Self::BorderLeft => entries![
                ("color", BorderLeftColor, color_transparent),
                ("width", BorderLeftWidth, unit_zero),
                ("line", BorderLeftLine, line_none),
                ("dash", BorderLeftDash, dash_none),
            ],
            Self::Fill => entries![
                ("color", FillColor, color_black),
                ("opacity", FillOpacity, number_one),
            ],
            Self::Background => entries![("color", BackgroundColor, color_transparent)],
            Self::Font => entries![
                ("family", FontFamily, text_default_font),
                ("size", FontSize, unit_default_font_size),
                ("bold", FontBold, bool_false),
                ("italic", FontItalic, bool_false),
            ],
            Self::Text => entries![
                ("leading", TextLeading, unit_zero),
                ("align", TextAlign, halign_left),
                ("v-align", VerticalAlign, valign_top),
                ("decoration", TextDecoration, decoration_none),
                ("word-spacing", WordSpacing, unit_zero),
                ("char-spacing", CharSpacing, unit_zero),
                ("wrap", TextWrap, bool_true),
            ],
            Self::Overflow => entries![
                ("action", OverflowAction, overflow_new_page),
                ("split", OverflowSplit, overflow_split_any),
            ],
            Self::Columns => entries![
                ("count", ColumnCount, int_one),
                ("alley-width", AlleyWidth, unit_default_alley),
            ],
            Self::Page => entries![
                ("width", PageWidth, unit_default_page_width),
                ("height", PageHeight, unit_default_page_height),
            ],
            Self::PageNumbers => entries![
                ("style", PageNumberStyle, number_style_decimal),
                ("start", PageNumberStart, int_one),
                ("format", PageNumberFormat, text_empty),
                ("group-format", PageNumberGroupFormat, text_empty),
            ],
            Self::List => entries![
                ("number-style", ListNumberStyle, number_style_decimal),
                ("prefix", ListPrefix, text_empty),
                ("postfix", ListPostfix, text_empty),
            ],
            Self::Outline => entries![
                ("outlined", Outlined, bool_true),
                ("title", OutlineTitle, text_empty),
            ],
        }
    }

    /// Looks up an entry by attribute name
    pub fn entry(self, name: &str) -> Option<&'static ItemEntry> {
        self.entries().iter().find(|entry| entry.name == name)
    }
}
