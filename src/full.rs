//! The fully resolved style of one node
//!
//! [`StyleFull`] is what the cascade produces: every inherited and merged
//! value in one owned [`Style`], plus relative-unit flattening and cached
//! derived views. It is the only style object layout mutates; the source
//! styles on the stack stay untouched.
//!
//! Flattening rewrites relative units in place. Each unit-valued key whose
//! schema entry declares a [`RelativeBase`] is resolved against the
//! [`FlattenContext`] and replaced with its point value; which keys were
//! rewritten is recorded so callers can tell authored-absolute values from
//! flattened ones.
//!
//! The derived accessors (`position`, `font`, `pen_borders`, ...) gather
//! related keys into plain structs layout can consume without key-by-key
//! lookups. They are computed on first use and cached until a value
//! changes.

use crate::geometry::{Size, Thickness};
use crate::item::{BorderSide, Side};
use crate::schema::{
    keys, KeyId, DEFAULT_ALLEY_WIDTH, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_PAGE_HEIGHT,
    DEFAULT_PAGE_WIDTH,
};
use crate::style::Style;
use crate::units::{FlattenContext, Unit};
use crate::value::{
    Color, Dash, HorizontalAlign, LineType, NumberStyle, OverflowAction, OverflowSplit,
    PositionMode, PropertyType, PropertyValue, StyleValue, TextDecoration, VerticalAlign,
};
use smallvec::SmallVec;
use std::cell::RefCell;

/// The keys rewritten by the most recent flatten
///
/// Most styles have only a handful of relative values, so the list lives
/// inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedKeys(SmallVec<[KeyId; 8]>);

impl FlattenedKeys {
    /// True when no key was rewritten
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rewritten keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when `id` was rewritten
    pub fn contains(&self, id: KeyId) -> bool {
        self.0.contains(&id)
    }

    /// Iterates the rewritten keys
    pub fn iter(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.0.iter().copied()
    }
}

/// Resolved positioning and sizing values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub mode: PositionMode,
    pub x: Unit,
    pub y: Unit,
    pub width: Unit,
    pub height: Unit,
    pub min_width: Unit,
    pub min_height: Unit,
    pub max_width: Unit,
    pub max_height: Unit,
    pub full_width: bool,
}

/// Resolved font selection values
#[derive(Debug, Clone, PartialEq)]
pub struct FontOptions {
    pub family: String,
    /// Font size in points
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

/// Resolved text layout values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub leading: Unit,
    pub align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub decoration: TextDecoration,
    pub word_spacing: Unit,
    pub char_spacing: Unit,
    pub wrap: bool,
}

/// Resolved overflow behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowOptions {
    pub action: OverflowAction,
    pub split: OverflowSplit,
}

/// Resolved page geometry and column values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageOptions {
    /// Page size in points
    pub size: Size,
    pub column_count: i32,
    /// Gap between columns in points
    pub alley_width: f32,
}

/// Resolved page numbering values
#[derive(Debug, Clone, PartialEq)]
pub struct PageNumberOptions {
    pub style: NumberStyle,
    pub start: i32,
    pub format: String,
    pub group_format: String,
}

/// A drawable border stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub line: LineType,
    /// Stroke width in points
    pub width: f32,
    pub color: Color,
    pub dash: Dash,
}

/// The drawable border strokes of a node, one per visible side
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PenBorders {
    pub top: Option<Pen>,
    pub right: Option<Pen>,
    pub bottom: Option<Pen>,
    pub left: Option<Pen>,
}

impl PenBorders {
    /// True when no side draws anything
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

#[derive(Debug, Default)]
struct DerivedCache {
    position: Option<PositionOptions>,
    font: Option<FontOptions>,
    text: Option<TextOptions>,
    overflow: Option<OverflowOptions>,
    page: Option<PageOptions>,
    page_numbers: Option<PageNumberOptions>,
    pen_borders: Option<PenBorders>,
    margins: Option<Thickness>,
    padding: Option<Thickness>,
}

/// A node's fully resolved style
///
/// # Examples
///
/// ```
/// use docstyle::{keys, FlattenContext, Size, Style, StyleFull, Unit};
///
/// let mut style = Style::new();
/// style.set_value(&keys::WIDTH, Unit::percent(50.0));
///
/// let mut full = StyleFull::new(style);
/// let ctx = FlattenContext::new(Size::new(595.0, 842.0), Size::new(400.0, 600.0), 12.0, 12.0);
/// full.flatten(&ctx);
/// assert_eq!(full.value(&keys::WIDTH), Some(Unit::pt(200.0)));
/// ```
#[derive(Debug, Default)]
pub struct StyleFull {
    style: Style,
    flattened: FlattenedKeys,
    cache: RefCell<DerivedCache>,
}

impl StyleFull {
    /// Wraps a merged style; flattening has not happened yet
    pub fn new(style: Style) -> Self {
        Self {
            style,
            flattened: FlattenedKeys::default(),
            cache: RefCell::new(DerivedCache::default()),
        }
    }

    /// The underlying style values
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Consumes the wrapper, returning the style for pooling
    pub fn into_style(self) -> Style {
        self.style
    }

    /// Reads a typed value; see [`Style::value`]
    pub fn value<T: PropertyType>(&self, key: &crate::schema::StyleKey<T>) -> Option<T> {
        self.style.value(key)
    }

    /// Presence check; see [`Style::is_defined`]
    pub fn is_defined(&self, id: KeyId) -> bool {
        self.style.is_defined(id)
    }

    /// Sets a value after resolution (layout feedback such as measured sizes)
    ///
    /// Invalidates the derived caches and the flatten record for the key.
    pub fn set_value<T: PropertyType>(&mut self, key: &crate::schema::StyleKey<T>, value: T) {
        self.style.set_value(key, value);
        self.flattened.0.retain(|id| *id != key.id);
        self.cache.replace(DerivedCache::default());
    }

    /// The keys rewritten by the most recent [`StyleFull::flatten`]
    pub fn flattened_keys(&self) -> &FlattenedKeys {
        &self.flattened
    }

    /// Rewrites every relative unit value into absolute points
    ///
    /// Only keys whose schema entry declares a relative base are touched, and
    /// of those only the ones currently holding a relative unit. Values keep
    /// their cascade priority. Returns the record of rewritten keys.
    pub fn flatten(&mut self, ctx: &FlattenContext) -> &FlattenedKeys {
        let mut rewrites: SmallVec<[(KeyId, StyleValue); 8]> = SmallVec::new();
        for (id, stored) in self.style.iter() {
            let Some(base) = id.relative_base() else {
                continue;
            };
            let PropertyValue::Unit(unit) = stored.value else {
                continue;
            };
            if !unit.is_relative() {
                continue;
            }
            let flat = unit.flatten(ctx, base);
            rewrites.push((
                id,
                StyleValue::with_priority(PropertyValue::Unit(flat), stored.priority),
            ));
        }

        self.flattened = FlattenedKeys::default();
        for (id, value) in rewrites {
            self.style.insert_raw(id, value);
            self.flattened.0.push(id);
        }
        self.cache.replace(DerivedCache::default());
        &self.flattened
    }

    /// The resolved font size in points
    pub fn font_size(&self) -> f32 {
        self
            .style
            .value(&keys::FONT_SIZE)
            .map(Unit::points)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Positioning and sizing values, defaults applied
    pub fn position(&self) -> PositionOptions {
        if let Some(cached) = &self.cache.borrow().position {
            return *cached;
        }
        let options = PositionOptions {
            mode: self.style.value(&keys::POSITION_MODE).unwrap_or_default(),
            x: self.style.value(&keys::X).unwrap_or(Unit::ZERO),
            y: self.style.value(&keys::Y).unwrap_or(Unit::ZERO),
            width: self.style.value(&keys::WIDTH).unwrap_or(Unit::auto()),
            height: self.style.value(&keys::HEIGHT).unwrap_or(Unit::auto()),
            min_width: self.style.value(&keys::MIN_WIDTH).unwrap_or(Unit::ZERO),
            min_height: self.style.value(&keys::MIN_HEIGHT).unwrap_or(Unit::ZERO),
            max_width: self.style.value(&keys::MAX_WIDTH).unwrap_or(Unit::auto()),
            max_height: self.style.value(&keys::MAX_HEIGHT).unwrap_or(Unit::auto()),
            full_width: self.style.value(&keys::FULL_WIDTH).unwrap_or(false),
        };
        self.cache.borrow_mut().position = Some(options);
        options
    }

    /// Font selection values, defaults applied
    pub fn font(&self) -> FontOptions {
        if let Some(cached) = &self.cache.borrow().font {
            return cached.clone();
        }
        let options = FontOptions {
            family: self
                .style
                .value(&keys::FONT_FAMILY)
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            size: self.font_size(),
            bold: self.style.value(&keys::FONT_BOLD).unwrap_or(false),
            italic: self.style.value(&keys::FONT_ITALIC).unwrap_or(false),
        };
        self.cache.borrow_mut().font = Some(options.clone());
        options
    }

    /// Text layout values, defaults applied
    pub fn text(&self) -> TextOptions {
        if let Some(cached) = &self.cache.borrow().text {
            return *cached;
        }
        let options = TextOptions {
            leading: self.style.value(&keys::TEXT_LEADING).unwrap_or(Unit::ZERO),
            align: self.style.value(&keys::TEXT_ALIGN).unwrap_or_default(),
            vertical_align: self.style.value(&keys::VERTICAL_ALIGN).unwrap_or_default(),
            decoration: self.style.value(&keys::TEXT_DECORATION).unwrap_or_default(),
            word_spacing: self.style.value(&keys::WORD_SPACING).unwrap_or(Unit::ZERO),
            char_spacing: self.style.value(&keys::CHAR_SPACING).unwrap_or(Unit::ZERO),
            wrap: self.style.value(&keys::TEXT_WRAP).unwrap_or(true),
        };
        self.cache.borrow_mut().text = Some(options);
        options
    }

    /// Overflow behaviour, defaults applied
    pub fn overflow(&self) -> OverflowOptions {
        if let Some(cached) = &self.cache.borrow().overflow {
            return *cached;
        }
        let options = OverflowOptions {
            action: self.style.value(&keys::OVERFLOW_ACTION).unwrap_or_default(),
            split: self.style.value(&keys::OVERFLOW_SPLIT).unwrap_or_default(),
        };
        self.cache.borrow_mut().overflow = Some(options);
        options
    }

    /// Page geometry and column values, defaults applied
    ///
    /// Call after flattening; relative page dimensions read as their raw
    /// magnitude otherwise.
    pub fn page(&self) -> PageOptions {
        if let Some(cached) = &self.cache.borrow().page {
            return *cached;
        }
        let options = PageOptions {
            size: Size::new(
                self
                    .style
                    .value(&keys::PAGE_WIDTH)
                    .map(Unit::points)
                    .unwrap_or(DEFAULT_PAGE_WIDTH),
                self
                    .style
                    .value(&keys::PAGE_HEIGHT)
                    .map(Unit::points)
                    .unwrap_or(DEFAULT_PAGE_HEIGHT),
            ),
            column_count: self.style.value(&keys::COLUMN_COUNT).unwrap_or(1),
            alley_width: self
                .style
                .value(&keys::ALLEY_WIDTH)
                .map(Unit::points)
                .unwrap_or(DEFAULT_ALLEY_WIDTH),
        };
        self.cache.borrow_mut().page = Some(options);
        options
    }

    /// Page numbering values, defaults applied
    pub fn page_numbers(&self) -> PageNumberOptions {
        if let Some(cached) = &self.cache.borrow().page_numbers {
            return cached.clone();
        }
        let options = PageNumberOptions {
            style: self
                .style
                .value(&keys::PAGE_NUMBER_STYLE)
                .unwrap_or_default(),
            start: self.style.value(&keys::PAGE_NUMBER_START).unwrap_or(1),
            format: self
                .style
                .value(&keys::PAGE_NUMBER_FORMAT)
                .unwrap_or_default(),
            group_format: self
                .style
                .value(&keys::PAGE_NUMBER_GROUP_FORMAT)
                .unwrap_or_default(),
        };
        self.cache.borrow_mut().page_numbers = Some(options.clone());
        options
    }

    /// Resolved margins in points, per-side keys falling back to the
    /// `margin` shorthand
    ///
    /// Call after flattening; relative values read as their raw magnitude
    /// otherwise.
    pub fn margins(&self) -> Thickness {
        if let Some(cached) = &self.cache.borrow().margins {
            return *cached;
        }
        let edges = self.edges(
            KeyId::MarginAll,
            [
                KeyId::MarginTop,
                KeyId::MarginRight,
                KeyId::MarginBottom,
                KeyId::MarginLeft,
            ],
        );
        self.cache.borrow_mut().margins = Some(edges);
        edges
    }

    /// Resolved padding in points, per-side keys falling back to the
    /// `padding` shorthand
    pub fn padding(&self) -> Thickness {
        if let Some(cached) = &self.cache.borrow().padding {
            return *cached;
        }
        let edges = self.edges(
            KeyId::PaddingAll,
            [
                KeyId::PaddingTop,
                KeyId::PaddingRight,
                KeyId::PaddingBottom,
                KeyId::PaddingLeft,
            ],
        );
        self.cache.borrow_mut().padding = Some(edges);
        edges
    }

    fn edges(&self, all: KeyId, sides: [KeyId; 4]) -> Thickness {
        let read = |id: KeyId| -> Option<f32> {
            self
                .style
                .try_get_value(id)
                .and_then(|stored| Unit::from_property(&stored.value))
                .map(Unit::points)
        };
        let base = read(all).unwrap_or(0.0);
        let [top, right, bottom, left] = sides;
        Thickness::new(
            read(top).unwrap_or(base),
            read(right).unwrap_or(base),
            read(bottom).unwrap_or(base),
            read(left).unwrap_or(base),
        )
    }

    /// The drawable border strokes, one per visible side
    ///
    /// Sides resolve through the base border keys and the line-type
    /// inference in [`BorderSide`]; a side that draws nothing is `None`.
    pub fn pen_borders(&self) -> PenBorders {
        if let Some(cached) = &self.cache.borrow().pen_borders {
            return cached.clone();
        }
        let pen = |side: Side| -> Option<Pen> {
            let border = BorderSide::new(&self.style, side);
            if !border.is_visible() {
                return None;
            }
            Some(Pen {
                line: border.line_type(),
                width: border.width().points(),
                color: border.color(),
                dash: border.dash(),
            })
        };
        let borders = PenBorders {
            top: pen(Side::Top),
            right: pen(Side::Right),
            bottom: pen(Side::Bottom),
            left: pen(Side::Left),
        };
        self.cache.borrow_mut().pen_borders = Some(borders.clone());
        borders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FlattenContext {
        FlattenContext::new(Size::new(595.0, 842.0), Size::new(400.0, 200.0), 12.0, 12.0)
    }

    #[test]
    fn flatten_rewrites_only_relative_units() {
        let mut style = Style::new();
        style.set_value(&keys::WIDTH, Unit::percent(50.0));
        style.set_value(&keys::MARGIN_ALL, Unit::pt(10.0));
        style.set_value(&keys::HEIGHT, Unit::auto());

        let mut full = StyleFull::new(style);
        let flattened = full.flatten(&ctx());
        assert_eq!(flattened.len(), 2);
        assert!(flattened.contains(KeyId::Width));
        assert!(flattened.contains(KeyId::Height));
        assert!(!flattened.contains(KeyId::MarginAll));

        assert_eq!(full.value(&keys::WIDTH), Some(Unit::pt(200.0)));
        assert_eq!(full.value(&keys::HEIGHT), Some(Unit::pt(200.0)));
        assert_eq!(full.value(&keys::MARGIN_ALL), Some(Unit::pt(10.0)));
    }

    #[test]
    fn flatten_preserves_priorities() {
        let mut style = Style::new();
        style.set_value_with_priority(&keys::WIDTH, Unit::percent(25.0), 10);

        let mut full = StyleFull::new(style);
        full.flatten(&ctx());
        let stored = full.style().try_get_value(KeyId::Width).unwrap();
        assert_eq!(stored.priority, 10);
        assert_eq!(full.value(&keys::WIDTH), Some(Unit::pt(100.0)));
    }

    #[test]
    fn flatten_is_idempotent() {
        let mut style = Style::new();
        style.set_value(&keys::WIDTH, Unit::percent(50.0));
        let mut full = StyleFull::new(style);
        full.flatten(&ctx());
        let after_first = full.value(&keys::WIDTH);

        let flattened = full.flatten(&ctx());
        // Nothing relative remains, so the second pass rewrites nothing.
        assert!(flattened.is_empty());
        assert_eq!(full.value(&keys::WIDTH), after_first);
    }

    #[test]
    fn font_relative_values_resolve_against_context_fonts() {
        let mut style = Style::new();
        style.set_value(&keys::FONT_SIZE, Unit::percent(150.0));
        style.set_value(&keys::TEXT_LEADING, Unit::em(1.5));

        let mut full = StyleFull::new(style);
        full.flatten(&ctx());
        assert_eq!(full.value(&keys::FONT_SIZE), Some(Unit::pt(18.0)));
        assert_eq!(full.value(&keys::TEXT_LEADING), Some(Unit::pt(18.0)));
        assert_eq!(full.font_size(), 18.0);
    }

    #[test]
    fn derived_options_apply_defaults() {
        let full = StyleFull::new(Style::new());

        let position = full.position();
        assert_eq!(position.mode, PositionMode::Block);
        assert!(position.width.is_auto());

        let font = full.font();
        assert_eq!(font.family, DEFAULT_FONT_FAMILY);
        assert_eq!(font.size, DEFAULT_FONT_SIZE);
        assert!(!font.bold);

        let page = full.page();
        assert_eq!(page.size, Size::new(DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT));
        assert_eq!(page.column_count, 1);

        let numbers = full.page_numbers();
        assert_eq!(numbers.style, NumberStyle::Decimal);
        assert_eq!(numbers.start, 1);
    }

    #[test]
    fn set_value_invalidates_derived_cache() {
        let mut full = StyleFull::new(Style::new());
        assert!(!full.font().bold);

        full.set_value(&keys::FONT_BOLD, true);
        assert!(full.font().bold);
    }

    #[test]
    fn pen_borders_skip_invisible_sides() {
        let mut style = Style::new();
        style.set_value(&keys::BORDER_COLOR, Color::BLACK);
        style.set_value(&keys::BORDER_TOP_WIDTH, Unit::pt(1.0));

        let full = StyleFull::new(style);
        let borders = full.pen_borders();
        let top = borders.top.unwrap();
        assert_eq!(top.line, LineType::Solid);
        assert_eq!(top.width, 1.0);
        assert_eq!(top.color, Color::BLACK);
        // Other sides inherit the color but have zero width.
        assert!(borders.right.is_none());
        assert!(borders.bottom.is_none());
        assert!(borders.left.is_none());
    }

    #[test]
    fn pen_borders_empty_without_declarations() {
        let full = StyleFull::new(Style::new());
        assert!(full.pen_borders().is_empty());
    }

    #[test]
    fn margins_fall_back_to_the_shorthand() {
        let mut style = Style::new();
        style.set_value(&keys::MARGIN_ALL, Unit::pt(10.0));
        style.set_value(&keys::MARGIN_TOP, Unit::pt(20.0));

        let full = StyleFull::new(style);
        assert_eq!(full.margins(), Thickness::new(20.0, 10.0, 10.0, 10.0));
        // Nothing set at all means zero edges.
        assert!(StyleFull::new(Style::new()).padding().is_zero());
    }

    #[test]
    fn padding_reads_flattened_points() {
        let mut style = Style::new();
        style.set_value(&keys::PADDING_ALL, Unit::percent(10.0));
        style.set_value(&keys::PADDING_LEFT, Unit::pt(5.0));

        let mut full = StyleFull::new(style);
        full.flatten(&ctx());
        // The shorthand flattens once, against the width axis: 10% of 400.
        assert_eq!(full.padding(), Thickness::new(40.0, 40.0, 40.0, 5.0));
    }

    #[test]
    fn edge_caches_invalidate_on_value_change() {
        let mut full = StyleFull::new(Style::new());
        assert!(full.margins().is_zero());

        full.set_value(&keys::MARGIN_ALL, Unit::pt(8.0));
        assert_eq!(full.margins(), Thickness::uniform(8.0));
    }
}
