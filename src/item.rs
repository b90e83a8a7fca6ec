//! Generic views over item attribute tables
//!
//! Style declarations group related properties into items ("margins",
//! "font", the four border sides). Instead of one hand-written accessor
//! type per group, [`ItemView`] and [`ItemViewMut`] interpret the
//! `{attribute, key, default}` tables declared on
//! [`ItemKind`](crate::schema::ItemKind): reads fall back to the table's
//! default, writes go straight to the backing key.
//!
//! Borders get the one piece of non-table logic in this module.
//! [`BorderSide`] resolves each attribute through the side-specific key
//! first and the base border key second, and infers a line type when none
//! was declared: a non-empty dash means a dashed line, a visible color
//! means a solid line, otherwise there is no border.

use crate::schema::{ItemKind, KeyId};
use crate::style::Style;
use crate::units::Unit;
use crate::value::{Color, Dash, LineType, PropertyType, PropertyValue};

/// Read access to one item of a style
///
/// # Examples
///
/// ```
/// use docstyle::{keys, ItemKind, ItemView, Style, Unit};
///
/// let mut style = Style::new();
/// style.set_value(&keys::MARGIN_TOP, Unit::pt(20.0));
///
/// let margins = ItemView::new(&style, ItemKind::Margins);
/// assert_eq!(margins.get::<Unit>("top"), Unit::pt(20.0));
/// // Unset attributes read their documented default.
/// assert_eq!(margins.get::<Unit>("left"), Unit::ZERO);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ItemView<'a> {
    style: &'a Style,
    kind: ItemKind,
}

impl<'a> ItemView<'a> {
    /// Creates a view of `kind` over `style`
    pub fn new(style: &'a Style, kind: ItemKind) -> Self {
        Self { style, kind }
    }

    /// The item kind this view interprets
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Reads an attribute, falling back to its default when unset
    ///
    /// # Panics
    ///
    /// Panics when `name` is not an attribute of this item kind, or when the
    /// requested type does not match the attribute's payload. Both are
    /// programming errors, not data errors.
    pub fn get<T: PropertyType>(&self, name: &str) -> T {
        let value = self.get_raw(name);
        let type_name = value.type_name();
        match T::from_property(&value) {
            Some(value) => value,
            None => panic!(
                "attribute '{}' of {:?} holds a {} value",
                name, self.kind, type_name
            ),
        }
    }

    /// Reads an attribute untyped, falling back to its default when unset
    ///
    /// # Panics
    ///
    /// Panics when `name` is not an attribute of this item kind.
    pub fn get_raw(&self, name: &str) -> PropertyValue {
        let entry = self.entry(name);
        match self.style.try_get_value(entry.key) {
            Some(stored) => stored.value.clone(),
            None => (entry.default)(),
        }
    }

    /// True when the attribute was explicitly set on the style
    pub fn is_set(&self, name: &str) -> bool {
        self.style.is_defined(self.entry(name).key)
    }

    fn entry(&self, name: &str) -> &'static crate::schema::ItemEntry {
        match self.kind.entry(name) {
            Some(entry) => entry,
            None => panic!("{:?} has no attribute '{}'", self.kind, name),
        }
    }
}

/// Write access to one item of a style
#[derive(Debug)]
pub struct ItemViewMut<'a> {
    style: &'a mut Style,
    kind: ItemKind,
}

impl<'a> ItemViewMut<'a> {
    /// Creates a mutable view of `kind` over `style`
    pub fn new(style: &'a mut Style, kind: ItemKind) -> Self {
        Self { style, kind }
    }

    /// Sets an attribute at the default priority
    ///
    /// # Panics
    ///
    /// Panics when `name` is not an attribute of this item kind.
    pub fn set<T: PropertyType>(&mut self, name: &str, value: T) {
        let key = self.entry(name).key;
        self.style.set_raw(key, value.into_property());
    }

    /// Removes an attribute, restoring its default on reads
    ///
    /// # Panics
    ///
    /// Panics when `name` is not an attribute of this item kind.
    pub fn remove(&mut self, name: &str) {
        let key = self.entry(name).key;
        self.style.remove_value(key);
    }

    /// A read view over the same item
    pub fn as_view(&self) -> ItemView<'_> {
        ItemView::new(self.style, self.kind)
    }

    fn entry(&self, name: &str) -> &'static crate::schema::ItemEntry {
        match self.kind.entry(name) {
            Some(entry) => entry,
            None => panic!("{:?} has no attribute '{}'", self.kind, name),
        }
    }
}

/// One side of a border, or the base values shared by all sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The base border keys, applying to any side without its own value
    All,
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// The four concrete sides, in drawing order
    pub const EACH: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    fn keys(self) -> SideKeys {
        match self {
            Side::All => SideKeys {
                color: KeyId::BorderColor,
                width: KeyId::BorderWidth,
                line: KeyId::BorderLine,
                dash: KeyId::BorderDash,
            },
            Side::Top => SideKeys {
                color: KeyId::BorderTopColor,
                width: KeyId::BorderTopWidth,
                line: KeyId::BorderTopLine,
                dash: KeyId::BorderTopDash,
            },
            Side::Right => SideKeys {
                color: KeyId::BorderRightColor,
                width: KeyId::BorderRightWidth,
                line: KeyId::BorderRightLine,
                dash: KeyId::BorderRightDash,
            },
            Side::Bottom => SideKeys {
                color: KeyId::BorderBottomColor,
                width: KeyId::BorderBottomWidth,
                line: KeyId::BorderBottomLine,
                dash: KeyId::BorderBottomDash,
            },
            Side::Left => SideKeys {
                color: KeyId::BorderLeftColor,
                width: KeyId::BorderLeftWidth,
                line: KeyId::BorderLeftLine,
                dash: KeyId::BorderLeftDash,
            },
        }
    }
}

struct SideKeys {
    color: KeyId,
    width: KeyId,
    line: KeyId,
    dash: KeyId,
}

/// Resolved view of one border side
///
/// Reads go through the side-specific key first and the base border key
/// second, so `border-color` paints all four sides unless a side overrides
/// it.
///
/// # Examples
///
/// ```
/// use docstyle::{keys, BorderSide, Color, LineType, Side, Style, Unit};
///
/// let mut style = Style::new();
/// style.set_value(&keys::BORDER_COLOR, Color::BLACK);
/// style.set_value(&keys::BORDER_WIDTH, Unit::pt(0.5));
///
/// let top = BorderSide::new(&style, Side::Top);
/// assert_eq!(top.color(), Color::BLACK);
/// // No line type was declared, but the color is visible: solid.
/// assert_eq!(top.line_type(), LineType::Solid);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BorderSide<'a> {
    style: &'a Style,
    side: Side,
}

impl<'a> BorderSide<'a> {
    /// Creates a resolved view of `side` over `style`
    pub fn new(style: &'a Style, side: Side) -> Self {
        Self { style, side }
    }

    /// The side this view resolves
    pub fn side(&self) -> Side {
        self.side
    }

    /// The border color, defaulting to transparent
    pub fn color(&self) -> Color {
        self
            .resolve(|keys| keys.color)
            .and_then(|value| Color::from_property(&value))
            .unwrap_or(Color::TRANSPARENT)
    }

    /// The border width, defaulting to zero
    pub fn width(&self) -> Unit {
        self
            .resolve(|keys| keys.width)
            .and_then(|value| Unit::from_property(&value))
            .unwrap_or(Unit::ZERO)
    }

    /// The dash pattern, defaulting to none
    pub fn dash(&self) -> Dash {
        self
            .resolve(|keys| keys.dash)
            .and_then(|value| Dash::from_property(&value))
            .unwrap_or_default()
    }

    /// The effective line type
    ///
    /// An explicitly declared line type wins. Otherwise the type is inferred
    /// from what was declared: a non-empty dash pattern draws dashed, a
    /// visible color draws solid, and with neither there is no border.
    pub fn line_type(&self) -> LineType {
        if let Some(declared) = self
            .resolve(|keys| keys.line)
            .and_then(|value| LineType::from_property(&value))
        {
            return declared;
        }
        if !self.dash().is_none() {
            return LineType::Dash;
        }
        if self.color().is_visible() {
            return LineType::Solid;
        }
        LineType::None
    }

    /// True when this side draws anything: a line type other than none and a
    /// width above zero
    pub fn is_visible(&self) -> bool {
        self.line_type() != LineType::None && !self.width().is_zero()
    }

    fn resolve(&self, pick: impl Fn(&SideKeys) -> KeyId) -> Option<PropertyValue> {
        let own = pick(&self.side.keys());
        if let Some(stored) = self.style.try_get_value(own) {
            return Some(stored.value.clone());
        }
        if self.side == Side::All {
            return None;
        }
        let base = pick(&Side::All.keys());
        self
            .style
            .try_get_value(base)
            .map(|stored| stored.value.clone())
    }
}

/// Write access to one border side
#[derive(Debug)]
pub struct BorderSideMut<'a> {
    style: &'a mut Style,
    side: Side,
}

impl<'a> BorderSideMut<'a> {
    /// Creates a mutable view of `side` over `style`
    pub fn new(style: &'a mut Style, side: Side) -> Self {
        Self { style, side }
    }

    /// Sets the color on this side's own key
    pub fn set_color(&mut self, color: Color) {
        self.style.set_raw(self.side.keys().color, color.into_property());
    }

    /// Sets the width on this side's own key
    pub fn set_width(&mut self, width: Unit) {
        self.style.set_raw(self.side.keys().width, width.into_property());
    }

    /// Sets the line type on this side's own key
    pub fn set_line_type(&mut self, line: LineType) {
        self.style.set_raw(self.side.keys().line, line.into_property());
    }

    /// Sets the dash pattern on this side's own key
    pub fn set_dash(&mut self, dash: Dash) {
        self.style.set_raw(self.side.keys().dash, dash.into_property());
    }
}
