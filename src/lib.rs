//! Style cascade engine for paged document layout
//!
//! This crate resolves the effective appearance of document nodes: styles
//! declared on elements, inherited from ancestors, scoped to media or named
//! pages, parameterised by variables, and authored in relative units, all
//! combined into one flat set of absolute values layout can consume.
//!
//! The pieces:
//!
//! - [`Style`] holds the values declared on one node or rule, keyed by the
//!   typed schema in [`schema`].
//! - [`StyleGroup`] scopes styles behind media and page [`Matcher`]s.
//! - [`StyleStack`] tracks the path from the document root to the current
//!   node and produces a [`StyleFull`]: inheritance applied, priorities
//!   respected, variables accumulated, relative units flattened to points.
//! - [`StylePool`] recycles the per-node allocations of a long render.
//!
//! # Example
//!
//! ```
//! use docstyle::{keys, PositionMode, Size, Style, StyleStack, Unit};
//! use std::sync::Arc;
//!
//! let mut root = Style::new();
//! root.set_value(&keys::FONT_SIZE, Unit::pt(12.0));
//! root.set_value(&keys::MARGIN_ALL, Unit::pt(25.0));
//!
//! let mut heading = Style::new();
//! heading.set_value(&keys::FONT_SIZE, Unit::em(2.0));
//! heading.set_value(&keys::WIDTH, Unit::percent(50.0));
//!
//! let mut stack = StyleStack::new(Arc::new(root));
//! stack.push(Arc::new(heading));
//!
//! let full = stack.get_full_style(
//!   Size::new(595.0, 842.0),
//!   &mut |_: &Style, _: PositionMode| Size::new(500.0, 700.0),
//!   12.0,
//!   12.0,
//! );
//!
//! assert_eq!(full.value(&keys::FONT_SIZE), Some(Unit::pt(24.0)));
//! assert_eq!(full.value(&keys::WIDTH), Some(Unit::pt(250.0)));
//! // Margins do not inherit from the root.
//! assert_eq!(full.value(&keys::MARGIN_ALL), None);
//! ```

pub mod counters;
pub mod error;
pub mod font_face;
pub mod full;
pub mod geometry;
pub mod group;
pub mod item;
pub mod pool;
pub mod schema;
pub mod stack;
pub mod style;
pub mod units;
pub mod value;
pub mod variables;

pub use counters::CounterValue;
pub use error::{CounterError, Error, ExpressionError, Result};
pub use font_face::{FontFaceRule, ValidFontFace};
pub use full::{
    FlattenedKeys, FontOptions, OverflowOptions, PageNumberOptions, PageOptions, Pen, PenBorders,
    PositionOptions, StyleFull, TextOptions,
};
pub use geometry::{Size, Thickness};
pub use group::{GroupEntry, MatchContext, Matcher, OutputFormat, StyleGroup};
pub use item::{BorderSide, BorderSideMut, ItemView, ItemViewMut, Side};
pub use pool::StylePool;
pub use schema::{keys, ItemEntry, ItemKind, KeyId, StyleKey};
pub use stack::{ContainerSizer, StyleStack};
pub use style::{StateKind, Style};
pub use units::{Dimension, FlattenContext, RelativeBase, Unit};
pub use value::{
    Color, Dash, HorizontalAlign, LineType, NumberStyle, OverflowAction, OverflowSplit,
    PositionMode, PropertyType, PropertyValue, StyleValue, TextDecoration, VerticalAlign,
};
