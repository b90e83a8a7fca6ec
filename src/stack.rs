//! The style stack and cascade resolution
//!
//! While the document tree is walked, each node's style is pushed onto a
//! [`StyleStack`]. Resolving the node's effective appearance asks the stack
//! for a [`StyleFull`]:
//!
//! 1. inherited values flow from every ancestor, root to parent, each more
//!    specific ancestor fully replacing the last;
//! 2. the current node's own values merge on top, priorities respected;
//! 3. variable scopes accumulate root to current, later definitions
//!    winning by name;
//! 4. state overrides of the current node are carried along;
//! 5. a container is chosen from the effective position mode and the
//!    injected [`ContainerSizer`];
//! 6. relative units flatten against that container, the page, and the
//!    inherited font sizes.
//!
//! The styles on the stack are shared and never mutated; the `StyleFull` is
//! a fresh owned product every time.
//!
//! Popping below the root is a bug in the tree walk and panics.

use crate::full::StyleFull;
use crate::geometry::Size;
use crate::schema::keys;
use crate::style::Style;
use crate::units::{FlattenContext, RelativeBase, Unit};
use crate::value::PositionMode;
use std::sync::Arc;

/// Supplies the containing block for a node being resolved
///
/// Layout owns the geometry the cascade cannot know: how wide the current
/// column is, where the nearest positioned ancestor sits. The stack calls
/// back through this trait when it needs a container to flatten against.
///
/// The sizer only ever sees two modes: `Relative`, asking for the content
/// box of the nearest positioned ancestor (used for absolutely positioned
/// nodes), and `Block`, asking for the normal-flow container. `Fixed`
/// nodes never reach the sizer; they always size against the page.
///
/// Implemented for closures, so tests and simple hosts can pass
/// `|_, _| Size::new(400.0, 600.0)`.
pub trait ContainerSizer {
    /// The size of the containing block for a node with the merged `style`,
    /// asked for in `Relative` or `Block` mode
    fn container_size(&mut self, style: &Style, mode: PositionMode) -> Size;
}

impl<F> ContainerSizer for F
where
    F: FnMut(&Style, PositionMode) -> Size,
{
    fn container_size(&mut self, style: &Style, mode: PositionMode) -> Size {
        self(style, mode)
    }
}

/// The stack of styles from the document root to the current node
///
/// # Examples
///
/// ```
/// use docstyle::{keys, PositionMode, Size, Style, StyleStack, Unit};
/// use std::sync::Arc;
///
/// let mut root = Style::new();
/// root.set_value(&keys::FONT_SIZE, Unit::pt(12.0));
///
/// let mut stack = StyleStack::new(Arc::new(root));
/// stack.push(Arc::new(Style::new()));
///
/// let full = stack.get_full_style(
///   Size::new(595.0, 842.0),
///   &mut |_: &Style, _: PositionMode| Size::new(400.0, 600.0),
///   12.0,
///   12.0,
/// );
/// // The child sets nothing; the root's font size is inherited.
/// assert_eq!(full.value(&keys::FONT_SIZE), Some(Unit::pt(12.0)));
/// ```
#[derive(Debug, Clone)]
pub struct StyleStack {
    entries: Vec<Arc<Style>>,
}

impl StyleStack {
    /// Creates a stack with the document root style as its base
    pub fn new(root: Arc<Style>) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// Pushes the style of the node being entered
    pub fn push(&mut self, style: Arc<Style>) {
        self.entries.push(style);
    }

    /// Pops the style of the node being left
    ///
    /// # Panics
    ///
    /// Panics when only the root remains; an unbalanced pop is a bug in the
    /// tree walk, not a recoverable condition.
    pub fn pop(&mut self) -> Arc<Style> {
        if self.entries.len() == 1 {
            panic!("style stack popped below its root");
        }
        self.entries.pop().unwrap()
    }

    /// Number of styles on the stack, the root included
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The style of the current node
    pub fn current(&self) -> &Arc<Style> {
        self.entries.last().unwrap()
    }

    /// The document root style
    pub fn root(&self) -> &Arc<Style> {
        self.entries.first().unwrap()
    }

    /// A shallow copy of the stack, sharing every style
    ///
    /// Used to capture the cascade state of a node whose layout is deferred
    /// (floats, absolutely positioned elements); the snapshot keeps
    /// resolving the captured chain while the walk moves on.
    pub fn snapshot(&self) -> StyleStack {
        StyleStack {
            entries: self.entries.clone(),
        }
    }

    /// Merges inheritance, own values, variables and states into one style
    fn merge_cascade(&self) -> Style {
        let mut merged = Style::new();

        // Ancestors root to parent. Each fully replaces what the previous one
        // inherited down, so the nearest ancestor's typography wins.
        for ancestor in &self.entries[..self.entries.len() - 1] {
            ancestor.merge_inherited(&mut merged, true, 0);
        }

        let current = self.current();
        current.merge_into(&mut merged);

        // Variable scopes accumulate root to current, last definition winning.
        for entry in &self.entries {
            if let Some(variables) = entry.variables() {
                if !variables.is_empty() {
                    merged.variables_mut().merge(variables);
                }
            }
        }

        merged.copy_states_from(current);
        merged
    }

    /// Resolves the current node into a flattened [`StyleFull`]
    ///
    /// `page_size` is the page being laid out; `font_size` and
    /// `root_font_size` are the inherited and document-root font sizes in
    /// points. The sizer supplies the containing block except for `Fixed`
    /// nodes, which always size against the page.
    pub fn get_full_style(
        &self,
        page_size: Size,
        sizer: &mut dyn ContainerSizer,
        font_size: f32,
        root_font_size: f32,
    ) -> StyleFull {
        let merged = self.merge_cascade();

        // The sizer contract is narrower than the full mode set: absolutely
        // positioned nodes ask for the nearest positioned ancestor's box
        // (Relative), everything else in flow asks for the normal-flow
        // container (Block).
        let mode = merged.value(&keys::POSITION_MODE).unwrap_or_default();
        let container_size = match mode {
            PositionMode::Fixed => page_size,
            PositionMode::Absolute => sizer.container_size(&merged, PositionMode::Relative),
            _ => sizer.container_size(&merged, PositionMode::Block),
        };

        let ctx = FlattenContext::new(page_size, container_size, font_size, root_font_size);
        let mut full = StyleFull::new(merged);
        full.flatten(&ctx);
        full
    }

    /// Resolves the current node as a page description
    ///
    /// Pages have no containing block: `default_page_size` is the document's
    /// page size (A4 unless the host configures otherwise), relative page
    /// dimensions resolve against it, and everything else flattens against
    /// the page's own resolved size.
    pub fn get_full_style_for_page(
        &self,
        default_page_size: Size,
        font_size: f32,
        root_font_size: f32,
    ) -> StyleFull {
        let merged = self.merge_cascade();

        let bootstrap = FlattenContext::new(
            default_page_size,
            default_page_size,
            font_size,
            root_font_size,
        );
        let page_size = Size::new(
            merged
                .value(&keys::PAGE_WIDTH)
                .map(|unit| unit.resolve(&bootstrap, RelativeBase::Width))
                .unwrap_or(default_page_size.width),
            merged
                .value(&keys::PAGE_HEIGHT)
                .map(|unit| unit.resolve(&bootstrap, RelativeBase::Height))
                .unwrap_or(default_page_size.height),
        );

        let ctx = FlattenContext::new(page_size, page_size, font_size, root_font_size);
        let mut full = StyleFull::new(merged);
        full.flatten(&ctx);
        // The page keys themselves resolved against the default size above;
        // pin them so layout reads the same numbers.
        full.set_value(&keys::PAGE_WIDTH, Unit::pt(page_size.width));
        full.set_value(&keys::PAGE_HEIGHT, Unit::pt(page_size.height));
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::KeyId;
    use crate::value::Color;

    fn fixed_sizer(size: Size) -> impl FnMut(&Style, PositionMode) -> Size {
        move |_: &Style, _| size
    }

    fn resolve(stack: &StyleStack) -> StyleFull {
        stack.get_full_style(
            Size::new(595.0, 842.0),
            &mut fixed_sizer(Size::new(400.0, 600.0)),
            12.0,
            12.0,
        )
    }

    #[test]
    fn push_pop_and_count() {
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        assert_eq!(stack.count(), 1);

        let child = Arc::new(Style::new());
        stack.push(child.clone());
        assert_eq!(stack.count(), 2);
        assert!(Arc::ptr_eq(stack.current(), &child));

        stack.pop();
        assert_eq!(stack.count(), 1);
    }

    #[test]
    #[should_panic(expected = "popped below its root")]
    fn popping_the_root_panics() {
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        stack.pop();
    }

    #[test]
    fn inherited_keys_flow_down_others_do_not() {
        let mut root = Style::new();
        root.set_value(&keys::FONT_SIZE, Unit::pt(12.0));
        root.set_value(&keys::MARGIN_ALL, Unit::pt(25.0));

        let mut stack = StyleStack::new(Arc::new(root));
        let mut child = Style::new();
        child.set_value(&keys::FONT_BOLD, true);
        stack.push(Arc::new(child));

        let full = resolve(&stack);
        assert_eq!(full.value(&keys::FONT_SIZE), Some(Unit::pt(12.0)));
        assert_eq!(full.value(&keys::FONT_BOLD), Some(true));
        // Margins do not inherit.
        assert_eq!(full.value(&keys::MARGIN_ALL), None);
    }

    #[test]
    fn nearer_ancestors_replace_farther_inheritance() {
        let mut root = Style::new();
        root.set_value(&keys::FILL_COLOR, Color::BLACK);
        root.set_value(&keys::FONT_SIZE, Unit::pt(12.0));

        let mut middle = Style::new();
        middle.set_value(&keys::FILL_COLOR, Color::WHITE);

        let mut stack = StyleStack::new(Arc::new(root));
        stack.push(Arc::new(middle));
        stack.push(Arc::new(Style::new()));

        let full = resolve(&stack);
        assert_eq!(full.value(&keys::FILL_COLOR), Some(Color::WHITE));
        // Untouched inherited keys still come from the root.
        assert_eq!(full.value(&keys::FONT_SIZE), Some(Unit::pt(12.0)));
    }

    #[test]
    fn own_values_beat_inherited_ones() {
        let mut root = Style::new();
        root.set_value(&keys::FONT_SIZE, Unit::pt(12.0));

        let mut stack = StyleStack::new(Arc::new(root));
        let mut child = Style::new();
        child.set_value(&keys::FONT_SIZE, Unit::pt(9.0));
        stack.push(Arc::new(child));

        let full = resolve(&stack);
        assert_eq!(full.value(&keys::FONT_SIZE), Some(Unit::pt(9.0)));
    }

    #[test]
    fn resolution_leaves_sources_untouched() {
        let mut root = Style::new();
        root.set_value(&keys::FONT_SIZE, Unit::em(1.0));
        let root = Arc::new(root);

        let mut stack = StyleStack::new(root.clone());
        stack.push(Arc::new(Style::new()));
        let _ = resolve(&stack);

        // The shared source still holds its authored relative value.
        assert_eq!(root.value(&keys::FONT_SIZE), Some(Unit::em(1.0)));
    }

    #[test]
    fn relative_units_flatten_against_the_sized_container() {
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        let mut child = Style::new();
        child.set_value(&keys::WIDTH, Unit::percent(50.0));
        child.set_value(&keys::HEIGHT, Unit::percent(50.0));
        stack.push(Arc::new(child));

        let full = resolve(&stack);
        assert_eq!(full.value(&keys::WIDTH), Some(Unit::pt(200.0)));
        assert_eq!(full.value(&keys::HEIGHT), Some(Unit::pt(300.0)));
    }

    #[test]
    fn fixed_nodes_size_against_the_page() {
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        let mut child = Style::new();
        child.set_value(&keys::POSITION_MODE, PositionMode::Fixed);
        child.set_value(&keys::WIDTH, Unit::percent(100.0));
        stack.push(Arc::new(child));

        // A sizer that would be wrong for fixed nodes; it must not be asked.
        let mut sizer = |_: &Style, _: PositionMode| -> Size {
            panic!("fixed nodes must not consult the container sizer")
        };
        let full = stack.get_full_style(Size::new(595.0, 842.0), &mut sizer, 12.0, 12.0);
        assert_eq!(full.value(&keys::WIDTH), Some(Unit::pt(595.0)));
    }

    #[test]
    fn absolute_nodes_ask_the_sizer_in_relative_mode() {
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        let mut child = Style::new();
        child.set_value(&keys::POSITION_MODE, PositionMode::Absolute);
        stack.push(Arc::new(child));

        let mut seen = None;
        let mut sizer = |style: &Style, mode: PositionMode| {
            seen = Some((style.is_defined(KeyId::PositionMode), mode));
            Size::new(100.0, 100.0)
        };
        let _ = stack.get_full_style(Size::new(595.0, 842.0), &mut sizer, 12.0, 12.0);
        assert_eq!(seen, Some((true, PositionMode::Relative)));
    }

    #[test]
    fn in_flow_nodes_ask_the_sizer_in_block_mode() {
        // Inline and inline-block still size against the normal-flow
        // container; the sizer never sees those modes.
        for mode in [
            PositionMode::Block,
            PositionMode::Inline,
            PositionMode::InlineBlock,
            PositionMode::Relative,
        ] {
            let mut stack = StyleStack::new(Arc::new(Style::new()));
            let mut child = Style::new();
            child.set_value(&keys::POSITION_MODE, mode);
            stack.push(Arc::new(child));

            let mut seen = None;
            let mut sizer = |_: &Style, mode: PositionMode| {
                seen = Some(mode);
                Size::new(100.0, 100.0)
            };
            let _ = stack.get_full_style(Size::new(595.0, 842.0), &mut sizer, 12.0, 12.0);
            assert_eq!(seen, Some(PositionMode::Block), "for {:?}", mode);
        }
    }

    #[test]
    fn variable_scopes_accumulate_last_wins() {
        let mut root = Style::new();
        root.define_variable("accent", "red");
        root.define_variable("paper", "white");

        let mut stack = StyleStack::new(Arc::new(root));
        let mut child = Style::new();
        child.define_variable("accent", "blue");
        stack.push(Arc::new(child));

        let full = resolve(&stack);
        let variables = full.style().variables().unwrap();
        assert_eq!(variables.value("accent"), Some("blue"));
        assert_eq!(variables.value("paper"), Some("white"));
    }

    #[test]
    fn state_overrides_come_from_the_current_node() {
        use crate::style::StateKind;

        let mut over = Style::new();
        over.set_value(&keys::FILL_COLOR, Color::WHITE);
        let mut child = Style::new();
        child.set_state_style(StateKind::Over, over);

        let mut stack = StyleStack::new(Arc::new(Style::new()));
        stack.push(Arc::new(child));

        let full = resolve(&stack);
        let state = full.style().state_style(StateKind::Over).unwrap();
        assert_eq!(state.value(&keys::FILL_COLOR), Some(Color::WHITE));
    }

    #[test]
    fn page_resolution_uses_the_supplied_default() {
        let stack = StyleStack::new(Arc::new(Style::new()));

        let a4 = stack.get_full_style_for_page(Size::new(595.0, 842.0), 12.0, 12.0);
        assert_eq!(a4.page().size, Size::new(595.0, 842.0));

        // A Letter document keeps its own default without any page keys set.
        let letter = stack.get_full_style_for_page(Size::new(612.0, 792.0), 12.0, 12.0);
        assert_eq!(letter.page().size, Size::new(612.0, 792.0));
    }

    #[test]
    fn relative_page_dimensions_resolve_against_the_default_page() {
        let mut style = Style::new();
        style.set_value(&keys::PAGE_WIDTH, Unit::percent(50.0));
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        stack.push(Arc::new(style));

        let full = stack.get_full_style_for_page(Size::new(595.0, 842.0), 12.0, 12.0);
        let page = full.page();
        assert_eq!(page.size, Size::new(297.5, 842.0));
    }

    #[test]
    fn page_margins_flatten_against_the_resolved_page() {
        let mut style = Style::new();
        style.set_value(&keys::PAGE_WIDTH, Unit::pt(400.0));
        style.set_value(&keys::MARGIN_ALL, Unit::percent(10.0));
        let mut stack = StyleStack::new(Arc::new(Style::new()));
        stack.push(Arc::new(style));

        let full = stack.get_full_style_for_page(Size::new(595.0, 842.0), 12.0, 12.0);
        assert_eq!(full.value(&keys::MARGIN_ALL), Some(Unit::pt(40.0)));
    }

    #[test]
    fn snapshot_resolves_the_captured_chain_after_the_walk_moves_on() {
        let mut root = Style::new();
        root.set_value(&keys::FONT_SIZE, Unit::pt(12.0));

        let mut float = Style::new();
        float.set_value(&keys::FONT_BOLD, true);

        let mut stack = StyleStack::new(Arc::new(root));
        stack.push(Arc::new(float));
        let snapshot = stack.snapshot();
        assert_eq!(snapshot.count(), 2);

        // The walk leaves the node and descends elsewhere.
        stack.pop();
        let mut sibling = Style::new();
        sibling.set_value(&keys::FONT_ITALIC, true);
        stack.push(Arc::new(sibling));

        let deferred = resolve(&snapshot);
        assert_eq!(deferred.value(&keys::FONT_SIZE), Some(Unit::pt(12.0)));
        assert_eq!(deferred.value(&keys::FONT_BOLD), Some(true));
        assert_eq!(deferred.value(&keys::FONT_ITALIC), None);
    }
}
