//! Conditional style groups
//!
//! A style sheet can scope declarations to an output medium or to named
//! pages. A [`StyleGroup`] holds styles and nested groups behind an
//! optional [`Matcher`]; merging a group against a [`MatchContext`] applies
//! only the branches whose matchers hold, and contributes nothing at all
//! otherwise.
//!
//! A page matcher with a name is a selector: when it matches the context's
//! page name, its styles merge at elevated priority so they beat the plain
//! declarations they specialise.

use crate::style::Style;

/// Priority given to values merged through a matching named page selector
pub const PAGE_SELECTOR_PRIORITY: i32 = 10;

/// The output medium a document is being produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Paged output destined for paper or PDF (default)
    #[default]
    Print,
    /// On-screen viewing
    Screen,
}

/// The condition guarding a style group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches when the context's output format is this one
    Media(OutputFormat),
    /// Matches pages; with a name, only the page of that name, and the
    /// group's values merge at [`PAGE_SELECTOR_PRIORITY`]
    Page(Option<String>),
}

impl Matcher {
    /// Matches any page, at normal priority
    pub fn any_page() -> Self {
        Self::Page(None)
    }

    /// Matches only the named page, at selector priority
    pub fn named_page(name: impl Into<String>) -> Self {
        Self::Page(Some(name.into()))
    }

    /// Whether this matcher holds in `ctx`
    pub fn matches(&self, ctx: &MatchContext) -> bool {
        match self {
            Self::Media(format) => *format == ctx.format,
            Self::Page(None) => true,
            Self::Page(Some(name)) => ctx.page_name.as_deref() == Some(name.as_str()),
        }
    }

    /// The merge priority this matcher confers, if any
    fn elevated_priority(&self) -> Option<i32> {
        match self {
            Self::Page(Some(_)) => Some(PAGE_SELECTOR_PRIORITY),
            _ => None,
        }
    }
}

/// The situation a group is matched against
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchContext {
    /// The output medium being produced
    pub format: OutputFormat,
    /// The name of the page being styled, when pages are named
    pub page_name: Option<String>,
}

impl MatchContext {
    /// A context for `format` with no page name
    pub fn for_format(format: OutputFormat) -> Self {
        Self {
            format,
            page_name: None,
        }
    }

    /// A print context for the named page
    pub fn for_page(name: impl Into<String>) -> Self {
        Self {
            format: OutputFormat::Print,
            page_name: Some(name.into()),
        }
    }
}

/// One member of a group: a plain style or a nested group
#[derive(Debug, Clone, PartialEq)]
pub enum GroupEntry {
    Style(Style),
    Group(StyleGroup),
}

/// A conditional collection of styles and nested groups
///
/// # Examples
///
/// ```
/// use docstyle::{keys, Color, MatchContext, Matcher, OutputFormat, Style, StyleGroup};
///
/// let mut screen_only = Style::new();
/// screen_only.set_value(&keys::FILL_COLOR, Color::rgb(0, 0, 200));
///
/// let mut group = StyleGroup::with_matcher(Matcher::Media(OutputFormat::Screen));
/// group.add_style(screen_only);
///
/// let mut print = Style::new();
/// group.merge_into(&mut print, &MatchContext::for_format(OutputFormat::Print));
/// assert!(print.is_empty());
///
/// let mut screen = Style::new();
/// group.merge_into(&mut screen, &MatchContext::for_format(OutputFormat::Screen));
/// assert_eq!(screen.value(&keys::FILL_COLOR), Some(Color::rgb(0, 0, 200)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleGroup {
    matcher: Option<Matcher>,
    children: Vec<GroupEntry>,
}

impl StyleGroup {
    /// Creates an unconditional group
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group guarded by `matcher`
    pub fn with_matcher(matcher: Matcher) -> Self {
        Self {
            matcher: Some(matcher),
            children: Vec::new(),
        }
    }

    /// The group's matcher, if any
    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }

    /// Appends a style to the group
    pub fn add_style(&mut self, style: Style) {
        self.children.push(GroupEntry::Style(style));
    }

    /// Appends a nested group
    pub fn add_group(&mut self, group: StyleGroup) {
        self.children.push(GroupEntry::Group(group));
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The direct children, in declaration order
    pub fn children(&self) -> &[GroupEntry] {
        &self.children
    }

    /// Merges every matching branch into `target`
    ///
    /// When the group's own matcher does not hold, nothing merges. Children
    /// apply in declaration order, so later declarations win equal-priority
    /// conflicts. A matching named page selector anywhere in the chain
    /// elevates the priority of everything beneath it.
    pub fn merge_into(&self, target: &mut Style, ctx: &MatchContext) {
        self.merge_with(target, ctx, None);
    }

    fn merge_with(&self, target: &mut Style, ctx: &MatchContext, elevated: Option<i32>) {
        if let Some(matcher) = &self.matcher {
            if !matcher.matches(ctx) {
                return;
            }
        }
        let priority = self
            .matcher
            .as_ref()
            .and_then(Matcher::elevated_priority)
            .or(elevated);

        for child in &self.children {
            match child {
                GroupEntry::Style(style) => match priority {
                    Some(priority) => style.merge_into_with_priority(target, priority),
                    None => style.merge_into(target),
                },
                GroupEntry::Group(group) => group.merge_with(target, ctx, priority),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{keys, KeyId};
    use crate::units::Unit;
    use crate::value::Color;

    fn fill(color: Color) -> Style {
        let mut style = Style::new();
        style.set_value(&keys::FILL_COLOR, color);
        style
    }

    #[test]
    fn unconditional_group_always_merges() {
        let mut group = StyleGroup::new();
        group.add_style(fill(Color::BLACK));

        let mut target = Style::new();
        group.merge_into(&mut target, &MatchContext::default());
        assert_eq!(target.value(&keys::FILL_COLOR), Some(Color::BLACK));
    }

    #[test]
    fn media_mismatch_contributes_nothing() {
        let mut group = StyleGroup::with_matcher(Matcher::Media(OutputFormat::Screen));
        group.add_style(fill(Color::WHITE));

        let mut target = fill(Color::BLACK);
        group.merge_into(&mut target, &MatchContext::for_format(OutputFormat::Print));
        assert_eq!(target.value(&keys::FILL_COLOR), Some(Color::BLACK));
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn named_page_merges_at_selector_priority() {
        let mut group = StyleGroup::with_matcher(Matcher::named_page("cover"));
        group.add_style(fill(Color::WHITE));

        let mut target = fill(Color::BLACK);
        group.merge_into(&mut target, &MatchContext::for_page("cover"));
        assert_eq!(target.value(&keys::FILL_COLOR), Some(Color::WHITE));
        assert_eq!(
            target.try_get_value(KeyId::FillColor).unwrap().priority,
            PAGE_SELECTOR_PRIORITY
        );
    }

    #[test]
    fn named_page_ignores_other_pages() {
        let mut group = StyleGroup::with_matcher(Matcher::named_page("cover"));
        group.add_style(fill(Color::WHITE));

        let mut target = Style::new();
        group.merge_into(&mut target, &MatchContext::for_page("body"));
        assert!(target.is_empty());

        // No page name at all also fails a named selector.
        group.merge_into(&mut target, &MatchContext::default());
        assert!(target.is_empty());
    }

    #[test]
    fn any_page_matcher_merges_at_normal_priority() {
        let mut group = StyleGroup::with_matcher(Matcher::any_page());
        group.add_style(fill(Color::WHITE));

        let mut target = Style::new();
        group.merge_into(&mut target, &MatchContext::for_page("body"));
        assert_eq!(target.try_get_value(KeyId::FillColor).unwrap().priority, 0);
    }

    #[test]
    fn selector_priority_survives_later_plain_merges() {
        let mut group = StyleGroup::with_matcher(Matcher::named_page("cover"));
        group.add_style(fill(Color::WHITE));

        let mut target = Style::new();
        group.merge_into(&mut target, &MatchContext::for_page("cover"));

        // A later ordinary merge cannot override the selector's value.
        fill(Color::BLACK).merge_into(&mut target);
        assert_eq!(target.value(&keys::FILL_COLOR), Some(Color::WHITE));
    }

    #[test]
    fn nested_groups_need_every_matcher_to_hold() {
        let mut inner = StyleGroup::with_matcher(Matcher::Media(OutputFormat::Screen));
        inner.add_style(fill(Color::WHITE));
        let mut outer = StyleGroup::with_matcher(Matcher::named_page("cover"));
        outer.add_group(inner);

        // Page matches but the inner media matcher does not.
        let mut target = Style::new();
        outer.merge_into(&mut target, &MatchContext::for_page("cover"));
        assert!(target.is_empty());

        // Both hold: merged, and still at the outer selector's priority.
        let ctx = MatchContext {
            format: OutputFormat::Screen,
            page_name: Some("cover".to_string()),
        };
        outer.merge_into(&mut target, &ctx);
        assert_eq!(
            target.try_get_value(KeyId::FillColor).unwrap().priority,
            PAGE_SELECTOR_PRIORITY
        );
    }

    #[test]
    fn later_children_win_equal_priority() {
        let mut group = StyleGroup::new();
        group.add_style(fill(Color::BLACK));
        let mut second = Style::new();
        second.set_value(&keys::FILL_COLOR, Color::WHITE);
        second.set_value(&keys::MARGIN_ALL, Unit::pt(6.0));
        group.add_style(second);

        let mut target = Style::new();
        group.merge_into(&mut target, &MatchContext::default());
        assert_eq!(target.value(&keys::FILL_COLOR), Some(Color::WHITE));
        assert_eq!(target.value(&keys::MARGIN_ALL), Some(Unit::pt(6.0)));
    }
}
