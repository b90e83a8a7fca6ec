//! The node-scoped style collection and its merge operations
//!
//! A [`Style`] owns one value per schema key, an optional set of
//! [variables](crate::variables::VariableSet) and optional per-state
//! override styles. Styles are built by the parsing/component layer, pushed
//! onto a [`StyleStack`](crate::stack::StyleStack) during the tree walk, and
//! combined by the two merge operations here:
//!
//! - [`Style::merge_into`] copies every value, respecting priorities, and is
//!   how a node's own style overrides what the cascade has accumulated.
//! - [`Style::merge_inherited`] copies only schema-inherited keys and is how
//!   ancestor typography flows down to descendants.
//!
//! Styles sourced from parsed declarations are read-many: one `Style` is
//! pushed for many nodes across a render, so the cascade never mutates a
//! source style. The only mutable product is the freshly-built
//! [`StyleFull`](crate::full::StyleFull).

use crate::schema::{KeyId, StyleKey};
use crate::value::{PropertyType, PropertyValue, StyleValue};
use crate::variables::VariableSet;
use rustc_hash::FxHashMap;

/// Interactive state a style override can target
///
/// Paged output is mostly static, but interactive widgets (links, form
/// fields) carry appearance overrides for viewer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Pointer over the widget
    Over,
    /// Pointer pressed on the widget
    Down,
    /// Widget has keyboard focus
    Focus,
}

/// A collection of style values scoped to one node or rule
///
/// # Examples
///
/// ```
/// use docstyle::{keys, Style, Unit};
///
/// let mut style = Style::new();
/// style.set_value(&keys::MARGIN_ALL, Unit::pt(10.0));
/// assert!(style.is_defined(keys::MARGIN_ALL.id));
/// assert_eq!(style.value(&keys::MARGIN_ALL), Some(Unit::pt(10.0)));
///
/// style.remove_value(keys::MARGIN_ALL.id);
/// assert_eq!(style.value(&keys::MARGIN_ALL), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    values: FxHashMap<KeyId, StyleValue>,
    variables: Option<Box<VariableSet>>,
    states: Option<Box<FxHashMap<StateKind, Style>>>,
}

impl Style {
    /// Creates an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values set on this style
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no values are set (variables and states do not count)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sets a typed value with the default priority of 0
    pub fn set_value<T: PropertyType>(&mut self, key: &StyleKey<T>, value: T) {
        self
            .values
            .insert(key.id, StyleValue::new(value.into_property()));
    }

    /// Sets a typed value with an explicit cascade priority
    pub fn set_value_with_priority<T: PropertyType>(
        &mut self,
        key: &StyleKey<T>,
        value: T,
        priority: i32,
    ) {
        self
            .values
            .insert(key.id, StyleValue::with_priority(value.into_property(), priority));
    }

    /// Reads a typed value
    ///
    /// Returns `None` when the key is unset; callers apply the documented
    /// per-property default. A stored payload of the wrong variant also reads
    /// as `None`, which cannot happen through the typed setters.
    pub fn value<T: PropertyType>(&self, key: &StyleKey<T>) -> Option<T> {
        self
            .values
            .get(&key.id)
            .and_then(|stored| T::from_property(&stored.value))
    }

    /// Reads a stored value with its priority, untyped
    pub fn try_get_value(&self, id: KeyId) -> Option<&StyleValue> {
        self.values.get(&id)
    }

    /// Removes a value; removing an absent key is a no-op
    pub fn remove_value(&mut self, id: KeyId) {
        self.values.remove(&id);
    }

    /// Presence check, used by derived fallback logic (e.g. inferring a
    /// border line type from whichever of color/dash is set)
    pub fn is_defined(&self, id: KeyId) -> bool {
        self.values.contains_key(&id)
    }

    /// Iterates over all `(key, value)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (KeyId, &StyleValue)> {
        self.values.iter().map(|(id, value)| (*id, value))
    }

    /// Removes all values, variables and state overrides
    pub fn clear(&mut self) {
        self.values.clear();
        self.variables = None;
        self.states = None;
    }

    /// Inserts a raw stored value, keeping its priority
    ///
    /// Intended for parser code that builds values before the typed key is in
    /// hand; the cascade itself goes through the merge operations.
    pub fn insert_raw(&mut self, id: KeyId, value: StyleValue) {
        self.values.insert(id, value);
    }

    /// Sets an untyped value at the default priority
    pub fn set_raw(&mut self, id: KeyId, value: PropertyValue) {
        self.values.insert(id, StyleValue::new(value));
    }

    // ----- variables -----

    /// The variables owned by this style, if any
    ///
    /// Allocated lazily: a style with no variables stays `None` and
    /// contributes nothing when the stack accumulates scopes.
    pub fn variables(&self) -> Option<&VariableSet> {
        self.variables.as_deref()
    }

    /// Mutable access to the variables, allocating the set on first use
    pub fn variables_mut(&mut self) -> &mut VariableSet {
        self.variables.get_or_insert_with(Default::default)
    }

    /// Defines a literal variable on this style
    pub fn define_variable(&mut self, name: &str, value: &str) {
        self.variables_mut().define(name, value);
    }

    // ----- state overrides -----

    /// True when any per-state override styles are present
    pub fn has_states(&self) -> bool {
        self.states.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// The override style for a state, if declared
    pub fn state_style(&self, state: StateKind) -> Option<&Style> {
        self.states.as_ref().and_then(|s| s.get(&state))
    }

    /// Sets the override style for a state
    pub fn set_state_style(&mut self, state: StateKind, style: Style) {
        self
            .states
            .get_or_insert_with(Default::default)
            .insert(state, style);
    }

    /// Copies all state overrides from another style, replacing same-state
    /// overrides already present
    pub fn copy_states_from(&mut self, other: &Style) {
        let Some(source) = other.states.as_deref() else {
            return;
        };
        if source.is_empty() {
            return;
        }
        let target = self.states.get_or_insert_with(Default::default);
        for (state, style) in source {
            target.insert(*state, style.clone());
        }
    }

    // ----- merge operations -----

    /// Merges every value of this style into `target`
    ///
    /// A value is copied when its priority is equal to or higher than
    /// whatever `target` currently holds for that key, so of two merges at
    /// the same priority the later one wins (declaration order breaks ties).
    /// Keys only present in `target` are untouched.
    pub fn merge_into(&self, target: &mut Style) {
        for (id, value) in &self.values {
            if let Some(existing) = target.values.get(id) {
                if existing.priority > value.priority {
                    continue;
                }
            }
            target.values.insert(*id, value.clone());
        }
    }

    /// Merges every value of this style into `target` with its priority
    /// rewritten to `priority`
    ///
    /// Used by conditional groups whose match raises specificity (a named
    /// page selector merges at priority 10). The same equal-or-higher rule as
    /// [`Style::merge_into`] applies, against the rewritten priority.
    pub fn merge_into_with_priority(&self, target: &mut Style, priority: i32) {
        for (id, value) in &self.values {
            if let Some(existing) = target.values.get(id) {
                if existing.priority > priority {
                    continue;
                }
            }
            target
                .values
                .insert(*id, StyleValue::with_priority(value.value.clone(), priority));
        }
    }

    /// Merges only schema-inherited values into `target`
    ///
    /// Each copied value has its priority rewritten to `priority`. With
    /// `replace` set, existing target values are overwritten regardless of
    /// their priority — ancestor inheritance must be fully superseded by any
    /// later, more specific ancestor in the chain. Without `replace`, only
    /// keys absent from `target` are filled in.
    pub fn merge_inherited(&self, target: &mut Style, replace: bool, priority: i32) {
        for (id, value) in &self.values {
            if !id.is_inherited() {
                continue;
            }
            if !replace && target.values.contains_key(id) {
                continue;
            }
            target
                .values
                .insert(*id, StyleValue::with_priority(value.value.clone(), priority));
        }
    }
}
