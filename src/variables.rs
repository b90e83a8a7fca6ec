//! Style variables and data binding
//!
//! A style may own a set of named variables (`--theme-color` style scoping,
//! one set per style). During cascade resolution the stack accumulates the
//! variable sets of every ancestor into one scope, later definitions
//! overriding earlier ones by name.
//!
//! A variable can carry an unevaluated expression. At data-bind time the
//! host calls [`VariableSet::bind`] with its own [`ExpressionEvaluator`] and
//! a [`VariableProvider`] chain; each expression is re-evaluated and the
//! result becomes the variable's value. The engine never interprets
//! expressions itself — it only needs the resolved string.
//!
//! # Examples
//!
//! ```
//! use docstyle::variables::VariableSet;
//!
//! let mut theme = VariableSet::new();
//! theme.define("accent", "#c02020");
//!
//! let mut local = VariableSet::new();
//! local.define("accent", "#2020c0");
//!
//! let mut scope = theme.clone();
//! scope.merge(&local);
//! assert_eq!(scope.value("accent"), Some("#2020c0"));
//! ```

use crate::error::ExpressionError;
use log::warn;
use rustc_hash::FxHashMap;

/// A named variable, optionally backed by an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVariable {
    /// The variable name, without any sigil
    pub name: String,
    /// The current resolved value
    pub value: String,
    /// Unevaluated expression source, re-evaluated on every bind
    pub expression: Option<String>,
}

impl StyleVariable {
    /// Creates a plain variable with a literal value
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expression: None,
        }
    }

    /// Creates an expression-backed variable with an empty initial value
    pub fn expression(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            expression: Some(expression.into()),
        }
    }
}

/// Read access to resolved variable values by name
///
/// The engine resolves variables through this capability so the host can
/// chain document scopes onto runtime data sources without this crate
/// knowing about either.
pub trait VariableProvider {
    /// The value of a variable, or `None` when this provider does not know it
    fn variable(&self, name: &str) -> Option<String>;
}

/// Evaluates variable expressions at data-bind time
///
/// Implemented by the host's expression engine. The provider argument gives
/// the evaluator access to variables already in scope, with fallback
/// chaining handled by [`ChainedProvider`].
pub trait ExpressionEvaluator {
    /// Evaluates an expression to its string result
    fn evaluate(
        &self,
        expression: &str,
        variables: &dyn VariableProvider,
    ) -> Result<String, ExpressionError>;
}

/// A provider that consults one scope before falling back to another
#[derive(Clone, Copy)]
pub struct ChainedProvider<'a> {
    first: &'a dyn VariableProvider,
    fallback: &'a dyn VariableProvider,
}

impl<'a> ChainedProvider<'a> {
    /// Chains `first` over `fallback`
    pub fn new(first: &'a dyn VariableProvider, fallback: &'a dyn VariableProvider) -> Self {
        Self { first, fallback }
    }
}

impl VariableProvider for ChainedProvider<'_> {
    fn variable(&self, name: &str) -> Option<String> {
        self
            .first
            .variable(name)
            .or_else(|| self.fallback.variable(name))
    }
}

impl std::fmt::Debug for ChainedProvider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedProvider").finish_non_exhaustive()
    }
}

/// A provider with no variables at all
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProvider;

impl VariableProvider for EmptyProvider {
    fn variable(&self, _name: &str) -> Option<String> {
        None
    }
}

/// The variables owned by one style
///
/// Merging is last-wins by name, which is what gives descendant styles
/// override semantics when the stack accumulates scopes root-to-current.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableSet {
    variables: FxHashMap<String, StyleVariable>,
}

impl VariableSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a literal variable
    pub fn define(&mut self, name: &str, value: &str) {
        self
            .variables
            .insert(name.to_string(), StyleVariable::literal(name, value));
    }

    /// Adds a variable, replacing any previous definition of the same name
    pub fn insert(&mut self, variable: StyleVariable) {
        self.variables.insert(variable.name.clone(), variable);
    }

    /// The resolved value of a variable, if defined here
    pub fn value(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|v| v.value.as_str())
    }

    /// The full variable record, if defined here
    pub fn get(&self, name: &str) -> Option<&StyleVariable> {
        self.variables.get(name)
    }

    /// Removes a variable; absent names are a no-op
    pub fn remove(&mut self, name: &str) -> Option<StyleVariable> {
        self.variables.remove(name)
    }

    /// True when a variable of this name is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables defined
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when no variables are defined
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Removes all variables
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Iterates over the variables in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &StyleVariable> {
        self.variables.values()
    }

    /// Copies every variable from `other` into this set, overriding
    /// same-named definitions (last-wins)
    pub fn merge(&mut self, other: &VariableSet) {
        for variable in other.variables.values() {
            self.variables.insert(variable.name.clone(), variable.clone());
        }
    }

    /// Re-evaluates every expression-backed variable
    ///
    /// Each expression sees the other variables in this set chained over the
    /// supplied provider. An expression that fails to evaluate is logged and
    /// keeps its previous value; the rest of the set still binds.
    pub fn bind(&mut self, evaluator: &dyn ExpressionEvaluator, provider: &dyn VariableProvider) {
        let names: Vec<String> = self
            .variables
            .values()
            .filter(|v| v.expression.is_some())
            .map(|v| v.name.clone())
            .collect();

        for name in names {
            let expression = match self.variables.get(&name).and_then(|v| v.expression.clone()) {
                Some(expression) => expression,
                None => continue,
            };
            let scope = ChainedProvider::new(self, provider);
            match evaluator.evaluate(&expression, &scope) {
                Ok(value) => {
                    if let Some(variable) = self.variables.get_mut(&name) {
                        variable.value = value;
                    }
                }
                Err(error) => {
                    warn!("variable '{}' kept its previous value: {}", name, error);
                }
            }
        }
    }
}

impl VariableProvider for VariableSet {
    fn variable(&self, name: &str) -> Option<String> {
        self.value(name).map(str::to_string)
    }
}
