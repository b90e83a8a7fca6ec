//! Error types for the cascade engine
//!
//! Two kinds of failure exist in this crate and they are handled differently:
//!
//! - **Usage errors** (popping a style stack below its root, asking an item
//!   view for an attribute it does not declare) indicate a bug in cascade
//!   bookkeeping on the caller's side. These panic immediately with a
//!   descriptive message; they are never returned as values.
//! - **Data errors** (an unparseable counter value, an expression that fails
//!   to evaluate) come from document content. These are surfaced as the
//!   `Error` values below so the caller can log them and keep rendering.
//!
//! Missing style values are neither: every property lookup has a documented
//! default and absence is normal.

use thiserror::Error;

/// Result type alias for cascade operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the cascade engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A counter value declaration could not be parsed
    #[error("Counter error: {0}")]
    Counter(#[from] CounterError),

    /// A bound variable expression failed to evaluate
    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),
}

/// Errors raised while parsing counter value declarations
///
/// Counter declarations are whitespace-separated `name [value]` pairs, e.g.
/// `"chapter 1 section"`. Anything else is reported with the offending input
/// echoed so the document author can find the bad rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// The declaration was empty or whitespace-only
    #[error("Counter declaration is empty")]
    Empty,

    /// A numeric value appeared before any counter name
    #[error("Counter value '{input}' has a number before any counter name")]
    ValueBeforeName { input: String },

    /// The `reversed(...)` counter syntax is recognised but not implemented
    #[error("Unsupported counter syntax in '{input}': reversed counters are not implemented")]
    Unsupported { input: String },
}

/// Failure to evaluate a data-bound variable expression
///
/// Produced by [`ExpressionEvaluator`](crate::variables::ExpressionEvaluator)
/// implementations. The engine logs these and keeps the variable's previous
/// value rather than aborting the render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to evaluate '{expression}': {message}")]
pub struct ExpressionError {
    /// The expression source text that failed
    pub expression: String,
    /// Evaluator-specific description of the failure
    pub message: String,
}

impl ExpressionError {
    /// Creates an expression error from the failing source and a reason
    pub fn new(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_error_echoes_input() {
        let error = CounterError::Unsupported {
            input: "reversed(pages)".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("reversed(pages)"));
        assert!(display.contains("not implemented"));
    }

    #[test]
    fn counter_error_value_before_name() {
        let error = CounterError::ValueBeforeName { input: "5".to_string() };
        assert!(format!("{}", error).contains("'5'"));
    }

    #[test]
    fn expression_error_display() {
        let error = ExpressionError::new("count(items)", "unknown function 'count'");
        let display = format!("{}", error);
        assert!(display.contains("count(items)"));
        assert!(display.contains("unknown function"));
    }

    #[test]
    fn error_from_counter_error() {
        let error: Error = CounterError::Empty.into();
        assert!(matches!(error, Error::Counter(_)));
    }

    #[test]
    fn error_from_expression_error() {
        let error: Error = ExpressionError::new("a + b", "no such variable 'a'").into();
        assert!(matches!(error, Error::Expression(_)));
    }

    #[test]
    fn error_trait_implemented() {
        let error = Error::Counter(CounterError::Empty);
        let _: &dyn std::error::Error = &error;
    }
}
