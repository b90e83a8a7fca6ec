//! Counter value declarations
//!
//! The `counter-reset` and `counter-increment` style keys hold an ordered
//! chain of named counters, each with an integer value. Declarations are
//! authored as whitespace-separated `name [value]` pairs:
//!
//! ```text
//! chapter 1 section
//! ```
//!
//! parses to `chapter(1) -> section(0)`.
//!
//! The CSS `reversed(name)` syntax is recognised so it can be reported as
//! unsupported rather than silently treated as a counter named
//! `reversed(name)`.

use crate::error::CounterError;
use std::fmt;

/// A chain of named counters with values
///
/// # Examples
///
/// ```
/// use docstyle::CounterValue;
///
/// let counters = CounterValue::parse("chapter 1 section").unwrap();
/// assert_eq!(counters.name, "chapter");
/// assert_eq!(counters.value, 1);
/// let section = counters.next.as_ref().unwrap();
/// assert_eq!(section.name, "section");
/// assert_eq!(section.value, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterValue {
    /// The counter name
    pub name: String,
    /// The counter value; 0 unless the declaration gave one
    pub value: i32,
    /// The rest of the chain, in declaration order
    pub next: Option<Box<CounterValue>>,
}

impl CounterValue {
    /// Creates a single counter with an explicit value
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            next: None,
        }
    }

    /// Parses a counter declaration
    ///
    /// Each whitespace-separated token is either a counter name (starting a
    /// new link with value 0) or an integer (setting the value of the counter
    /// named immediately before it).
    ///
    /// # Errors
    ///
    /// - [`CounterError::Empty`] for blank input
    /// - [`CounterError::ValueBeforeName`] when a number appears before any name
    /// - [`CounterError::Unsupported`] for `reversed(...)` tokens
    pub fn parse(text: &str) -> Result<Self, CounterError> {
        let mut head: Option<CounterValue> = None;
        let mut tail: Option<&mut CounterValue> = None;

        for token in text.split_whitespace() {
            if token.starts_with("reversed(") {
                return Err(CounterError::Unsupported {
                    input: text.trim().to_string(),
                });
            }

            if let Ok(value) = token.parse::<i32>() {
                match tail.as_deref_mut() {
                    Some(last) => last.value = value,
                    None => {
                        return Err(CounterError::ValueBeforeName {
                            input: token.to_string(),
                        })
                    }
                }
                continue;
            }

            let link = CounterValue::new(token, 0);
            match tail.take() {
                None => {
                    head = Some(link);
                    tail = head.as_mut();
                }
                Some(last) => {
                    last.next = Some(Box::new(link));
                    tail = last.next.as_deref_mut();
                }
            }
        }

        head.ok_or(CounterError::Empty)
    }

    /// Appends a counter to the end of the chain
    pub fn push(&mut self, name: impl Into<String>, value: i32) {
        let mut last = self;
        while let Some(ref mut next) = last.next {
            last = next;
        }
        last.next = Some(Box::new(CounterValue::new(name, value)));
    }

    /// Iterates the chain in declaration order
    pub fn iter(&self) -> CounterIter<'_> {
        CounterIter { current: Some(self) }
    }

    /// Number of counters in the chain
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false; a parsed chain has at least one counter
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Finds a counter in the chain by name
    pub fn find(&self, name: &str) -> Option<&CounterValue> {
        self.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for CounterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, counter) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", counter.name, counter.value)?;
        }
        Ok(())
    }
}

/// Iterator over a counter chain
#[derive(Debug)]
pub struct CounterIter<'a> {
    current: Option<&'a CounterValue>,
}

impl<'a> Iterator for CounterIter<'a> {
    type Item = &'a CounterValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.next.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_value_name() {
        let counters = CounterValue::parse("chapter 1 section").unwrap();
        assert_eq!(counters.name, "chapter");
        assert_eq!(counters.value, 1);
        let section = counters.next.as_deref().unwrap();
        assert_eq!(section.name, "section");
        assert_eq!(section.value, 0);
        assert!(section.next.is_none());
        assert_eq!(counters.len(), 2);
    }

    #[test]
    fn parse_single_name_defaults_to_zero() {
        let counters = CounterValue::parse("page").unwrap();
        assert_eq!(counters.name, "page");
        assert_eq!(counters.value, 0);
        assert_eq!(counters.len(), 1);
    }

    #[test]
    fn parse_negative_values() {
        let counters = CounterValue::parse("indent -2").unwrap();
        assert_eq!(counters.value, -2);
    }

    #[test]
    fn parse_leading_value_fails() {
        let error = CounterValue::parse("5").unwrap_err();
        assert_eq!(
            error,
            CounterError::ValueBeforeName { input: "5".to_string() }
        );
    }

    #[test]
    fn parse_reversed_is_unsupported() {
        let error = CounterValue::parse("reversed(x)").unwrap_err();
        assert!(matches!(error, CounterError::Unsupported { input } if input == "reversed(x)"));
    }

    #[test]
    fn parse_reversed_after_valid_counter_still_fails() {
        let error = CounterValue::parse("chapter 1 reversed(section)").unwrap_err();
        assert!(matches!(error, CounterError::Unsupported { .. }));
    }

    #[test]
    fn parse_empty_fails() {
        assert_eq!(CounterValue::parse("   ").unwrap_err(), CounterError::Empty);
    }

    #[test]
    fn push_appends_to_chain_end() {
        let mut counters = CounterValue::new("chapter", 3);
        counters.push("section", 1);
        counters.push("figure", 0);
        let names: Vec<&str> = counters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["chapter", "section", "figure"]);
    }

    #[test]
    fn find_by_name() {
        let counters = CounterValue::parse("chapter 2 section 5").unwrap();
        assert_eq!(counters.find("section").map(|c| c.value), Some(5));
        assert!(counters.find("figure").is_none());
    }

    #[test]
    fn display_round_trips() {
        let counters = CounterValue::parse("chapter 1 section").unwrap();
        let text = format!("{}", counters);
        assert_eq!(text, "chapter 1 section 0");
        let reparsed = CounterValue::parse(&text).unwrap();
        assert_eq!(reparsed, counters);
    }
}
