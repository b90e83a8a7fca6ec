//! Recycling of style allocations
//!
//! Resolving a node allocates a merged [`Style`] whose maps grow to a few
//! dozen entries; a long document resolves tens of thousands of them. The
//! pool keeps cleared styles around so their allocations are reused instead
//! of going back to the allocator every time.
//!
//! The pool is plain shared state behind a mutex, injected wherever it is
//! needed. Hosts that want one pool per render thread can simply create
//! several.

use crate::style::Style;
use std::sync::Mutex;

/// A pool of reusable style allocations
///
/// # Examples
///
/// ```
/// use docstyle::{keys, StylePool, Unit};
///
/// let pool = StylePool::new();
/// let mut style = pool.get();
/// style.set_value(&keys::MARGIN_ALL, Unit::pt(4.0));
/// pool.release(style);
///
/// // The recycled style comes back empty.
/// let style = pool.get();
/// assert!(style.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StylePool {
    free: Mutex<Vec<Style>>,
}

impl StylePool {
    /// Creates an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a style from the pool, or a fresh one when the pool is empty
    pub fn get(&self) -> Style {
        self
            .free
            .lock()
            .expect("style pool mutex poisoned")
            .pop()
            .unwrap_or_default()
    }

    /// Clears a style and returns it to the pool
    pub fn release(&self, mut style: Style) {
        style.clear();
        self
            .free
            .lock()
            .expect("style pool mutex poisoned")
            .push(style);
    }

    /// Number of styles waiting for reuse
    pub fn available(&self) -> usize {
        self.free.lock().expect("style pool mutex poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::keys;
    use crate::style::StateKind;
    use crate::units::Unit;

    #[test]
    fn released_styles_come_back_cleared() {
        let pool = StylePool::new();
        let mut style = pool.get();
        style.set_value(&keys::FONT_BOLD, true);
        style.define_variable("accent", "red");
        style.set_state_style(StateKind::Over, Style::new());
        pool.release(style);
        assert_eq!(pool.available(), 1);

        let style = pool.get();
        assert!(style.is_empty());
        assert!(style.variables().is_none());
        assert!(!style.has_states());
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn empty_pool_hands_out_fresh_styles() {
        let pool = StylePool::new();
        assert_eq!(pool.available(), 0);
        assert!(pool.get().is_empty());
    }

    #[test]
    fn pool_is_shared_across_threads() {
        use std::sync::Arc;

        let pool = Arc::new(StylePool::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = Arc::clone(&pool);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let mut style = pool.get();
                        style.set_value(&keys::MARGIN_ALL, Unit::pt(1.0));
                        pool.release(style);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(pool.available() >= 1);
    }
}
