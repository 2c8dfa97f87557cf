//! Drop-counting elements for leak checks.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared counters for a family of [`Tracked`] values.
///
/// Clones share the same counters, so a ledger can be kept by the test
/// while tracked values move into the container under test.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value counted by this ledger.
    pub fn track(&self, value: i32) -> Tracked {
        self.created.set(self.created.get() + 1);
        self.live.set(self.live.get() + 1);
        Tracked {
            value,
            live: Rc::clone(&self.live),
        }
    }

    /// Tracked values not yet dropped.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Tracked values created through [`track`](Self::track).
    ///
    /// Clones are counted as live but not as created.
    pub fn created(&self) -> usize {
        self.created.get()
    }
}

/// An `i32` that reports its own drop to a [`DropLedger`].
pub struct Tracked {
    value: i32,
    live: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.live.set(self.live.get() + 1);
        Self {
            value: self.value,
            live: Rc::clone(&self.live),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_live_values() {
        let ledger = DropLedger::new();
        let a = ledger.track(1);
        let b = a.clone();
        assert_eq!(ledger.live(), 2);
        assert_eq!(ledger.created(), 1);
        drop(a);
        assert_eq!(ledger.live(), 1);
        assert_eq!(b.value(), 1);
        drop(b);
        assert_eq!(ledger.live(), 0);
    }
}
