use alloc::vec::Vec;

use crate::FieldHandle;

/// A focused-field scroll waiting for the keyboard animation to settle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeferredScroll {
    pub due_ms: u64,
    pub field: FieldHandle,
    pub clearance: f64,
}

/// Pending deferred scrolls, kept in scheduling order.
///
/// Every entry fires exactly once; there is no cancellation. When several are due in the same
/// tick they fire in the order they were scheduled, so the last one wins on the host.
#[derive(Clone, Debug, Default)]
pub(crate) struct DeferredQueue {
    pending: Vec<DeferredScroll>,
}

impl DeferredQueue {
    pub(crate) fn push(&mut self, scroll: DeferredScroll) {
        self.pending.push(scroll);
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &DeferredScroll> {
        self.pending.iter()
    }

    /// Removes and returns every entry due at `now_ms`, preserving scheduling order.
    pub(crate) fn take_due(&mut self, now_ms: u64) -> Vec<DeferredScroll> {
        if !self.pending.iter().any(|s| s.due_ms <= now_ms) {
            return Vec::new();
        }
        let (due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|s| s.due_ms <= now_ms);
        self.pending = rest;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(due_ms: u64, field: u64) -> DeferredScroll {
        DeferredScroll {
            due_ms,
            field: FieldHandle(field),
            clearance: 75.0,
        }
    }

    #[test]
    fn takes_only_due_entries_in_order() {
        let mut q = DeferredQueue::default();
        q.push(at(300, 1));
        q.push(at(250, 2));
        q.push(at(500, 3));

        assert!(q.take_due(100).is_empty());
        let due = q.take_due(300);
        assert_eq!(
            due.iter().map(|s| s.field.0).collect::<Vec<_>>(),
            alloc::vec![1, 2]
        );
        assert_eq!(q.len(), 1);
        assert_eq!(q.take_due(1_000).len(), 1);
        assert_eq!(q.len(), 0);
    }
}
