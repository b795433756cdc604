//! Association end storage
//!
//! Both containers hold weak references. Targets that have been dropped are
//! invisible to readers and pruned on the next mutation.

use std::rc::{Rc, Weak};

use crate::object::{same, same_weak, Handle, WeakHandle};

/// Storage for a single-valued end
#[derive(Debug, Clone, Default)]
pub struct Slot {
    target: Option<WeakHandle>,
}

impl Slot {
    /// Current partner, if linked and still alive
    pub fn get(&self) -> Option<Handle> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_set(&self) -> bool {
        self.get().is_some()
    }

    /// Whether this slot currently links to `handle`
    pub fn points_to(&self, handle: &Handle) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| same_weak(target, handle))
    }

    pub(crate) fn set(&mut self, value: Option<&Handle>) {
        self.target = value.map(Rc::downgrade);
    }

    pub(crate) fn clear(&mut self) {
        self.target = None;
    }
}

/// Storage for a many-valued end.
///
/// Ordered, with set-like membership: inserting an existing member is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Members {
    items: Vec<WeakHandle>,
}

impl Members {
    /// Live members in insertion order
    pub fn handles(&self) -> Vec<Handle> {
        self.items.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn len(&self) -> usize {
        self.items.iter().filter(|w| w.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, handle: &Handle) -> bool {
        self.items.iter().any(|w| same_weak(w, handle))
    }

    /// Append unless already a member. Returns whether it was added.
    pub(crate) fn insert(&mut self, handle: &Handle) -> bool {
        self.prune();
        if self.contains(handle) {
            return false;
        }
        self.items.push(Rc::downgrade(handle));
        true
    }

    /// Remove a member. Returns whether it was present.
    pub(crate) fn remove(&mut self, handle: &Handle) -> bool {
        let present = self.contains(handle);
        self.items
            .retain(|w| w.strong_count() > 0 && !same_weak(w, handle));
        present
    }

    /// Replace the whole collection, keeping the given order
    pub(crate) fn replace(&mut self, handles: &[Handle]) {
        self.items = handles.iter().map(Rc::downgrade).collect();
    }

    fn prune(&mut self) {
        self.items.retain(|w| w.strong_count() > 0);
    }
}

/// Drop repeated handles, keeping the first occurrence
pub(crate) fn distinct(handles: Vec<Handle>) -> Vec<Handle> {
    let mut result: Vec<Handle> = Vec::with_capacity(handles.len());
    for handle in handles {
        if !result.iter().any(|h| same(h, &handle)) {
            result.push(handle);
        }
    }
    result
}

pub(crate) fn contains(handles: &[Handle], handle: &Handle) -> bool {
    handles.iter().any(|h| same(h, handle))
}
