//! Deferred links collected by generated constructors.
//!
//! A constructor cannot link its references before the object has a handle,
//! so references passed at construction time (including those of embedded
//! base classes) are queued here and applied once the handle exists.

use crate::error::Result;
use crate::object::Handle;
use crate::strategy::{assign, assign_all, AssociationEnd};

#[derive(Debug)]
enum PendingValue {
    Single(Handle),
    Many(Vec<Handle>),
}

/// Queue of references to link after construction
#[derive(Debug, Default)]
pub struct PendingLinks {
    entries: Vec<(AssociationEnd, PendingValue)>,
}

impl PendingLinks {
    /// Queue a single-valued reference. `None` needs no linking.
    pub fn single(&mut self, end: AssociationEnd, value: Option<Handle>) {
        if let Some(value) = value {
            self.entries.push((end, PendingValue::Single(value)));
        }
    }

    /// Queue a many-valued reference. An empty collection needs no linking.
    pub fn many(&mut self, end: AssociationEnd, values: Vec<Handle>) {
        if !values.is_empty() {
            self.entries.push((end, PendingValue::Many(values)));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Link every queued reference from `this`, in queue order
    pub fn apply(self, this: &Handle) -> Result<()> {
        for (end, value) in self.entries {
            match value {
                PendingValue::Single(value) => assign(this, end, Some(&value))?,
                PendingValue::Many(values) => assign_all(this, end, values)?,
            }
        }
        Ok(())
    }
}
