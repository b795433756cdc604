//! Association Strategies
//!
//! One implementation per multiplicity pairing, selected by [`Link`].
//! Generated accessors pass an [`AssociationEnd`] constant and never touch
//! partner storage themselves.
//!
//! Every helper below borrows one object at a time and releases it before
//! the next step, so an object may be linked to itself.

use std::fmt;

use tracing::trace;

use crate::error::{LinkError, Result};
use crate::object::{same, Handle};
use crate::storage::{contains, distinct, Members, Slot};

// =============================================================================
// End Descriptions
// =============================================================================

/// Declared cardinality of an association end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    Single,
    Many,
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Many => write!(f, "many"),
        }
    }
}

/// Shape of an association end, seen from its owner.
///
/// The bidirectional variants carry the model name of the inverse end on the
/// partner class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    Single,
    Many,
    OneToOne { inverse: &'static str },
    OneToMany { inverse: &'static str },
    ManyToOne { inverse: &'static str },
    ManyToMany { inverse: &'static str },
}

impl Link {
    pub const fn multiplicity(&self) -> Multiplicity {
        match self {
            Self::Single | Self::OneToOne { .. } | Self::OneToMany { .. } => Multiplicity::Single,
            Self::Many | Self::ManyToOne { .. } | Self::ManyToMany { .. } => Multiplicity::Many,
        }
    }

    pub const fn is_many(&self) -> bool {
        matches!(self.multiplicity(), Multiplicity::Many)
    }

    pub const fn inverse(&self) -> Option<&'static str> {
        match self {
            Self::Single | Self::Many => None,
            Self::OneToOne { inverse }
            | Self::OneToMany { inverse }
            | Self::ManyToOne { inverse }
            | Self::ManyToMany { inverse } => Some(inverse),
        }
    }
}

/// One navigable association end of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssociationEnd {
    /// Model name of the end
    pub name: &'static str,
    pub link: Link,
}

impl AssociationEnd {
    pub const fn new(name: &'static str, link: Link) -> Self {
        Self { name, link }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Set a single-valued end. `None` unlinks.
pub fn assign(this: &Handle, end: AssociationEnd, value: Option<&Handle>) -> Result<()> {
    match end.link {
        Link::Single => with_slot(this, end.name, |slot| slot.set(value)),
        Link::OneToOne { inverse } => assign_one_to_one(this, end.name, inverse, value),
        Link::OneToMany { inverse } => assign_one_to_many(this, end.name, inverse, value),
        Link::Many | Link::ManyToOne { .. } | Link::ManyToMany { .. } => {
            Err(LinkError::Multiplicity {
                end: end.name,
                expected: Multiplicity::Single,
            })
        }
    }
}

/// Replace the whole collection of a many-valued end.
///
/// Order is preserved; repeated handles keep their first position. Members
/// dropped from the collection are unlinked before new members are linked.
pub fn assign_all(this: &Handle, end: AssociationEnd, values: Vec<Handle>) -> Result<()> {
    let values = distinct(values);
    match end.link {
        Link::Many => with_members(this, end.name, |members| members.replace(&values)),
        Link::ManyToOne { inverse } => {
            let current = with_members(this, end.name, |members| members.handles())?;
            for member in current.iter().filter(|m| !contains(&values, m)) {
                release_owner(this, inverse, member)?;
            }
            for member in &values {
                attach_owner(this, end.name, inverse, member)?;
            }
            with_members(this, end.name, |members| members.replace(&values))
        }
        Link::ManyToMany { inverse } => {
            let current = with_members(this, end.name, |members| members.handles())?;
            for member in current.iter().filter(|m| !contains(&values, m)) {
                with_members(member, inverse, |members| {
                    members.remove(this);
                })?;
            }
            for member in &values {
                with_members(member, inverse, |members| {
                    members.insert(this);
                })?;
            }
            with_members(this, end.name, |members| members.replace(&values))
        }
        Link::Single | Link::OneToOne { .. } | Link::OneToMany { .. } => {
            Err(LinkError::Multiplicity {
                end: end.name,
                expected: Multiplicity::Many,
            })
        }
    }
}

/// Add one member to a many-valued end
pub fn add(this: &Handle, end: AssociationEnd, value: &Handle) -> Result<()> {
    match end.link {
        Link::Many => with_members(this, end.name, |members| {
            members.insert(value);
        }),
        Link::ManyToOne { inverse } => {
            attach_owner(this, end.name, inverse, value)?;
            with_members(this, end.name, |members| {
                members.insert(value);
            })
        }
        Link::ManyToMany { inverse } => {
            with_members(this, end.name, |members| {
                members.insert(value);
            })?;
            with_members(value, inverse, |members| {
                members.insert(this);
            })
        }
        Link::Single | Link::OneToOne { .. } | Link::OneToMany { .. } => {
            Err(LinkError::Multiplicity {
                end: end.name,
                expected: Multiplicity::Many,
            })
        }
    }
}

/// Remove one member from a many-valued end. Absent members are ignored.
pub fn remove(this: &Handle, end: AssociationEnd, value: &Handle) -> Result<()> {
    match end.link {
        Link::Many => with_members(this, end.name, |members| {
            members.remove(value);
        }),
        Link::ManyToOne { inverse } => {
            with_members(this, end.name, |members| {
                members.remove(value);
            })?;
            release_owner(this, inverse, value)
        }
        Link::ManyToMany { inverse } => {
            with_members(this, end.name, |members| {
                members.remove(value);
            })?;
            with_members(value, inverse, |members| {
                members.remove(this);
            })
        }
        Link::Single | Link::OneToOne { .. } | Link::OneToMany { .. } => {
            Err(LinkError::Multiplicity {
                end: end.name,
                expected: Multiplicity::Many,
            })
        }
    }
}

// =============================================================================
// Pairings
// =============================================================================

fn assign_one_to_one(
    this: &Handle,
    name: &'static str,
    inverse: &'static str,
    value: Option<&Handle>,
) -> Result<()> {
    let current = with_slot(this, name, |slot| slot.get())?;

    if let (Some(current), Some(value)) = (&current, value) {
        if same(current, value) && with_slot(value, inverse, |slot| slot.points_to(this))? {
            return Ok(());
        }
    }

    if let Some(current) = &current {
        trace!(end = name, "severing previous partner");
        with_slot(current, inverse, Slot::clear)?;
    }

    if let Some(value) = value {
        let previous = with_slot(value, inverse, |slot| slot.get())?;
        if let Some(previous) = previous.filter(|p| !same(p, this)) {
            trace!(end = inverse, "severing new partner's previous link");
            with_slot(&previous, name, Slot::clear)?;
        }
        with_slot(value, inverse, |slot| slot.set(Some(this)))?;
    }

    with_slot(this, name, |slot| slot.set(value))
}

fn assign_one_to_many(
    this: &Handle,
    name: &'static str,
    inverse: &'static str,
    value: Option<&Handle>,
) -> Result<()> {
    let current = with_slot(this, name, |slot| slot.get())?;

    if let Some(current) = current.filter(|c| value.map_or(true, |v| !same(c, v))) {
        trace!(end = name, "leaving previous owner");
        with_members(&current, inverse, |members| {
            members.remove(this);
        })?;
    }

    if let Some(value) = value {
        with_members(value, inverse, |members| {
            members.insert(this);
        })?;
    }

    with_slot(this, name, |slot| slot.set(value))
}

/// Point `member`'s single-valued inverse at `this`, moving it out of its
/// previous owner's collection first.
fn attach_owner(
    this: &Handle,
    name: &'static str,
    inverse: &'static str,
    member: &Handle,
) -> Result<()> {
    let previous = with_slot(member, inverse, |slot| slot.get())?;
    if let Some(previous) = previous.filter(|p| !same(p, this)) {
        trace!(end = name, "moving member away from previous owner");
        with_members(&previous, name, |members| {
            members.remove(member);
        })?;
    }
    with_slot(member, inverse, |slot| slot.set(Some(this)))
}

/// Clear `member`'s inverse, but only while it still points at `this`
fn release_owner(this: &Handle, inverse: &'static str, member: &Handle) -> Result<()> {
    with_slot(member, inverse, |slot| {
        if slot.points_to(this) {
            slot.clear();
        }
    })
}

// =============================================================================
// Storage Access
// =============================================================================

fn with_slot<R>(handle: &Handle, end: &'static str, f: impl FnOnce(&mut Slot) -> R) -> Result<R> {
    let mut object = handle
        .try_borrow_mut()
        .map_err(|_| LinkError::Busy { end })?;
    let class = object.class_info().name;
    let slot = object
        .slot_mut(end)
        .ok_or(LinkError::UnknownEnd { class, end })?;
    Ok(f(slot))
}

fn with_members<R>(
    handle: &Handle,
    end: &'static str,
    f: impl FnOnce(&mut Members) -> R,
) -> Result<R> {
    let mut object = handle
        .try_borrow_mut()
        .map_err(|_| LinkError::Busy { end })?;
    let class = object.class_info().name;
    let members = object
        .members_mut(end)
        .ok_or(LinkError::UnknownEnd { class, end })?;
    Ok(f(members))
}
