//! umlgen Links - Runtime Library
//!
//! Runtime support linked into every class emitted by `umlgen`.
//!
//! Generated classes are thin: they store their association ends as [`Slot`]s
//! (single-valued) and [`Members`] (many-valued) and delegate every mutation to
//! the strategies in this crate. Each multiplicity pairing is implemented once:
//!
//! | Owner  | Inverse | Variant                  |
//! |--------|---------|--------------------------|
//! | single | -       | [`Link::Single`]         |
//! | many   | -       | [`Link::Many`]           |
//! | single | single  | [`Link::OneToOne`]       |
//! | single | many    | [`Link::OneToMany`]      |
//! | many   | single  | [`Link::ManyToOne`]      |
//! | many   | many    | [`Link::ManyToMany`]     |
//!
//! Both ends of a bidirectional association either hold each other or neither
//! does, after every call to [`assign`], [`assign_all`], [`add`] or [`remove`].
//!
//! ## Ownership
//!
//! Objects live behind a [`Handle`] (`Rc<RefCell<dyn ModelObject>>`). Links are
//! `Weak`, so the object graph never owns itself; callers keep their handles
//! alive (usually in a container of all loaded objects).

pub mod error;
pub mod object;
pub mod pending;
pub mod storage;
pub mod strategy;

pub use error::{LinkError, Result};
pub use object::{
    into_handle, same, with_object, with_object_mut, ClassInfo, Handle, ModelObject, ScalarInfo,
    ScalarKind, WeakHandle,
};
pub use pending::PendingLinks;
pub use storage::{Members, Slot};
pub use strategy::{add, assign, assign_all, remove, AssociationEnd, Link, Multiplicity};
