//! Object handles and class metadata

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::storage::{Members, Slot};
use crate::strategy::AssociationEnd;

/// Shared handle to any generated object
pub type Handle = Rc<RefCell<dyn ModelObject>>;

/// Non-owning handle, as stored inside association ends
pub type WeakHandle = Weak<RefCell<dyn ModelObject>>;

/// Implemented by every generated class.
///
/// Ends are looked up by their model name. A class answers for its own ends
/// and forwards anything else to its embedded base, so an end declared on a
/// base class is reachable through any subclass instance.
pub trait ModelObject: Any + fmt::Debug {
    /// Static description of the concrete class
    fn class_info(&self) -> &'static ClassInfo;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Single-valued end storage by model name
    fn slot(&self, end: &str) -> Option<&Slot>;

    fn slot_mut(&mut self, end: &str) -> Option<&mut Slot>;

    /// Many-valued end storage by model name
    fn members(&self, end: &str) -> Option<&Members>;

    fn members_mut(&mut self, end: &str) -> Option<&mut Members>;
}

/// Wrap a freshly constructed object into a shared handle
pub fn into_handle<T: ModelObject>(object: T) -> Handle {
    Rc::new(RefCell::new(object))
}

/// Identity comparison (same allocation)
pub fn same(a: &Handle, b: &Handle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

pub(crate) fn same_weak(a: &WeakHandle, b: &Handle) -> bool {
    std::ptr::addr_eq(a.as_ptr(), Rc::as_ptr(b))
}

/// Borrow a handle as its concrete class.
///
/// Returns `None` if the object is of another class or currently mutably borrowed.
pub fn with_object<T: ModelObject, R>(handle: &Handle, f: impl FnOnce(&T) -> R) -> Option<R> {
    let object = handle.try_borrow().ok()?;
    object.as_any().downcast_ref::<T>().map(f)
}

/// Mutably borrow a handle as its concrete class
pub fn with_object_mut<T: ModelObject, R>(
    handle: &Handle,
    f: impl FnOnce(&mut T) -> R,
) -> Option<R> {
    let mut object = handle.try_borrow_mut().ok()?;
    object.as_any_mut().downcast_mut::<T>().map(f)
}

// =============================================================================
// Class Metadata
// =============================================================================

/// Scalar attribute kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Text,
    Integer,
    Real,
    Boolean,
    Enumerated,
}

/// Description of one scalar attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarInfo {
    /// Model name of the attribute
    pub name: &'static str,
    pub kind: ScalarKind,
    /// Default value as a Rust literal
    pub default: &'static str,
    /// Enumeration type name, for enumerated attributes
    pub enumeration: Option<&'static str>,
}

/// Description of a generated class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassInfo {
    pub name: &'static str,
    /// Enclosing packages, outermost first
    pub package: &'static [&'static str],
    /// Base class name, `None` for classes deriving from the root type
    pub base: Option<&'static str>,
    pub attributes: &'static [ScalarInfo],
    pub references: &'static [AssociationEnd],
}

impl ClassInfo {
    /// Qualified name, packages joined with `.`
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = self.package.to_vec();
        parts.push(self.name);
        parts.join(".")
    }

    pub fn attribute(&self, name: &str) -> Option<&ScalarInfo> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn reference(&self, name: &str) -> Option<&AssociationEnd> {
        self.references.iter().find(|r| r.name == name)
    }

    /// Names of the many-valued references
    pub fn many_references(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.references
            .iter()
            .filter(|r| r.link.is_many())
            .map(|r| r.name)
    }

    /// Attribute name to enumeration type name
    pub fn enumerations(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.attributes
            .iter()
            .filter_map(|a| a.enumeration.map(|e| (a.name, e)))
    }
}
