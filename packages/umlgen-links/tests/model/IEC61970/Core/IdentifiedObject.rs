//! `IEC61970.Core.IdentifiedObject`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

/// Constructor arguments of [`IdentifiedObject`]
#[derive(Debug)]
pub struct IdentifiedObjectInit {
    pub name: String,
}

impl Default for IdentifiedObjectInit {
    fn default() -> Self {
        Self {
            name: String::new(),
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "IdentifiedObject",
    package: &["IEC61970", "Core"],
    base: None,
    attributes: &[
        ScalarInfo {
            name: "name",
            kind: ScalarKind::Text,
            default: "String::new()",
            enumeration: None,
        },
    ],
    references: &[],
};

#[derive(Debug)]
pub struct IdentifiedObject {
    pub name: String,
}

impl IdentifiedObject {
    pub fn new(init: IdentifiedObjectInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: IdentifiedObjectInit, _links: &mut PendingLinks) -> Self {
        Self {
            name: init.name,
        }
    }
}

impl ModelObject for IdentifiedObject {
    fn class_info(&self) -> &'static ClassInfo {
        &CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn slot(&self, _end: &str) -> Option<&Slot> {
        None
    }

    fn slot_mut(&mut self, _end: &str) -> Option<&mut Slot> {
        None
    }

    fn members(&self, _end: &str) -> Option<&Members> {
        None
    }

    fn members_mut(&mut self, _end: &str) -> Option<&mut Members> {
        None
    }
}
