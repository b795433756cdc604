//! `IEC61968.Assets.Asset`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

/// Constructor arguments of [`Asset`]
#[derive(Debug)]
pub struct AssetInit {
    pub documents: Vec<Handle>,
}

impl Default for AssetInit {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "Asset",
    package: &["IEC61968", "Assets"],
    base: None,
    attributes: &[],
    references: &[Asset::DOCUMENTS_END],
};

#[derive(Debug)]
pub struct Asset {
    documents: Members,
}

impl Asset {
    pub const DOCUMENTS_END: AssociationEnd =
        AssociationEnd::new("Documents", Link::ManyToMany { inverse: "Assets" });

    pub fn new(init: AssetInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: AssetInit, links: &mut PendingLinks) -> Self {
        links.many(Self::DOCUMENTS_END, init.documents);
        Self {
            documents: Members::default(),
        }
    }

    pub fn documents(&self) -> Vec<Handle> {
        self.documents.handles()
    }

    /// Replace every `Documents` member. Members are held weakly: keep a handle to each `Document`.
    pub fn set_documents(this: &Handle, values: Vec<Handle>) -> Result<(), LinkError> {
        umlgen_links::assign_all(this, Self::DOCUMENTS_END, values)
    }

    /// Add one `Documents` member, held weakly
    pub fn add_documents(this: &Handle, value: &Handle) -> Result<(), LinkError> {
        umlgen_links::add(this, Self::DOCUMENTS_END, value)
    }

    /// Remove one `Documents` member; absent members are ignored
    pub fn remove_documents(this: &Handle, value: &Handle) -> Result<(), LinkError> {
        umlgen_links::remove(this, Self::DOCUMENTS_END, value)
    }
}

impl ModelObject for Asset {
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

    fn members(&self, end: &str) -> Option<&Members> {
        match end {
            "Documents" => Some(&self.documents),
            _ => None,
        }
    }

    fn members_mut(&mut self, end: &str) -> Option<&mut Members> {
        match end {
            "Documents" => Some(&mut self.documents),
            _ => None,
        }
    }
}
