//! `IEC61968.Common.Document`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

/// Constructor arguments of [`Document`]
#[derive(Debug)]
pub struct DocumentInit {
    pub assets: Vec<Handle>,
}

impl Default for DocumentInit {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "Document",
    package: &["IEC61968", "Common"],
    base: None,
    attributes: &[],
    references: &[Document::ASSETS_END],
};

#[derive(Debug)]
pub struct Document {
    assets: Members,
}

impl Document {
    pub const ASSETS_END: AssociationEnd =
        AssociationEnd::new("Assets", Link::ManyToMany { inverse: "Documents" });

    pub fn new(init: DocumentInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: DocumentInit, links: &mut PendingLinks) -> Self {
        links.many(Self::ASSETS_END, init.assets);
        Self {
            assets: Members::default(),
        }
    }

    pub fn assets(&self) -> Vec<Handle> {
        self.assets.handles()
    }

    /// Replace every `Assets` member. Members are held weakly: keep a handle to each `Asset`.
    pub fn set_assets(this: &Handle, values: Vec<Handle>) -> Result<(), LinkError> {
        umlgen_links::assign_all(this, Self::ASSETS_END, values)
    }

    /// Add one `Assets` member, held weakly
    pub fn add_assets(this: &Handle, value: &Handle) -> Result<(), LinkError> {
        umlgen_links::add(this, Self::ASSETS_END, value)
    }

    /// Remove one `Assets` member; absent members are ignored
    pub fn remove_assets(this: &Handle, value: &Handle) -> Result<(), LinkError> {
        umlgen_links::remove(this, Self::ASSETS_END, value)
    }
}

impl ModelObject for Document {
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
            "Assets" => Some(&self.assets),
            _ => None,
        }
    }

    fn members_mut(&mut self, end: &str) -> Option<&mut Members> {
        match end {
            "Assets" => Some(&mut self.assets),
            _ => None,
        }
    }
}
