//! `IEC61970.Core.PowerSystemResource`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;
use std::ops::{Deref, DerefMut};

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

use crate::model::IEC61970::Core::IdentifiedObject::{IdentifiedObject, IdentifiedObjectInit};

/// Constructor arguments of [`PowerSystemResource`]
#[derive(Debug)]
pub struct PowerSystemResourceInit {
    pub measurements: Vec<Handle>,
    pub base: IdentifiedObjectInit,
}

impl Default for PowerSystemResourceInit {
    fn default() -> Self {
        Self {
            measurements: Vec::new(),
            base: IdentifiedObjectInit::default(),
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "PowerSystemResource",
    package: &["IEC61970", "Core"],
    base: Some("IdentifiedObject"),
    attributes: &[],
    references: &[PowerSystemResource::MEASUREMENTS_END],
};

#[derive(Debug)]
pub struct PowerSystemResource {
    measurements: Members,
    base: IdentifiedObject,
}

impl PowerSystemResource {
    pub const MEASUREMENTS_END: AssociationEnd =
        AssociationEnd::new("Measurements", Link::ManyToOne { inverse: "PowerSystemResource" });

    pub fn new(init: PowerSystemResourceInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: PowerSystemResourceInit, links: &mut PendingLinks) -> Self {
        links.many(Self::MEASUREMENTS_END, init.measurements);
        Self {
            measurements: Members::default(),
            base: IdentifiedObject::construct(init.base, links),
        }
    }

    pub fn measurements(&self) -> Vec<Handle> {
        self.measurements.handles()
    }

    /// Replace every `Measurements` member. Members are held weakly: keep a handle to each `Measurement`.
    pub fn set_measurements(this: &Handle, values: Vec<Handle>) -> Result<(), LinkError> {
        umlgen_links::assign_all(this, Self::MEASUREMENTS_END, values)
    }

    /// Add one `Measurements` member, held weakly
    pub fn add_measurements(this: &Handle, value: &Handle) -> Result<(), LinkError> {
        umlgen_links::add(this, Self::MEASUREMENTS_END, value)
    }

    /// Remove one `Measurements` member; absent members are ignored
    pub fn remove_measurements(this: &Handle, value: &Handle) -> Result<(), LinkError> {
        umlgen_links::remove(this, Self::MEASUREMENTS_END, value)
    }
}

impl Deref for PowerSystemResource {
    type Target = IdentifiedObject;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for PowerSystemResource {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl ModelObject for PowerSystemResource {
    fn class_info(&self) -> &'static ClassInfo {
        &CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn slot(&self, end: &str) -> Option<&Slot> {
        self.base.slot(end)
    }

    fn slot_mut(&mut self, end: &str) -> Option<&mut Slot> {
        self.base.slot_mut(end)
    }

    fn members(&self, end: &str) -> Option<&Members> {
        match end {
            "Measurements" => Some(&self.measurements),
            _ => self.base.members(end),
        }
    }

    fn members_mut(&mut self, end: &str) -> Option<&mut Members> {
        match end {
            "Measurements" => Some(&mut self.measurements),
            _ => self.base.members_mut(end),
        }
    }
}
