//! `IEC61970.Wires.Breaker`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;
use std::ops::{Deref, DerefMut};

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

use crate::model::IEC61970::Core::PowerSystemResource::{PowerSystemResource, PowerSystemResourceInit};

/// Constructor arguments of [`Breaker`]
#[derive(Debug)]
pub struct BreakerInit {
    pub base: PowerSystemResourceInit,
}

impl Default for BreakerInit {
    fn default() -> Self {
        Self {
            base: PowerSystemResourceInit::default(),
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "Breaker",
    package: &["IEC61970", "Wires"],
    base: Some("PowerSystemResource"),
    attributes: &[],
    references: &[],
};

#[derive(Debug)]
pub struct Breaker {
    base: PowerSystemResource,
}

impl Breaker {
    pub fn new(init: BreakerInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: BreakerInit, links: &mut PendingLinks) -> Self {
        Self {
            base: PowerSystemResource::construct(init.base, links),
        }
    }
}

impl Deref for Breaker {
    type Target = PowerSystemResource;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for Breaker {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl ModelObject for Breaker {
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
        self.base.members(end)
    }

    fn members_mut(&mut self, end: &str) -> Option<&mut Members> {
        self.base.members_mut(end)
    }
}
