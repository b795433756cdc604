//! `IEC61970.Meas.MeasurementValue`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;
use std::ops::{Deref, DerefMut};

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

use crate::model::IEC61970::Core::IdentifiedObject::{IdentifiedObject, IdentifiedObjectInit};

/// Constructor arguments of [`MeasurementValue`]
#[derive(Debug)]
pub struct MeasurementValueInit {
    /// Accuracy of the sensor, in percent.
    pub sensor_accuracy: f64,
    pub owner: Option<Handle>,
    pub remote_source: Option<Handle>,
    pub base: IdentifiedObjectInit,
}

impl Default for MeasurementValueInit {
    fn default() -> Self {
        Self {
            sensor_accuracy: 0.0,
            owner: None,
            remote_source: None,
            base: IdentifiedObjectInit::default(),
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "MeasurementValue",
    package: &["IEC61970", "Meas"],
    base: Some("IdentifiedObject"),
    attributes: &[
        ScalarInfo {
            name: "sensorAccuracy",
            kind: ScalarKind::Real,
            default: "0.0",
            enumeration: None,
        },
    ],
    references: &[MeasurementValue::OWNER_END, MeasurementValue::REMOTE_SOURCE_END],
};

#[derive(Debug)]
pub struct MeasurementValue {
    /// Accuracy of the sensor, in percent.
    pub sensor_accuracy: f64,
    owner: Slot,
    remote_source: Slot,
    base: IdentifiedObject,
}

impl MeasurementValue {
    pub const OWNER_END: AssociationEnd =
        AssociationEnd::new("Owner", Link::OneToMany { inverse: "Values" });
    pub const REMOTE_SOURCE_END: AssociationEnd =
        AssociationEnd::new("RemoteSource", Link::OneToOne { inverse: "MeasurementValue" });

    pub fn new(init: MeasurementValueInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: MeasurementValueInit, links: &mut PendingLinks) -> Self {
        links.single(Self::OWNER_END, init.owner);
        links.single(Self::REMOTE_SOURCE_END, init.remote_source);
        Self {
            sensor_accuracy: init.sensor_accuracy,
            owner: Slot::default(),
            remote_source: Slot::default(),
            base: IdentifiedObject::construct(init.base, links),
        }
    }

    pub fn owner(&self) -> Option<Handle> {
        self.owner.get()
    }

    /// Set `Owner`. The `Measurement` is held weakly: keep a handle to it.
    pub fn set_owner(this: &Handle, value: Option<&Handle>) -> Result<(), LinkError> {
        umlgen_links::assign(this, Self::OWNER_END, value)
    }

    pub fn remote_source(&self) -> Option<Handle> {
        self.remote_source.get()
    }

    /// Set `RemoteSource`. The `RemoteSource` is held weakly: keep a handle to it.
    pub fn set_remote_source(this: &Handle, value: Option<&Handle>) -> Result<(), LinkError> {
        umlgen_links::assign(this, Self::REMOTE_SOURCE_END, value)
    }
}

impl Deref for MeasurementValue {
    type Target = IdentifiedObject;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for MeasurementValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl ModelObject for MeasurementValue {
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
        match end {
            "Owner" => Some(&self.owner),
            "RemoteSource" => Some(&self.remote_source),
            _ => self.base.slot(end),
        }
    }

    fn slot_mut(&mut self, end: &str) -> Option<&mut Slot> {
        match end {
            "Owner" => Some(&mut self.owner),
            "RemoteSource" => Some(&mut self.remote_source),
            _ => self.base.slot_mut(end),
        }
    }

    fn members(&self, end: &str) -> Option<&Members> {
        self.base.members(end)
    }

    fn members_mut(&mut self, end: &str) -> Option<&mut Members> {
        self.base.members_mut(end)
    }
}
