//! `IEC61970.SCADA.RemoteSource`, generated by umlgen - DO NOT EDIT

#![allow(non_snake_case)]
#![allow(unused_imports)]

use std::any::Any;

use umlgen_links::{into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot};

/// Constructor arguments of [`RemoteSource`]
#[derive(Debug)]
pub struct RemoteSourceInit {
    pub measurement_value: Option<Handle>,
}

impl Default for RemoteSourceInit {
    fn default() -> Self {
        Self {
            measurement_value: None,
        }
    }
}

/// Metadata of this class
pub static CLASS: ClassInfo = ClassInfo {
    name: "RemoteSource",
    package: &["IEC61970", "SCADA"],
    base: None,
    attributes: &[],
    references: &[RemoteSource::MEASUREMENT_VALUE_END],
};

#[derive(Debug)]
pub struct RemoteSource {
    measurement_value: Slot,
}

impl RemoteSource {
    pub const MEASUREMENT_VALUE_END: AssociationEnd =
        AssociationEnd::new("MeasurementValue", Link::OneToOne { inverse: "RemoteSource" });

    pub fn new(init: RemoteSourceInit) -> Result<Handle, LinkError> {
        let mut links = PendingLinks::default();
        let this = into_handle(Self::construct(init, &mut links));
        links.apply(&this)?;
        Ok(this)
    }

    pub fn construct(init: RemoteSourceInit, links: &mut PendingLinks) -> Self {
        links.single(Self::MEASUREMENT_VALUE_END, init.measurement_value);
        Self {
            measurement_value: Slot::default(),
        }
    }

    pub fn measurement_value(&self) -> Option<Handle> {
        self.measurement_value.get()
    }

    /// Set `MeasurementValue`. The `MeasurementValue` is held weakly: keep a handle to it.
    pub fn set_measurement_value(this: &Handle, value: Option<&Handle>) -> Result<(), LinkError> {
        umlgen_links::assign(this, Self::MEASUREMENT_VALUE_END, value)
    }
}

impl ModelObject for RemoteSource {
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
            "MeasurementValue" => Some(&self.measurement_value),
            _ => None,
        }
    }

    fn slot_mut(&mut self, end: &str) -> Option<&mut Slot> {
        match end {
            "MeasurementValue" => Some(&mut self.measurement_value),
            _ => None,
        }
    }

    fn members(&self, _end: &str) -> Option<&Members> {
        None
    }

    fn members_mut(&mut self, _end: &str) -> Option<&mut Members> {
        None
    }
}
