pub mod IdentifiedObject;
pub mod PowerSystemResource;
