//! Classes generated by umlgen from the workspace fixture
//! `tests/fixtures/links_model.xmi`.
//!
//! The generator's golden tests render the fixture and compare against these
//! files; set `UMLGEN_BLESS=1` to rewrite them. Only the `mod.rs` files are
//! hand-written.
//!
//! IdentifiedObject
//! ├── PowerSystemResource ── Measurements (many) <-> PowerSystemResource (single)
//! │   └── Breaker
//! ├── Measurement ── Values (many) <-> Owner (single)
//! └── MeasurementValue ── RemoteSource (single) <-> MeasurementValue (single)
//! RemoteSource
//! Asset ── Documents (many) <-> Assets (many) ── Document
//! Person ── Spouse (single) <-> Spouse (single), Employer (single), Tags (many)

#![allow(non_snake_case)]
#![allow(dead_code)]

pub mod IEC61968;
pub mod IEC61970;
