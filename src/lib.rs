//! UML Model Source Generator
//!
//! Reads a UML object model exported as XMI and writes one Rust module per
//! class. Associations between classes become accessor functions that keep
//! both ends of every link consistent through the `umlgen-links` runtime.
//!
//! ## Features
//!
//! - **Package Mirroring**: Model packages become nested directories with marker files
//! - **Two-Pass Resolution**: Bases and inverse ends resolve independently of document order
//! - **Partial Output**: A class that cannot be resolved is skipped and reported
//! - **Association Strategies**: Single, many, one-to-one, one-to-many, many-to-one, many-to-many
//!
//! ## Architecture
//!
//! ```text
//! model.xmi
//!   └── model::load_file       -> ModelDocument
//!         └── codegen::ClassIndex  -> ClassDescriptor*
//!               └── TemplateSet    -> Rust source
//!                     └── output::Materializer -> outdir/<Package>/<Class>.rs
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod output;

pub use codegen::{ClassDescriptor, GenerationReport, Generator};
pub use config::UmlgenConfig;
pub use error::{GenError, Result};
pub use model::{load_file, load_str, ModelDocument};
