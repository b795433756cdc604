//! Configuration management for the generator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (umlgen.toml)
//! - Environment variables (UMLGEN__*)
//!
//! ## Example config file (umlgen.toml):
//! ```toml
//! [document]
//! expected_version = "2.1"
//!
//! [output]
//! package_marker = "mod.rs"
//! extension = "rs"
//! links_crate = "umlgen_links"
//! crate_root = "crate"
//!
//! [types.primitives]
//! string = "text"
//! double = "real"
//! absolutedatetime = "text"
//!
//! [generate]
//! only = ["Measurement", "MeasurementValue"]
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::model::PrimitiveKind;

/// Main configuration for the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UmlgenConfig {
    /// Input document settings
    #[serde(default)]
    pub document: DocumentConfig,

    /// Emitted file layout
    #[serde(default)]
    pub output: OutputConfig,

    /// Type mapping
    #[serde(default)]
    pub types: TypesConfig,

    /// Class selection
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Input document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// The only accepted `xmi:version`
    #[serde(default = "default_expected_version")]
    pub expected_version: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Marker file created in every package directory
    #[serde(default = "default_package_marker")]
    pub package_marker: String,

    /// Extension of generated class files
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path of the runtime link crate in emitted imports
    #[serde(default = "default_links_crate")]
    pub links_crate: String,

    /// Path prefix used to import base classes
    #[serde(default = "default_crate_root")]
    pub crate_root: String,
}

/// Type mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesConfig {
    /// Lowercase primitive type name to scalar kind
    #[serde(default = "default_primitives")]
    pub primitives: BTreeMap<String, PrimitiveKind>,
}

/// Class selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Restrict generation to these class names or identifiers. Empty means all.
    #[serde(default)]
    pub only: Vec<String>,
}

// Default value functions
fn default_expected_version() -> String {
    "2.1".to_string()
}

fn default_package_marker() -> String {
    "mod.rs".to_string()
}

fn default_extension() -> String {
    "rs".to_string()
}

fn default_links_crate() -> String {
    "umlgen_links".to_string()
}

fn default_crate_root() -> String {
    "crate".to_string()
}

fn default_primitives() -> BTreeMap<String, PrimitiveKind> {
    let table: &[(&str, PrimitiveKind)] = &[
        ("string", PrimitiveKind::Text),
        ("char", PrimitiveKind::Text),
        ("datetime", PrimitiveKind::Text),
        ("date", PrimitiveKind::Text),
        ("time", PrimitiveKind::Text),
        ("integer", PrimitiveKind::Integer),
        ("int", PrimitiveKind::Integer),
        ("long", PrimitiveKind::Integer),
        ("short", PrimitiveKind::Integer),
        ("float", PrimitiveKind::Real),
        ("double", PrimitiveKind::Real),
        ("decimal", PrimitiveKind::Real),
        ("real", PrimitiveKind::Real),
        ("boolean", PrimitiveKind::Boolean),
        ("bool", PrimitiveKind::Boolean),
    ];
    table
        .iter()
        .map(|(name, kind)| (name.to_string(), *kind))
        .collect()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            expected_version: default_expected_version(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            package_marker: default_package_marker(),
            extension: default_extension(),
            links_crate: default_links_crate(),
            crate_root: default_crate_root(),
        }
    }
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            primitives: default_primitives(),
        }
    }
}

impl UmlgenConfig {
    /// Load configuration, adding a required file on top of the default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["umlgen.toml", ".umlgen.toml", "config/umlgen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "umlgen", "umlgen") {
            let xdg_config = config_dir.config_dir().join("umlgen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // UMLGEN__SECTION__KEY
        builder = builder.add_source(
            Environment::with_prefix("UMLGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Scalar kind for a primitive type name, case-insensitive
    pub fn primitive(&self, type_name: &str) -> Option<PrimitiveKind> {
        self.types
            .primitives
            .get(&type_name.to_ascii_lowercase())
            .copied()
    }

    /// Whether a class passes the `only` filter
    pub fn selects(&self, name: &str, identifier: Option<&str>) -> bool {
        self.generate.only.is_empty()
            || self
                .generate
                .only
                .iter()
                .any(|o| o == name || Some(o.as_str()) == identifier)
    }
}
