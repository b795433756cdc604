//! Code Generation
//!
//! Turns a loaded [`ModelDocument`] into one Rust module per class.
//!
//! Architecture:
//! - ClassIndex: pass 1 drafts every class; pass 2 resolves bases and inverse
//!   ends against the finished index, so class order in the document never matters
//! - ClassDescriptor: everything a template needs for one class, nothing more
//! - TemplateSet: immutable, built once from configuration and shared by all renders
//! - Materializer: package directories, markers and class files
//!
//! Per-class failures skip the class and are collected in the report. Only
//! fatal errors (document version, I/O) abort a run.

pub mod index;
pub mod names;
pub mod rust;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::UmlgenConfig;
use crate::error::Result;
use crate::model::{load_file, ModelDocument, Multiplicity, ScalarType};
use crate::output::Materializer;

pub use index::{ClassIndex, Resolution};
pub use rust::TemplateSet;

// =============================================================================
// Descriptors
// =============================================================================

/// Base of a generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseClass {
    /// Universal root type: the class embeds no base
    Root,
    Class { name: String, package: Vec<String> },
}

/// Opposite end of a bidirectional association
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InverseEnd {
    pub name: String,
    pub multiplicity: Multiplicity,
}

/// One normalized class attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AttributeDescriptor {
    Scalar {
        name: String,
        #[serde(rename = "type")]
        ty: ScalarType,
        /// Model default literal, if declared
        default: Option<String>,
        documentation: Option<String>,
    },
    Reference {
        name: String,
        target: String,
        multiplicity: Multiplicity,
        inverse: Option<InverseEnd>,
        documentation: Option<String>,
    },
}

impl AttributeDescriptor {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name, .. } | Self::Reference { name, .. } => name,
        }
    }

    pub fn documentation(&self) -> Option<&str> {
        match self {
            Self::Scalar { documentation, .. } | Self::Reference { documentation, .. } => {
                documentation.as_deref()
            }
        }
    }

    /// Link strategy for a reference, `None` for scalars
    pub fn pairing(&self) -> Option<Pairing> {
        match self {
            Self::Scalar { .. } => None,
            Self::Reference {
                multiplicity,
                inverse,
                ..
            } => Some(Pairing::of(*multiplicity, inverse.as_ref().map(|i| i.multiplicity))),
        }
    }
}

/// Owner/inverse multiplicity pair of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pairing {
    Single,
    Many,
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Pairing {
    pub fn of(owner: Multiplicity, inverse: Option<Multiplicity>) -> Self {
        use Multiplicity::{Many, Single};
        match (owner, inverse) {
            (Single, None) => Self::Single,
            (Many, None) => Self::Many,
            (Single, Some(Single)) => Self::OneToOne,
            (Single, Some(Many)) => Self::OneToMany,
            (Many, Some(Single)) => Self::ManyToOne,
            (Many, Some(Many)) => Self::ManyToMany,
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many | Self::ManyToOne | Self::ManyToMany)
    }

    /// Variant name of the runtime `Link` type
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Many => "Many",
            Self::OneToOne => "OneToOne",
            Self::OneToMany => "OneToMany",
            Self::ManyToOne => "ManyToOne",
            Self::ManyToMany => "ManyToMany",
        }
    }
}

/// Everything needed to render one class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDescriptor {
    pub identifier: Option<String>,
    pub name: String,
    /// Enclosing packages, outermost first
    pub package: Vec<String>,
    pub base: BaseClass,
    pub documentation: Option<String>,
    pub attributes: Vec<AttributeDescriptor>,
}

impl ClassDescriptor {
    /// Packages and class name joined with `.`
    pub fn qualified_name(&self) -> String {
        let mut parts = self.package.clone();
        parts.push(self.name.clone());
        parts.join(".")
    }

    pub fn has_base(&self) -> bool {
        matches!(self.base, BaseClass::Class { .. })
    }

    pub fn references(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes
            .iter()
            .filter(|a| matches!(a, AttributeDescriptor::Reference { .. }))
    }

    pub fn scalars(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes
            .iter()
            .filter(|a| matches!(a, AttributeDescriptor::Scalar { .. }))
    }
}

// =============================================================================
// Report
// =============================================================================

/// A class left out of the output, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedClass {
    pub name: String,
    pub identifier: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedClass {
    pub name: String,
    pub path: PathBuf,
}

/// Summary of one generation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub dry_run: bool,
    pub generated: Vec<GeneratedClass>,
    pub skipped: Vec<SkippedClass>,
    /// Package markers created by this run
    pub packages_created: Vec<PathBuf>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "would generate" } else { "generated" };
        writeln!(
            f,
            "{verb} {} classes, skipped {}, created {} packages",
            self.generated.len(),
            self.skipped.len(),
            self.packages_created.len()
        )?;
        for class in &self.generated {
            writeln!(f, "  + {} -> {}", class.name, class.path.display())?;
        }
        for class in &self.skipped {
            writeln!(f, "  - {}: {}", class.name, class.reason)?;
        }
        Ok(())
    }
}

/// Resolved classes of a document, before anything is written
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub classes: Vec<ClassDescriptor>,
    pub skipped: Vec<SkippedClass>,
    /// Package paths of every selected class that has one
    pub packages: BTreeSet<Vec<String>>,
}

// =============================================================================
// Generator
// =============================================================================

/// Document-to-source pipeline
pub struct Generator {
    config: UmlgenConfig,
    templates: TemplateSet,
}

impl Generator {
    pub fn new(config: UmlgenConfig) -> Self {
        let templates = TemplateSet::new(&config.output);
        Self { config, templates }
    }

    /// Resolve every selected class of a document
    pub fn plan(&self, doc: &ModelDocument) -> Plan {
        let index = ClassIndex::build(doc, &self.config);
        let packages = index
            .packages()
            .filter(|(name, identifier, _)| self.config.selects(name, *identifier))
            .map(|(_, _, package)| package.to_vec())
            .collect();

        let Resolution { classes, skipped } = index.resolve();
        let classes = classes
            .into_iter()
            .filter(|c| self.config.selects(&c.name, c.identifier.as_deref()))
            .collect();
        let skipped = skipped
            .into_iter()
            .filter(|(name, identifier, _)| self.config.selects(name, identifier.as_deref()))
            .map(|(name, identifier, error)| {
                warn!(class = %name, "skipping class: {error}");
                SkippedClass {
                    name,
                    identifier,
                    reason: error.to_string(),
                }
            })
            .collect();

        Plan {
            classes,
            skipped,
            packages,
        }
    }

    /// Render one class to Rust source
    pub fn render(&self, class: &ClassDescriptor) -> String {
        self.templates.render(class)
    }

    /// Generate every selected class of a loaded document under `outdir`
    pub fn generate(
        &self,
        doc: &ModelDocument,
        outdir: &Path,
        dry_run: bool,
    ) -> Result<GenerationReport> {
        let plan = self.plan(doc);
        let materializer = Materializer::new(outdir, &self.config.output, dry_run);
        let mut report = GenerationReport {
            dry_run,
            skipped: plan.skipped,
            ..GenerationReport::default()
        };

        for package in &plan.packages {
            // A dry run reports shared parent markers once per package
            for marker in materializer.ensure_package(package)? {
                if !report.packages_created.contains(&marker) {
                    report.packages_created.push(marker);
                }
            }
        }

        for class in &plan.classes {
            let source = self.render(class);
            let path = materializer.write_class(&class.package, &class.name, &source)?;
            info!(class = %class.qualified_name(), path = %path.display(), "generated class");
            report.generated.push(GeneratedClass {
                name: class.qualified_name(),
                path,
            });
        }

        Ok(report)
    }

    /// Load `umlfile` and generate it under `outdir`.
    ///
    /// A version mismatch fails before anything is written.
    pub fn generate_file(
        &self,
        umlfile: &Path,
        outdir: &Path,
        dry_run: bool,
    ) -> Result<GenerationReport> {
        let doc = load_file(umlfile, &self.config.document.expected_version)?;
        info!(outdir = %outdir.display(), "generating classes");
        self.generate(&doc, outdir, dry_run)
    }
}
