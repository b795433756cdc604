//! Two-pass class resolution
//!
//! Pass 1 drafts every class of the document independently: package path,
//! base link, documentation and classified properties. Pass 2 checks each
//! draft against the finished index. A base must itself survive, and an
//! inverse end must exist as a reference on the target class or one of its
//! bases. Pass 2 repeats until no new class fails, so a failure propagates
//! to every class that depends on it.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::{AttributeDescriptor, BaseClass, ClassDescriptor, InverseEnd};
use crate::config::UmlgenConfig;
use crate::error::{GenError, Result};
use crate::model::{
    class_properties, documentation, hierarchy, namespace, BaseLink, ModelDocument, NodeId,
    RawAttribute,
};

#[derive(Debug)]
struct Draft {
    package: Vec<String>,
    base: BaseLink,
    documentation: Option<String>,
    attributes: Vec<RawAttribute>,
}

#[derive(Debug)]
struct Entry {
    name: String,
    identifier: Option<String>,
    /// Kept separately so failed classes still get their package directory
    package: Option<Vec<String>>,
    draft: Result<Draft>,
}

/// Outcome of pass 2
#[derive(Debug, Default)]
pub struct Resolution {
    /// Surviving classes, in document order
    pub classes: Vec<ClassDescriptor>,
    /// Name, identifier and cause of every skipped class
    pub skipped: Vec<(String, Option<String>, GenError)>,
}

/// Node id to class draft, for every named class of a document
#[derive(Debug)]
pub struct ClassIndex {
    order: Vec<NodeId>,
    entries: BTreeMap<NodeId, Entry>,
}

impl ClassIndex {
    /// Pass 1
    pub fn build(doc: &ModelDocument, config: &UmlgenConfig) -> Self {
        let mut order = Vec::new();
        let mut entries = BTreeMap::new();

        for class in doc.classes() {
            let node = doc.tree().node(class);
            let Some(name) = node.name.clone() else {
                debug!(identifier = ?node.identifier, "skipping unnamed class");
                continue;
            };
            let (package, draft) = match namespace(doc, class) {
                Ok(package) => {
                    let draft = draft_class(doc, config, class, package.clone());
                    (Some(package), draft)
                }
                Err(e) => (None, Err(e)),
            };
            debug!(class = %name, ok = draft.is_ok(), "drafted class");

            order.push(class);
            entries.insert(
                class,
                Entry {
                    name,
                    identifier: node.identifier.clone(),
                    package,
                    draft,
                },
            );
        }

        Self { order, entries }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Name, identifier and package path of every class that has one
    pub fn packages(&self) -> impl Iterator<Item = (&str, Option<&str>, &[String])> {
        self.order.iter().filter_map(|id| {
            let entry = &self.entries[id];
            entry
                .package
                .as_deref()
                .map(|p| (entry.name.as_str(), entry.identifier.as_deref(), p))
        })
    }

    /// Pass 2
    pub fn resolve(self) -> Resolution {
        let mut failed: BTreeMap<NodeId, GenError> = BTreeMap::new();

        loop {
            let mut newly_failed = Vec::new();
            for &id in &self.order {
                if failed.contains_key(&id) {
                    continue;
                }
                if let Err(e) = self.check(id, &failed) {
                    newly_failed.push((id, e));
                }
            }
            if newly_failed.is_empty() {
                break;
            }
            failed.extend(newly_failed);
        }

        let mut resolution = Resolution::default();
        let ClassIndex { order, mut entries } = self;
        let mut descriptors: BTreeMap<NodeId, ClassDescriptor> = order
            .iter()
            .filter(|id| !failed.contains_key(id))
            .filter_map(|&id| Some((id, describe(&entries, id)?)))
            .collect();

        for id in order {
            let Some(entry) = entries.remove(&id) else {
                continue;
            };
            if let Some(error) = failed.remove(&id) {
                resolution.skipped.push((entry.name, entry.identifier, error));
            } else if let Err(error) = entry.draft {
                resolution.skipped.push((entry.name, entry.identifier, error));
            } else if let Some(descriptor) = descriptors.remove(&id) {
                resolution.classes.push(descriptor);
            }
        }
        resolution
    }

    fn draft(&self, id: NodeId, failed: &BTreeMap<NodeId, GenError>) -> Option<&Draft> {
        if failed.contains_key(&id) {
            return None;
        }
        self.entries.get(&id).and_then(|e| e.draft.as_ref().ok())
    }

    fn label(&self, id: NodeId) -> String {
        self.entries
            .get(&id)
            .map_or_else(|| format!("{id:?}"), |e| e.name.clone())
    }

    fn check(&self, id: NodeId, failed: &BTreeMap<NodeId, GenError>) -> Result<()> {
        let name = self.label(id);
        let Some(draft) = self.draft(id, failed) else {
            // Already failed in pass 1; reported from its entry.
            return Ok(());
        };

        // Base chain: every ancestor must survive, without cycles.
        let mut seen = HashSet::from([id]);
        let mut base = &draft.base;
        while let BaseLink::Class(next) = base {
            if !seen.insert(*next) {
                return Err(GenError::unresolved(&name, "cyclic generalization"));
            }
            let next_draft = self.draft(*next, failed).ok_or_else(|| {
                GenError::unresolved(&name, format!("base class {}", self.label(*next)))
            })?;
            base = &next_draft.base;
        }

        for attribute in &draft.attributes {
            let RawAttribute::Reference {
                name: end,
                target,
                inverse: Some(inverse),
                ..
            } = attribute
            else {
                continue;
            };
            let found = self.find_end(*target, inverse, failed).ok_or_else(|| {
                GenError::unresolved(
                    &name,
                    format!("inverse end {}.{inverse} of {end}", self.label(*target)),
                )
            })?;
            if !matches!(found, RawAttribute::Reference { .. }) {
                let target = self.label(*target);
                return Err(GenError::unresolved(
                    &name,
                    format!("inverse end {target}.{inverse} of {end} (not a reference)"),
                ));
            }
        }
        Ok(())
    }

    /// Look up an end on a class or its bases
    fn find_end(
        &self,
        class: NodeId,
        end: &str,
        failed: &BTreeMap<NodeId, GenError>,
    ) -> Option<&RawAttribute> {
        find_end_in(class, end, |id| self.draft(id, failed))
    }
}

fn draft_class(
    doc: &ModelDocument,
    config: &UmlgenConfig,
    class: NodeId,
    package: Vec<String>,
) -> Result<Draft> {
    Ok(Draft {
        package,
        base: hierarchy(doc, class)?,
        documentation: documentation(doc, class),
        attributes: class_properties(doc, config, class)?,
    })
}

fn find_end_in<'a>(
    class: NodeId,
    end: &str,
    draft: impl Fn(NodeId) -> Option<&'a Draft>,
) -> Option<&'a RawAttribute> {
    let mut seen = HashSet::new();
    let mut current = Some(class);
    while let Some(id) = current {
        if !seen.insert(id) {
            return None;
        }
        let d = draft(id)?;
        if let Some(found) = d.attributes.iter().find(|a| a.name() == end) {
            return Some(found);
        }
        current = match d.base {
            BaseLink::Class(next) => Some(next),
            BaseLink::Root => None,
        };
    }
    None
}

/// Build the descriptor of a class that passed every check
fn describe(entries: &BTreeMap<NodeId, Entry>, id: NodeId) -> Option<ClassDescriptor> {
    let entry = entries.get(&id)?;
    let draft = entry.draft.as_ref().ok()?;
    let lookup = |id: NodeId| entries.get(&id).and_then(|e| e.draft.as_ref().ok());

    let base = match draft.base {
        BaseLink::Root => BaseClass::Root,
        BaseLink::Class(base) => {
            let base_entry = entries.get(&base)?;
            BaseClass::Class {
                name: base_entry.name.clone(),
                package: base_entry.draft.as_ref().ok()?.package.clone(),
            }
        }
    };

    let mut attributes = Vec::with_capacity(draft.attributes.len());
    for attribute in &draft.attributes {
        let descriptor = match attribute {
            RawAttribute::Scalar {
                name,
                ty,
                default,
                documentation,
            } => AttributeDescriptor::Scalar {
                name: name.clone(),
                ty: ty.clone(),
                default: default.clone(),
                documentation: documentation.clone(),
            },
            RawAttribute::Reference {
                name,
                target,
                multiplicity,
                inverse,
                documentation,
            } => {
                let inverse = match inverse {
                    Some(inverse) => match find_end_in(*target, inverse, lookup)? {
                        RawAttribute::Reference { multiplicity, .. } => Some(InverseEnd {
                            name: inverse.clone(),
                            multiplicity: *multiplicity,
                        }),
                        RawAttribute::Scalar { .. } => return None,
                    },
                    None => None,
                };
                AttributeDescriptor::Reference {
                    name: name.clone(),
                    target: entries
                        .get(target)
                        .map_or_else(|| format!("{target:?}"), |e| e.name.clone()),
                    multiplicity: *multiplicity,
                    inverse,
                    documentation: documentation.clone(),
                }
            }
        };
        attributes.push(descriptor);
    }

    Some(ClassDescriptor {
        identifier: entry.identifier.clone(),
        name: entry.name.clone(),
        package: draft.package.clone(),
        base,
        documentation: draft.documentation.clone(),
        attributes,
    })
}
