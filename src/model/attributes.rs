//! Property Classification
//!
//! Turns the `ownedAttribute` elements of a class into [`RawAttribute`]s:
//! scalars for primitive and enumeration types, references for anything
//! typed by another class. References keep the target as a node id; target
//! names and inverse multiplicities are resolved later against the class index.

use serde::Serialize;
use tracing::debug;

use super::{resolve, ModelDocument, NodeId, NodeKind, PrimitiveKind};
use crate::config::UmlgenConfig;
use crate::error::{GenError, Result};

/// Declared cardinality of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplicity {
    Single,
    Many,
}

impl Multiplicity {
    /// From an `upperValue` literal: `*`, `-1` or anything above 1 is many
    pub fn from_upper(upper: Option<&str>) -> Self {
        match upper.map(str::trim) {
            Some("*") | Some("-1") => Self::Many,
            Some(value) => match value.parse::<u64>() {
                Ok(n) if n > 1 => Self::Many,
                _ => Self::Single,
            },
            None => Self::Single,
        }
    }
}

/// Type of a scalar attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Primitive(PrimitiveKind),
    /// Enumeration, by type name. Values are stored as text.
    Enumeration(String),
}

/// A classified property before cross-class resolution
#[derive(Debug, Clone, PartialEq)]
pub enum RawAttribute {
    Scalar {
        name: String,
        ty: ScalarType,
        default: Option<String>,
        documentation: Option<String>,
    },
    Reference {
        name: String,
        target: NodeId,
        multiplicity: Multiplicity,
        /// Name of the opposite end, when it is owned by the target class
        inverse: Option<String>,
        documentation: Option<String>,
    },
}

impl RawAttribute {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name, .. } | Self::Reference { name, .. } => name,
        }
    }
}

enum Classified {
    Scalar(ScalarType),
    Class(NodeId),
}

/// Classify every named `ownedAttribute` of a class, in document order
pub fn class_properties(
    doc: &ModelDocument,
    config: &UmlgenConfig,
    class: NodeId,
) -> Result<Vec<RawAttribute>> {
    let tree = doc.tree();
    let class_label = tree.node(class).label().to_string();
    let mut result = Vec::new();

    for (prop, node) in tree.children_tagged(class, "ownedAttribute") {
        let Some(name) = node.name.clone() else {
            debug!(class = %class_label, "skipping unnamed property");
            continue;
        };
        let documentation = resolve::documentation(doc, prop);

        let attribute = match classify_type(doc, config, &class_label, prop)? {
            Classified::Scalar(ty) => RawAttribute::Scalar {
                name,
                ty,
                default: tree
                    .children_tagged(prop, "defaultValue")
                    .find_map(|(_, d)| d.attr("value"))
                    .map(str::to_string),
                documentation,
            },
            Classified::Class(target) => {
                let upper = tree
                    .children_tagged(prop, "upperValue")
                    .find_map(|(_, u)| u.attr("value"));
                RawAttribute::Reference {
                    multiplicity: Multiplicity::from_upper(upper),
                    inverse: inverse_end(doc, &class_label, prop)?,
                    name,
                    target,
                    documentation,
                }
            }
        };
        result.push(attribute);
    }

    debug!(class = %class_label, count = result.len(), "classified properties");
    Ok(result)
}

fn classify_type(
    doc: &ModelDocument,
    config: &UmlgenConfig,
    class_label: &str,
    prop: NodeId,
) -> Result<Classified> {
    let tree = doc.tree();
    let text = Classified::Scalar(ScalarType::Primitive(PrimitiveKind::Text));

    let Some(type_id) = tree.reference_attr(prop, "type") else {
        // <type href="...uml.xml#String"/>
        let href_name = tree
            .children_tagged(prop, "type")
            .find_map(|(_, t)| t.attr("href"))
            .and_then(|href| href.rsplit('#').next());
        return Ok(match href_name.and_then(|n| config.primitive(n)) {
            Some(kind) => Classified::Scalar(ScalarType::Primitive(kind)),
            None => text,
        });
    };

    let Some(target) = tree.by_identifier(type_id) else {
        // Exporter built-ins such as EAJava_float or EAnone_String
        let builtin = type_id.rsplit('_').next().unwrap_or(type_id);
        return config
            .primitive(builtin)
            .map(|kind| Classified::Scalar(ScalarType::Primitive(kind)))
            .ok_or_else(|| GenError::unresolved(class_label, format!("property type {type_id}")));
    };

    let node = tree.node(target);
    let primitive = node.name.as_deref().and_then(|n| config.primitive(n));
    match (node.kind, primitive) {
        (_, Some(kind)) => Ok(Classified::Scalar(ScalarType::Primitive(kind))),
        (NodeKind::Class, None) => Ok(Classified::Class(target)),
        (NodeKind::Enumeration, None) => Ok(Classified::Scalar(ScalarType::Enumeration(
            node.label().to_string(),
        ))),
        (NodeKind::PrimitiveType | NodeKind::DataType, None) => {
            debug!(type_name = node.label(), "unmapped primitive type stored as text");
            Ok(text)
        }
        _ => Err(GenError::unresolved(
            class_label,
            format!("property type {type_id}"),
        )),
    }
}

/// Name of the opposite end of the property's association, if that end is
/// navigable from the target class
fn inverse_end(doc: &ModelDocument, class_label: &str, prop: NodeId) -> Result<Option<String>> {
    let tree = doc.tree();
    let Some(association_id) = tree.node(prop).attr("association") else {
        return Ok(None);
    };
    let association = tree
        .by_identifier(association_id)
        .filter(|&id| tree.node(id).kind == NodeKind::Association)
        .ok_or_else(|| GenError::unresolved(class_label, format!("association {association_id}")))?;

    let own = tree.node(prop).identifier.as_deref();
    let ends = tree.reference_list(association, "memberEnd");
    let opposite = match ends.as_slice() {
        [a, b] if Some(*a) == own => *b,
        [a, b] if Some(*b) == own => *a,
        _ => {
            return Err(GenError::unresolved(
                class_label,
                format!("member ends of association {association_id}"),
            ))
        }
    };

    let opposite = tree
        .by_identifier(opposite)
        .ok_or_else(|| GenError::unresolved(class_label, format!("association end {opposite}")))?;

    // Ends owned by the association itself have no storage on the target class.
    let class_owned = tree
        .parent(opposite)
        .is_some_and(|p| tree.node(p).kind == NodeKind::Class);
    if !class_owned {
        return Ok(None);
    }
    Ok(tree.node(opposite).name.clone())
}
