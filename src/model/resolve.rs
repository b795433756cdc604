//! Namespace, hierarchy and documentation resolution for class nodes

use tracing::debug;

use super::{ModelDocument, NodeId, NodeKind};
use crate::error::{GenError, Result};

/// Resolved base of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseLink {
    /// No generalization: derives from the universal root type
    Root,
    /// Single generalization to another class node
    Class(NodeId),
}

/// Enclosing package names, outermost first.
///
/// Only ancestors typed `uml:Package` count; the model element itself does not.
pub fn namespace(doc: &ModelDocument, class: NodeId) -> Result<Vec<String>> {
    let tree = doc.tree();
    let mut packages: Vec<String> = tree
        .ancestors(class)
        .map(|id| tree.node(id))
        .filter(|n| n.kind == NodeKind::Package)
        .filter_map(|n| n.name.clone())
        .collect();
    packages.reverse();

    if packages.is_empty() {
        return Err(GenError::MissingNamespace {
            class: tree.node(class).label().to_string(),
        });
    }
    Ok(packages)
}

/// Zero or one generalization of a class, resolved against the identifier index
pub fn hierarchy(doc: &ModelDocument, class: NodeId) -> Result<BaseLink> {
    let tree = doc.tree();
    let node = tree.node(class);
    let edges: Vec<NodeId> = tree
        .children(class)
        .filter(|(_, n)| n.kind == NodeKind::Generalization)
        .map(|(id, _)| id)
        .collect();

    let edge = match edges.as_slice() {
        [] => return Ok(BaseLink::Root),
        [edge] => *edge,
        _ => {
            return Err(GenError::UnsupportedModel {
                class: node.label().to_string(),
                count: edges.len(),
            })
        }
    };

    let target = tree
        .reference_attr(edge, "general")
        .ok_or_else(|| GenError::unresolved(node.label(), "generalization without target"))?;
    let base = tree
        .by_identifier(target)
        .filter(|&id| tree.node(id).kind == NodeKind::Class)
        .ok_or_else(|| GenError::unresolved(node.label(), format!("base class {target}")))?;

    debug!(class = node.label(), base = tree.node(base).label(), "resolved base class");
    Ok(BaseLink::Class(base))
}

/// Class or property documentation, if any
pub fn documentation(doc: &ModelDocument, element: NodeId) -> Option<String> {
    let identifier = doc.tree().node(element).identifier.as_deref()?;
    doc.annotation(identifier).map(str::to_string)
}
